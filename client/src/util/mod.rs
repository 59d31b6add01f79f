//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep decisions and browser glue out of page and component
//! code: `access` decides route visibility, `auth` sequences sign-out and
//! theme actions, `forms` validates input, and `dark_mode` mirrors the theme
//! onto the document.

pub mod access;
pub mod auth;
pub mod dark_mode;
pub mod forms;
