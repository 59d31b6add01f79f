//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome and form primitives while reading/writing
//! shared state from Leptos context providers.

pub mod dash_nav;
pub mod footer;
pub mod navbar;
pub mod protected_route;
pub mod toasts;
pub mod ui;
