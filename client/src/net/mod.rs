//! Networking modules for the remote tender API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the REST calls, `error` turns failures into user-facing
//! messages, and `types` defines the request/response schema.

pub mod api;
pub mod error;
pub mod types;
