//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` is the single writer for identity and theme, `storage` is its
//! persistence seam, and `toast` queues transient notifications. The root
//! component provides each as a Leptos context.

pub mod session;
pub mod storage;
pub mod toast;
