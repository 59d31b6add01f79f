//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (validation, API calls, toasts)
//! and delegates rendering details to `components`.

pub mod activate;
pub mod contact;
pub mod dashboard;
pub mod fallbacks;
pub mod forgot;
pub mod login;
pub mod profile;
pub mod public;
pub mod register;
pub mod reset;

use leptos::prelude::*;

use crate::util::forms::FormErrors;

/// Reactive view of one field's first validation error.
pub(crate) fn field_error(errors: RwSignal<FormErrors>, field: &'static str) -> Signal<Option<&'static str>> {
    Signal::derive(move || errors.with(|e| e.get(field)))
}
