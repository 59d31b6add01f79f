//! Shared auth UI actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Navbars, the dashboard chrome and the root component all sign out, flip
//! the theme and check for a server session the same way, so the sequencing
//! lives here once.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::components::toasts::notify;
use crate::config::ClientConfig;
use crate::state::session::SessionStore;
use crate::state::toast::{Toast, ToastState};

pub const SIGNED_OUT: &str = "You have been signed out.";

/// Clear the local session, then tell the server best-effort.
///
/// Local state is gone before the request is sent; a failed server logout is
/// only logged.
pub fn sign_out(cfg: &ClientConfig, session: RwSignal<SessionStore>, toasts: RwSignal<ToastState>) {
    let token = session.try_update(SessionStore::log_out).flatten();
    notify(toasts, Toast::info(SIGNED_OUT));

    #[cfg(feature = "hydrate")]
    {
        let cfg = cfg.clone();
        leptos::task::spawn_local(async move {
            if let Err(e) = crate::net::api::logout(&cfg, token.as_deref()).await {
                log::warn!("server logout failed: {e}");
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (cfg, token);
    }
}

/// Flip dark mode and show the store's confirmation toast.
pub fn toggle_theme(session: RwSignal<SessionStore>, toasts: RwSignal<ToastState>) {
    if let Some(toast) = session.try_update(SessionStore::toggle_dark_mode) {
        notify(toasts, toast);
    }
}

/// Adopt a server-side cookie session if nobody is signed in locally.
///
/// Does nothing unless `cfg.restore_server_session` is set. Runs under a
/// login ticket so an explicit login that finishes first wins.
pub fn restore_remote_session(cfg: &ClientConfig, session: RwSignal<SessionStore>) {
    if !cfg.restore_server_session || session.with_untracked(SessionStore::logged_in) {
        return;
    }
    let Some(ticket) = session.try_update(SessionStore::begin_login) else {
        return;
    };

    #[cfg(feature = "hydrate")]
    {
        let cfg = cfg.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_current_user(&cfg).await {
                Ok(resp) => {
                    session.update(|s| {
                        s.complete_login(ticket, resp.user, resp.token.unwrap_or_default());
                    });
                }
                Err(e) => log::debug!("no server session: {e}"),
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (cfg, ticket);
    }
}
