//! Account activation from the emailed `/activate/:token` link.
//!
//! The request fires once when the page mounts; the page only renders the
//! outcome.

#[cfg(test)]
#[path = "activate_test.rs"]
mod activate_test;

use leptos::prelude::*;

use crate::components::ui::{Alert, AlertVariant};
use crate::net::error::ApiError;
use crate::net::types::InfoResponse;

pub const ACTIVATED: &str = "Your account has been activated. You can now sign in.";
pub const MISSING_TOKEN: &str = "This activation link is incomplete.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Activation {
    Pending,
    Activated(String),
    Failed(String),
}

/// Turn the API result into what the page shows.
pub(crate) fn activation_outcome(result: Result<InfoResponse, ApiError>) -> Activation {
    match result {
        Ok(resp) => Activation::Activated(resp.info.filter(|i| !i.trim().is_empty()).unwrap_or_else(|| ACTIVATED.to_owned())),
        Err(e) => Activation::Failed(e.user_message(crate::net::api::ACTIVATE_FAILED)),
    }
}

#[component]
pub fn ActivatePage(#[prop(into)] token: String) -> impl IntoView {
    let state = RwSignal::new(Activation::Pending);
    let token = token.trim().to_owned();

    if token.is_empty() {
        state.set(Activation::Failed(MISSING_TOKEN.to_owned()));
    } else {
        #[cfg(feature = "hydrate")]
        {
            let cfg = expect_context::<crate::config::ClientConfig>();
            let req = crate::net::types::ActivateRequest { token };
            leptos::task::spawn_local(async move {
                let result = crate::net::api::activate_account(&cfg, &req).await;
                if let Err(e) = &result {
                    log::warn!("activation failed: {e}");
                }
                state.set(activation_outcome(result));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    }

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__brand">"Account Activation"</h1>
                {move || match state.get() {
                    Activation::Pending => view! {
                        <p class="auth-card__subtitle">"Activating your account..."</p>
                    }
                    .into_any(),
                    Activation::Activated(msg) => view! {
                        <Alert variant=AlertVariant::Success title="Activated">
                            {msg} " " <a href="/login">"Sign in"</a>
                        </Alert>
                    }
                    .into_any(),
                    Activation::Failed(msg) => view! {
                        <Alert variant=AlertVariant::Destructive title="Activation failed">
                            {msg}
                        </Alert>
                    }
                    .into_any(),
                }}
            </div>
        </div>
    }
}
