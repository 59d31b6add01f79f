//! Login page: email + password against the remote auth API.
//!
//! SYSTEM CONTEXT
//! ==============
//! A submission takes a login ticket from the session store before the
//! request is sent. If the user submits again, or logs out, while the request
//! is in flight, the stale response is discarded instead of overwriting the
//! newer state.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use super::field_error;
use crate::components::toasts::notify;
use crate::components::ui::{Button, TextInput};
use crate::config::ClientConfig;
use crate::net::types::LoginRequest;
use crate::state::session::SessionStore;
use crate::state::toast::{Toast, ToastState};
use crate::util::forms::{FORM_HAS_ERRORS, FormErrors, validate_login};

pub const LOGGING_IN: &str = "Logging in...";
pub const LOGIN_OK: &str = "Login successful!";

/// Validate the form and build the request body.
pub(crate) fn login_request(email: &str, password: &str, remember_me: bool) -> Result<LoginRequest, FormErrors> {
    let errors = validate_login(email, password);
    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(LoginRequest { email: email.trim().to_owned(), password: password.to_owned(), remember_me })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let cfg = expect_context::<ClientConfig>();
    let navigate = leptos_router::hooks::use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let remember_me = RwSignal::new(false);
    let errors = RwSignal::new(FormErrors::default());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let req = match login_request(&email.get_untracked(), &password.get_untracked(), remember_me.get_untracked()) {
            Ok(req) => req,
            Err(e) => {
                errors.set(e);
                notify(toasts, Toast::error(FORM_HAS_ERRORS));
                return;
            }
        };
        errors.set(FormErrors::default());
        let Some(ticket) = session.try_update(SessionStore::begin_login) else {
            return;
        };
        busy.set(true);
        let toast_id = notify(toasts, Toast::loading(LOGGING_IN));

        #[cfg(feature = "hydrate")]
        {
            use crate::components::toasts::resolve;
            use crate::net::api;

            let cfg = cfg.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match api::login(&cfg, &req).await {
                    Ok(resp) if resp.user.is_empty() => {
                        log::warn!("login response carried no user");
                        resolve(toasts, toast_id, Toast::error(api::LOGIN_FAILED));
                    }
                    Ok(resp) => {
                        let token = resp.token.unwrap_or_default();
                        let installed =
                            session.try_update(|s| s.complete_login(ticket, resp.user, token)).unwrap_or(false);
                        if installed {
                            resolve(toasts, toast_id, Toast::success(LOGIN_OK));
                            navigate("/dashboard/", leptos_router::NavigateOptions::default());
                        } else {
                            toasts.update(|q| q.dismiss(toast_id));
                        }
                    }
                    Err(e) => resolve(toasts, toast_id, Toast::error(e.user_message(api::LOGIN_FAILED))),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&cfg, &navigate, req, ticket, toast_id);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__brand">"Tender" <span>"-Hub"</span></h1>
                <p class="auth-card__subtitle">"Sign in to your account"</p>
                <form class="auth-form" on:submit=on_submit novalidate=true>
                    <TextInput
                        label="Email"
                        name="email"
                        value=email
                        input_type="email"
                        placeholder="you@company.co.ke"
                        error=field_error(errors, "email")
                    />
                    <TextInput
                        label="Password"
                        name="password"
                        value=password
                        input_type="password"
                        error=field_error(errors, "password")
                    />
                    <div class="auth-form__row">
                        <label class="checkbox">
                            <input
                                type="checkbox"
                                prop:checked=move || remember_me.get()
                                on:change=move |ev| remember_me.set(event_target_checked(&ev))
                            />
                            "Remember me"
                        </label>
                        <a href="/forgot">"Forgot password?"</a>
                    </div>
                    <Button kind="submit" class="btn--block" loading=busy>
                        "Sign In"
                    </Button>
                </form>
                <p class="auth-card__footer">
                    "Don't have an account? " <a href="/register">"Register"</a>
                </p>
            </div>
        </div>
    }
}
