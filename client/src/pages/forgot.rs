//! Request a password-reset link by email.

use leptos::prelude::*;

use super::field_error;
use crate::components::toasts::notify;
use crate::components::ui::{Alert, AlertVariant, Button, TextInput};
use crate::config::ClientConfig;
use crate::net::types::ForgotPasswordRequest;
use crate::state::toast::{Toast, ToastState};
use crate::util::forms::{FORM_HAS_ERRORS, FormErrors, validate_forgot};

pub const SENDING_RESET: &str = "Sending reset link...";
pub const RESET_LINK_SENT: &str = "Reset password sent successfully";

#[component]
pub fn ForgotPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let cfg = expect_context::<ClientConfig>();

    let email = RwSignal::new(String::new());
    let errors = RwSignal::new(FormErrors::default());
    let busy = RwSignal::new(false);
    let sent = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let value = email.get_untracked().trim().to_owned();
        let found = validate_forgot(&value);
        if !found.is_empty() {
            errors.set(found);
            notify(toasts, Toast::error(FORM_HAS_ERRORS));
            return;
        }
        errors.set(FormErrors::default());
        busy.set(true);
        let toast_id = notify(toasts, Toast::loading(SENDING_RESET));
        let req = ForgotPasswordRequest { email: value };

        #[cfg(feature = "hydrate")]
        {
            use crate::components::toasts::resolve;
            use crate::net::api;

            let cfg = cfg.clone();
            leptos::task::spawn_local(async move {
                match api::request_password_reset(&cfg, &req).await {
                    Ok(()) => {
                        sent.set(true);
                        resolve(toasts, toast_id, Toast::success(RESET_LINK_SENT));
                    }
                    Err(e) => resolve(toasts, toast_id, Toast::error(e.user_message(api::FORGOT_FAILED))),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&cfg, req, toast_id);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__brand">"Forgot your password?"</h1>
                <p class="auth-card__subtitle">"Enter your email and we'll send you a reset link."</p>
                <Show when=move || sent.get()>
                    <Alert variant=AlertVariant::Success title="Check your inbox">
                        "If an account exists for that address, a reset link is on its way."
                    </Alert>
                </Show>
                <form class="auth-form" on:submit=on_submit novalidate=true>
                    <TextInput
                        label="Email"
                        name="email"
                        value=email
                        input_type="email"
                        error=field_error(errors, "email")
                    />
                    <Button kind="submit" class="btn--block" loading=busy>
                        "Send Reset Link"
                    </Button>
                </form>
                <p class="auth-card__footer"><a href="/login">"Back to sign in"</a></p>
            </div>
        </div>
    }
}
