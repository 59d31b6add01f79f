//! Choose a new password using the one-time code from the reset link.

#[cfg(test)]
#[path = "reset_test.rs"]
mod reset_test;

use leptos::prelude::*;

use super::field_error;
use crate::components::toasts::notify;
use crate::components::ui::{Alert, AlertVariant, Button, TextInput};
use crate::config::ClientConfig;
use crate::net::types::ResetPasswordRequest;
use crate::state::toast::{Toast, ToastState};
use crate::util::forms::{FORM_HAS_ERRORS, FormErrors, validate_reset};

pub const RESET_OK: &str = "Your password has been reset. You can now sign in.";

/// Validate and attach the link's code as `otp`.
pub(crate) fn reset_request(password: &str, confirm: &str, otp: &str) -> Result<ResetPasswordRequest, FormErrors> {
    let errors = validate_reset(password, confirm);
    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(ResetPasswordRequest {
        password: password.to_owned(),
        confirm_password: confirm.to_owned(),
        otp: otp.trim().to_owned(),
    })
}

#[component]
pub fn ResetPage(
    /// The `:token` segment of `/reset/:token`.
    #[prop(into)]
    token: String,
) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let cfg = expect_context::<ClientConfig>();

    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let errors = RwSignal::new(FormErrors::default());
    let busy = RwSignal::new(false);
    let message = RwSignal::new(None::<String>);
    let failure = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let req = match reset_request(&password.get_untracked(), &confirm.get_untracked(), &token) {
            Ok(req) => req,
            Err(e) => {
                errors.set(e);
                notify(toasts, Toast::error(FORM_HAS_ERRORS));
                return;
            }
        };
        errors.set(FormErrors::default());
        message.set(None);
        failure.set(None);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            use crate::net::api;

            let cfg = cfg.clone();
            leptos::task::spawn_local(async move {
                match api::reset_password(&cfg, &req).await {
                    Ok(resp) => message.set(Some(resp.info.unwrap_or_else(|| RESET_OK.to_owned()))),
                    Err(e) => failure.set(Some(e.user_message(api::RESET_FAILED))),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&cfg, req);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__brand">"Reset Your Password"</h1>
                <p class="auth-card__subtitle">"Enter your new password and confirm it below."</p>
                <Show when=move || message.get().is_some()>
                    <Alert variant=AlertVariant::Success title="Success">
                        {move || message.get().unwrap_or_default()}
                        " " <a href="/login">"Sign in"</a>
                    </Alert>
                </Show>
                <Show when=move || failure.get().is_some()>
                    <Alert variant=AlertVariant::Destructive title="Error">
                        {move || failure.get().unwrap_or_default()}
                    </Alert>
                </Show>
                <form class="auth-form" on:submit=on_submit novalidate=true>
                    <TextInput
                        label="New Password"
                        name="password"
                        value=password
                        input_type="password"
                        error=field_error(errors, "password")
                    />
                    <TextInput
                        label="Confirm Password"
                        name="confirm_password"
                        value=confirm
                        input_type="password"
                        error=field_error(errors, "confirm_password")
                    />
                    <Button kind="submit" class="btn--block" loading=busy>
                        "Reset Password"
                    </Button>
                </form>
            </div>
        </div>
    }
}
