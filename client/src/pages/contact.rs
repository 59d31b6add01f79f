//! Contact form posting to the API's mail relay.

use leptos::prelude::*;

use super::field_error;
use crate::components::toasts::notify;
use crate::components::ui::{Button, TextInput};
use crate::config::ClientConfig;
use crate::net::types::ContactRequest;
use crate::state::toast::{Toast, ToastState};
use crate::util::forms::{FORM_HAS_ERRORS, FormErrors, validate_contact};

pub const SENDING: &str = "Sending message...";
pub const SENT: &str = "Message sent! We'll get back to you shortly.";

#[component]
pub fn ContactPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let cfg = expect_context::<ClientConfig>();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let subject = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let errors = RwSignal::new(FormErrors::default());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let req = ContactRequest {
            name: name.get_untracked().trim().to_owned(),
            email: email.get_untracked().trim().to_owned(),
            subject: subject.get_untracked().trim().to_owned(),
            message: message.get_untracked().trim().to_owned(),
        };
        let found = validate_contact(&req);
        if !found.is_empty() {
            errors.set(found);
            notify(toasts, Toast::error(FORM_HAS_ERRORS));
            return;
        }
        errors.set(FormErrors::default());
        busy.set(true);
        let toast_id = notify(toasts, Toast::loading(SENDING));

        #[cfg(feature = "hydrate")]
        {
            use crate::components::toasts::resolve;
            use crate::net::api;

            let cfg = cfg.clone();
            leptos::task::spawn_local(async move {
                match api::send_contact_message(&cfg, &req).await {
                    Ok(()) => {
                        resolve(toasts, toast_id, Toast::success(SENT));
                        name.set(String::new());
                        email.set(String::new());
                        subject.set(String::new());
                        message.set(String::new());
                    }
                    Err(e) => resolve(toasts, toast_id, Toast::error(e.user_message(api::CONTACT_FAILED))),
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
        <section class="page contact">
            <h1>"Get in touch"</h1>
            <p class="page__lead">"Questions about a tender, training or your account? Send us a note."</p>
            <form class="contact__form" on:submit=on_submit novalidate=true>
                <TextInput label="Name" name="name" value=name error=field_error(errors, "name")/>
                <TextInput label="Email" name="email" value=email input_type="email" error=field_error(errors, "email")/>
                <TextInput label="Subject" name="subject" value=subject error=field_error(errors, "subject")/>
                <label class="field">
                    <span class="field__label">"Message"</span>
                    <textarea
                        class=move || crate::components::ui::input_class(errors.with(|e| e.get("message").is_some()))
                        name="message"
                        rows="6"
                        prop:value=move || message.get()
                        on:input=move |ev| message.set(event_target_value(&ev))
                    ></textarea>
                    <Show when=move || errors.with(|e| e.get("message").is_some())>
                        <p class="field__error">{move || errors.with(|e| e.get("message").unwrap_or_default())}</p>
                    </Show>
                </label>
                <Button kind="submit" loading=busy>"Send Message"</Button>
            </form>
        </section>
    }
}
