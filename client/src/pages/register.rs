//! Account registration for bidders and tender advertisers.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;

use super::field_error;
use crate::components::toasts::notify;
use crate::components::ui::{Button, Select, TextInput};
use crate::config::ClientConfig;
use crate::net::types::{RegisterRequest, UserType};
use crate::state::toast::{Toast, ToastState};
use crate::util::forms::{FORM_HAS_ERRORS, FormErrors, validate_register};

pub const REGISTERING: &str = "Registering...";
pub const REGISTER_OK: &str = "Registration successful!";

pub(crate) const ORGANISATION_OPTIONS: &[(&str, &str)] = &[
    ("private", "Private"),
    ("Government", "Government"),
    ("ngo", "NGO"),
    ("partnership", "Partnership"),
    ("others", "Others"),
];

/// Split a comma separated industry list, dropping blanks and duplicates.
pub(crate) fn parse_industries(raw: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for part in raw.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        if !out.iter().any(|seen| seen.eq_ignore_ascii_case(part)) {
            out.push(part.to_owned());
        }
    }
    out
}

/// Trim the free-text fields and validate.
///
/// Bidders never send a KRA PIN or company type even if one was typed before
/// switching account type.
pub(crate) fn register_request(mut form: RegisterRequest) -> Result<RegisterRequest, FormErrors> {
    form.company_name = form.company_name.trim().to_owned();
    form.email = form.email.trim().to_owned();
    form.contact_number = form.contact_number.trim().to_owned();
    form.location = form.location.trim().to_owned();
    form.kra_pin = form.kra_pin.trim().to_ascii_uppercase();
    if form.user_type == UserType::Bidder {
        form.kra_pin.clear();
        form.company_type.clear();
    }
    let errors = validate_register(&form);
    if errors.is_empty() { Ok(form) } else { Err(errors) }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let cfg = expect_context::<ClientConfig>();
    let navigate = leptos_router::hooks::use_navigate();

    let user_type = RwSignal::new(UserType::Bidder);
    let company_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let contact_number = RwSignal::new(String::new());
    let company_type = RwSignal::new(String::new());
    let sector = RwSignal::new(String::new());
    let kra_pin = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());
    let industries = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let errors = RwSignal::new(FormErrors::default());
    let busy = RwSignal::new(false);

    let is_tenderer = move || user_type.get() == UserType::Tenderer;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = RegisterRequest {
            user_type: user_type.get_untracked(),
            company_name: company_name.get_untracked(),
            email: email.get_untracked(),
            contact_number: contact_number.get_untracked(),
            company_type: company_type.get_untracked(),
            sector: sector.get_untracked(),
            kra_pin: kra_pin.get_untracked(),
            location: location.get_untracked(),
            industries: parse_industries(&industries.get_untracked()),
            password: password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
        };
        let req = match register_request(form) {
            Ok(req) => req,
            Err(e) => {
                errors.set(e);
                notify(toasts, Toast::error(FORM_HAS_ERRORS));
                return;
            }
        };
        errors.set(FormErrors::default());
        busy.set(true);
        let toast_id = notify(toasts, Toast::loading(REGISTERING));

        #[cfg(feature = "hydrate")]
        {
            use crate::components::toasts::resolve;
            use crate::net::api;

            let cfg = cfg.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match api::register(&cfg, &req).await {
                    Ok(()) => {
                        resolve(toasts, toast_id, Toast::success(REGISTER_OK));
                        navigate("/login", leptos_router::NavigateOptions::default());
                    }
                    Err(e) => resolve(toasts, toast_id, Toast::error(e.user_message(api::REGISTER_FAILED))),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&cfg, &navigate, req, toast_id);
        }
    };

    let type_button = move |value: UserType, label: &'static str| {
        view! {
            <label class="radio">
                <input
                    type="radio"
                    name="user_type"
                    value=value.as_str()
                    prop:checked=move || user_type.get() == value
                    on:change=move |_| user_type.set(value)
                />
                {label}
            </label>
        }
    };

    view! {
        <div class="auth-page auth-page--wide">
            <div class="auth-card">
                <h1 class="auth-card__brand">"Tender" <span>"-Hub"</span></h1>
                <p class="auth-card__subtitle">"Create your account"</p>
                <form class="auth-form auth-form--grid" on:submit=on_submit novalidate=true>
                    <fieldset class="field field--wide">
                        <legend class="field__label">"Account Type"</legend>
                        {type_button(UserType::Bidder, "Bidder/Supplier")}
                        {type_button(UserType::Tenderer, "Tender Advertiser")}
                    </fieldset>
                    <TextInput label="Name" name="company_name" value=company_name error=field_error(errors, "company_name")/>
                    <TextInput
                        label="Email Address"
                        name="email"
                        value=email
                        input_type="email"
                        error=field_error(errors, "email")
                    />
                    <TextInput
                        label="Phone Number"
                        name="contact_number"
                        value=contact_number
                        input_type="tel"
                        placeholder="0712345678"
                        error=field_error(errors, "contact_number")
                    />
                    <Show when=is_tenderer>
                        <Select
                            label="Company Type"
                            name="company_type"
                            value=company_type
                            options=ORGANISATION_OPTIONS.to_vec()
                            placeholder="Select Company Type"
                        />
                    </Show>
                    <Select
                        label="Sector"
                        name="sector"
                        value=sector
                        options=ORGANISATION_OPTIONS[..4].to_vec()
                        placeholder="Select Sector"
                        error=field_error(errors, "sector")
                    />
                    <Show when=is_tenderer>
                        <TextInput
                            label="KRA PIN Number"
                            name="kra_pin"
                            value=kra_pin
                            placeholder="A123456789B"
                            error=field_error(errors, "kra_pin")
                        />
                    </Show>
                    <TextInput label="Location" name="location" value=location error=field_error(errors, "location")/>
                    <TextInput
                        label="Industries (comma separated)"
                        name="industries"
                        value=industries
                        placeholder="Construction, ICT"
                        error=field_error(errors, "industries")
                    />
                    <TextInput
                        label="Password"
                        name="password"
                        value=password
                        input_type="password"
                        error=field_error(errors, "password")
                    />
                    <TextInput
                        label="Confirm Password"
                        name="confirm_password"
                        value=confirm_password
                        input_type="password"
                        error=field_error(errors, "confirm_password")
                    />
                    <Button kind="submit" class="btn--block" loading=busy>
                        "Register"
                    </Button>
                </form>
                <p class="auth-card__footer">"Already registered? " <a href="/login">"Sign in"</a></p>
            </div>
        </div>
    }
}
