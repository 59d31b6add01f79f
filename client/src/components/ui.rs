//! Presentational primitives: buttons, alerts, labelled inputs and selects.
//!
//! Variant → class resolution is kept in plain functions so styling rules
//! can be checked without rendering.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Default,
    Destructive,
    Warning,
    Info,
    Success,
    Outline,
    Secondary,
    Ghost,
    Link,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    #[default]
    Default,
    Sm,
    Lg,
    Icon,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AlertVariant {
    #[default]
    Default,
    Destructive,
    Success,
    Warning,
    Info,
}

/// Join the base, variant and size classes plus any caller extras.
pub fn button_class(variant: ButtonVariant, size: ButtonSize, extra: &str) -> String {
    let variant = match variant {
        ButtonVariant::Default => "btn--primary",
        ButtonVariant::Destructive => "btn--destructive",
        ButtonVariant::Warning => "btn--warning",
        ButtonVariant::Info => "btn--info",
        ButtonVariant::Success => "btn--success",
        ButtonVariant::Outline => "btn--outline",
        ButtonVariant::Secondary => "btn--secondary",
        ButtonVariant::Ghost => "btn--ghost",
        ButtonVariant::Link => "btn--link",
    };
    let size = match size {
        ButtonSize::Default => "btn--md",
        ButtonSize::Sm => "btn--sm",
        ButtonSize::Lg => "btn--lg",
        ButtonSize::Icon => "btn--icon",
    };
    join_classes(&["btn", variant, size, extra])
}

pub fn alert_class(variant: AlertVariant) -> String {
    let variant = match variant {
        AlertVariant::Default => "alert--default",
        AlertVariant::Destructive => "alert--destructive",
        AlertVariant::Success => "alert--success",
        AlertVariant::Warning => "alert--warning",
        AlertVariant::Info => "alert--info",
    };
    join_classes(&["alert", variant])
}

pub fn input_class(has_error: bool) -> String {
    join_classes(&["input", if has_error { "input--error" } else { "" }])
}

fn join_classes(parts: &[&str]) -> String {
    parts.iter().map(|p| p.trim()).filter(|p| !p.is_empty()).collect::<Vec<_>>().join(" ")
}

/// Button that disables itself and shows a spinner while `loading`.
#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] loading: Signal<bool>,
    #[prop(optional, into)] disabled: Signal<bool>,
    #[prop(default = "button")] kind: &'static str,
    #[prop(optional)] on_click: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let class = button_class(variant, size, &class);
    view! {
        <button
            type=kind
            class=class
            data-slot="button"
            disabled=move || loading.get() || disabled.get()
            on:click=move |_| {
                if let Some(cb) = on_click {
                    cb.run(());
                }
            }
        >
            <Show when=move || loading.get()>
                <span class="btn__spinner" aria-hidden="true"></span>
            </Show>
            <span class="btn__label">{children()}</span>
        </button>
    }
}

#[component]
pub fn Alert(
    #[prop(optional)] variant: AlertVariant,
    #[prop(optional, into)] title: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=alert_class(variant) role="alert" data-slot="alert">
            {title.map(|t| view! { <div class="alert__title">{t}</div> })}
            <div class="alert__description">{children()}</div>
        </div>
    }
}

/// Labelled text input bound to `value`, with an optional error line.
#[component]
pub fn TextInput(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    value: RwSignal<String>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional, into)] error: Signal<Option<&'static str>>,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <input
                class=move || input_class(error.get().is_some())
                type=input_type
                name=name
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <Show when=move || error.get().is_some()>
                <p class="field__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
        </label>
    }
}

/// Labelled `<select>` over `(value, label)` options.
#[component]
pub fn Select(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    value: RwSignal<String>,
    options: Vec<(&'static str, &'static str)>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] error: Signal<Option<&'static str>>,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <select
                class=move || input_class(error.get().is_some())
                name=name
                prop:value=move || value.get()
                on:change=move |ev| value.set(event_target_value(&ev))
            >
                {placeholder.map(|p| view! { <option value="" disabled=true>{p}</option> })}
                {options
                    .into_iter()
                    .map(|(v, l)| view! { <option value=v>{l}</option> })
                    .collect::<Vec<_>>()}
            </select>
            <Show when=move || error.get().is_some()>
                <p class="field__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
        </label>
    }
}
