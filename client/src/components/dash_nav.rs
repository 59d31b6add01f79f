//! Dashboard chrome: section links, signed-in identity and account actions.

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::state::session::SessionStore;
use crate::state::toast::ToastState;
use crate::util::auth::{sign_out, toggle_theme};

const SECTIONS: &[(&str, &str)] = &[
    ("/dashboard/", "Overview"),
    ("/dashboard/products", "Products"),
    ("/dashboard/profile", "Profile"),
];

#[component]
pub fn DashNav() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let cfg = expect_context::<ClientConfig>();

    let identity = move || {
        session.with(|s| {
            s.user()
                .map(|u| if u.name.is_empty() { u.email.clone() } else { u.name.clone() })
                .unwrap_or_default()
        })
    };
    let role = move || session.with(|s| s.user().map(|u| u.role.to_string()).unwrap_or_default());

    view! {
        <aside class="dash-nav">
            <a href="/" class="dash-nav__brand">"Tender-Hub"</a>
            <ul class="dash-nav__links">
                {SECTIONS
                    .iter()
                    .map(|(href, label)| view! { <li><a href=*href>{*label}</a></li> })
                    .collect::<Vec<_>>()}
            </ul>
            <div class="dash-nav__account">
                <span class="dash-nav__name">{identity}</span>
                <span class="dash-nav__role">{role}</span>
                <button class="btn btn--ghost btn--sm" on:click=move |_| toggle_theme(session, toasts)>
                    "Theme"
                </button>
                <a href="/login" class="btn btn--destructive btn--sm" on:click=move |_| sign_out(&cfg, session, toasts)>
                    "Logout"
                </a>
            </div>
        </aside>
    }
}
