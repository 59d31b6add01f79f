//! Public site navigation with theme toggle and sign-in/out controls.

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::state::session::SessionStore;
use crate::state::toast::ToastState;
use crate::util::auth::{sign_out, toggle_theme};

const LINKS: &[(&str, &str)] = &[
    ("/", "Home"),
    ("/about", "About"),
    ("/training", "Training"),
    ("/knowledge-hub", "Knowledge Hub"),
    ("/subscribe", "Subscribe"),
    ("/contact", "Contact"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let cfg = expect_context::<ClientConfig>();
    let menu_open = RwSignal::new(false);

    let logged_in = move || session.with(SessionStore::logged_in);
    let dark = move || session.with(SessionStore::dark_mode);
    // The anchor's own navigation lands on /login once the session is gone.
    let on_logout = move |_| sign_out(&cfg, session, toasts);

    view! {
        <nav class="navbar">
            <a href="/" class="navbar__brand">
                "Tender" <span class="navbar__brand-accent">"-Hub"</span>
            </a>
            <button class="navbar__menu" title="Menu" on:click=move |_| menu_open.update(|o| *o = !*o)>
                "☰"
            </button>
            <ul class="navbar__links" class:navbar__links--open=move || menu_open.get()>
                {LINKS
                    .iter()
                    .map(|(href, label)| view! { <li><a href=*href>{*label}</a></li> })
                    .collect::<Vec<_>>()}
            </ul>
            <div class="navbar__actions">
                <button class="btn btn--ghost btn--icon" title="Toggle dark mode" on:click=move |_| toggle_theme(session, toasts)>
                    {move || if dark() { "☀" } else { "☾" }}
                </button>
                <Show
                    when=logged_in
                    fallback=|| view! {
                        <a href="/login" class="btn btn--outline btn--sm">"Login"</a>
                        <a href="/register" class="btn btn--primary btn--sm">"Register"</a>
                    }
                >
                    <a href="/dashboard/" class="btn btn--outline btn--sm">"Dashboard"</a>
                    <a href="/login" class="btn btn--destructive btn--sm" on:click=on_logout.clone()>"Logout"</a>
                </Show>
            </div>
        </nav>
    }
}
