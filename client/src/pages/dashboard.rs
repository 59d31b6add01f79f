//! Dashboard shell and its child pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every dashboard route is gated for staff roles by the outlet before any of
//! this renders, so these views may assume a signed-in user but still render
//! sensibly if the session clears underneath them.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::dash_nav::DashNav;
use crate::net::types::User;
use crate::state::session::SessionStore;

/// Headline for the overview page.
pub(crate) fn greeting(user: Option<&User>) -> String {
    match user {
        Some(u) if !u.name.trim().is_empty() => format!("Welcome back, {}", u.name.trim()),
        Some(u) if !u.email.is_empty() => format!("Welcome back, {}", u.email),
        _ => "Welcome back".to_owned(),
    }
}

/// Sidebar plus content area for every `/dashboard/*` page.
#[component]
pub fn DashboardLayout(children: Children) -> impl IntoView {
    view! {
        <div class="dash-layout">
            <DashNav/>
            <main class="dash-layout__content">{children()}</main>
        </div>
    }
}

#[component]
pub fn DashboardHomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let headline = move || session.with(|s| greeting(s.user()));

    view! {
        <section class="dash-page">
            <h1>{headline}</h1>
            <div class="stat-grid">
                <article class="stat-card">
                    <h3>"Open tenders"</h3>
                    <p class="stat-card__value">"-"</p>
                </article>
                <article class="stat-card">
                    <h3>"Saved bids"</h3>
                    <p class="stat-card__value">"-"</p>
                </article>
                <article class="stat-card">
                    <h3>"Closing this week"</h3>
                    <p class="stat-card__value">"-"</p>
                </article>
            </div>
            <p>
                "Manage your catalogue under " <a href="/dashboard/products">"Products"</a>
                " or update your details under " <a href="/dashboard/profile">"Profile"</a> "."
            </p>
        </section>
    }
}

#[component]
pub fn ProductsPage() -> impl IntoView {
    view! {
        <section class="dash-page">
            <h1>"Products"</h1>
            <p>"List the goods and services you supply so tenderers can find you."</p>
            <a href="/commingsoon" class="btn btn--primary">"Add Product"</a>
        </section>
    }
}
