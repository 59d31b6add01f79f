//! Account profile. Reachable by pending accounts so they can see why
//! the rest of the dashboard is closed to them.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;

use crate::components::ui::{Alert, AlertVariant};
use crate::net::types::AccountStatus;
use crate::state::session::SessionStore;

pub(crate) fn status_label(status: AccountStatus) -> &'static str {
    match status {
        AccountStatus::Active => "Active",
        AccountStatus::Pending => "Pending activation",
        AccountStatus::Suspended => "Suspended",
        AccountStatus::Unknown => "Unknown",
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let user = move || session.with(|s| s.user().cloned());

    view! {
        <section class="dash-page profile">
            <h1>"Your Profile"</h1>
            {move || {
                user()
                    .map(|u| {
                        let pending = u.status != AccountStatus::Active;
                        view! {
                            {pending.then(|| view! {
                                <Alert variant=AlertVariant::Warning title="Activation pending">
                                    "Some features stay locked until your account is activated."
                                </Alert>
                            })}
                            <dl class="profile__details">
                                <dt>"Name"</dt>
                                <dd>{u.name.clone()}</dd>
                                <dt>"Email"</dt>
                                <dd>{u.email.clone()}</dd>
                                <dt>"Role"</dt>
                                <dd>{u.role.to_string()}</dd>
                                <dt>"Status"</dt>
                                <dd>{status_label(u.status)}</dd>
                            </dl>
                        }
                    })
            }}
        </section>
    }
}
