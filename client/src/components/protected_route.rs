//! Route guard that swaps protected content for a fallback screen.
//!
//! SYSTEM CONTEXT
//! ==============
//! The outlet wraps every protected match in `ProtectedRoute`. The guard
//! re-evaluates whenever the session signal changes, so logging out or being
//! suspended mid-visit replaces the page immediately.

use leptos::prelude::*;

use crate::pages::fallbacks::{NotActivatedPage, NotLoggedInPage, SuspendedPage, UnauthorizedPage};
use crate::state::session::SessionStore;
use crate::util::access::{AccessDecision, RouteRequirement, evaluate_chain};

#[component]
pub fn ProtectedRoute(
    /// Requirements of every protected level of the match, outermost first.
    requirements: Vec<RouteRequirement>,
    children: ChildrenFn,
) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let decision = Memo::new(move |_| session.with(|s| evaluate_chain(s.session(), &requirements)));

    move || match decision.get() {
        AccessDecision::Allow => children().into_any(),
        AccessDecision::NotLoggedIn => view! { <NotLoggedInPage/> }.into_any(),
        AccessDecision::Suspended => view! { <SuspendedPage/> }.into_any(),
        AccessDecision::Unauthorized => view! { <UnauthorizedPage/> }.into_any(),
        AccessDecision::NotActivated => view! { <NotActivatedPage/> }.into_any(),
    }
}
