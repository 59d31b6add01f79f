//! Route access decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ProtectedRoute` calls [`evaluate`] on every render of a protected route
//! and shows either the page or one of the fallback screens. The decision is
//! a pure function of the session and the route's requirement.
//!
//! ORDER
//! =====
//! Checks run top to bottom and the first match wins:
//! 1. no user                                  -> `NotLoggedIn`
//! 2. suspended account                        -> `Suspended`
//! 3. role outside a non-empty allow-list      -> `Unauthorized`
//! 4. not active and pending access not allowed -> `NotActivated`
//! 5. otherwise                                -> `Allow`

#[cfg(test)]
#[path = "access_test.rs"]
mod access_test;

use crate::net::types::{AccountStatus, Role};
use crate::state::session::Session;

/// Access requirement declared by a route.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RouteRequirement {
    /// Roles admitted. Empty admits any authenticated role.
    pub allowed_roles: &'static [Role],
    /// Let accounts that are not yet active through.
    pub allow_pending_access: bool,
}

impl RouteRequirement {
    /// Any signed-in, active account.
    pub const AUTHENTICATED: Self = Self { allowed_roles: &[], allow_pending_access: false };

    pub const fn roles(allowed_roles: &'static [Role]) -> Self {
        Self { allowed_roles, allow_pending_access: false }
    }

    #[must_use]
    pub const fn allow_pending(mut self) -> Self {
        self.allow_pending_access = true;
        self
    }

    fn admits(&self, role: &Role) -> bool {
        self.allowed_roles.is_empty() || self.allowed_roles.contains(role)
    }
}

/// What to render for a protected route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessDecision {
    Allow,
    NotLoggedIn,
    Suspended,
    Unauthorized,
    NotActivated,
}

impl AccessDecision {
    pub fn is_allowed(self) -> bool {
        self == Self::Allow
    }
}

/// Decide what `session` may see on a route declaring `requirement`.
pub fn evaluate(session: &Session, requirement: &RouteRequirement) -> AccessDecision {
    let Some(user) = session.user().filter(|u| !u.is_empty()) else {
        return AccessDecision::NotLoggedIn;
    };
    if user.status == AccountStatus::Suspended {
        return AccessDecision::Suspended;
    }
    if !requirement.admits(&user.role) {
        return AccessDecision::Unauthorized;
    }
    if user.status != AccountStatus::Active && !requirement.allow_pending_access {
        return AccessDecision::NotActivated;
    }
    AccessDecision::Allow
}

/// Gate a route nested under protected parents.
///
/// Each requirement is evaluated outermost first; the first refusal wins.
pub fn evaluate_chain<'a, I>(session: &Session, requirements: I) -> AccessDecision
where
    I: IntoIterator<Item = &'a RouteRequirement>,
{
    requirements
        .into_iter()
        .map(|req| evaluate(session, req))
        .find(|decision| !decision.is_allowed())
        .unwrap_or(AccessDecision::Allow)
}
