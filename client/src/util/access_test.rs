use super::*;
use crate::net::types::User;
use crate::state::session::SessionStore;

const STAFF: &[Role] = &[Role::Admin, Role::User];
const ADMIN_ONLY: &[Role] = &[Role::Admin];
const ANY_ROLE: &[Role] = &[];

// =============================================================
// Helpers
// =============================================================

fn session_for(role: Role, status: AccountStatus) -> Session {
    let mut store = SessionStore::in_memory();
    store.set_user(
        User {
            id: "7".to_owned(),
            name: "Jane".to_owned(),
            email: "jane@example.com".to_owned(),
            role,
            status,
        },
        "tok".to_owned(),
    );
    store.session().clone()
}

fn anonymous() -> Session {
    SessionStore::in_memory().session().clone()
}

fn all_requirements() -> Vec<RouteRequirement> {
    let mut reqs = Vec::new();
    for roles in [ANY_ROLE, STAFF, ADMIN_ONLY] {
        for pending in [false, true] {
            reqs.push(RouteRequirement { allowed_roles: roles, allow_pending_access: pending });
        }
    }
    reqs
}

fn all_roles() -> Vec<Role> {
    vec![Role::Admin, Role::User, Role::Other("guest".to_owned())]
}

const ALL_STATUSES: [AccountStatus; 4] =
    [AccountStatus::Active, AccountStatus::Pending, AccountStatus::Suspended, AccountStatus::Unknown];

// =============================================================
// Scenarios
// =============================================================

#[test]
fn active_user_with_allowed_role_is_allowed() {
    let session = session_for(Role::User, AccountStatus::Active);
    assert_eq!(evaluate(&session, &RouteRequirement::roles(STAFF)), AccessDecision::Allow);
}

#[test]
fn pending_user_allowed_when_route_opts_in() {
    let session = session_for(Role::User, AccountStatus::Pending);
    let req = RouteRequirement::roles(STAFF).allow_pending();
    assert_eq!(evaluate(&session, &req), AccessDecision::Allow);
}

#[test]
fn guest_role_is_unauthorized_on_staff_route() {
    let session = session_for(Role::Other("guest".to_owned()), AccountStatus::Active);
    assert_eq!(evaluate(&session, &RouteRequirement::roles(STAFF)), AccessDecision::Unauthorized);
}

#[test]
fn anonymous_on_open_route_is_not_logged_in() {
    assert_eq!(evaluate(&anonymous(), &RouteRequirement::AUTHENTICATED), AccessDecision::NotLoggedIn);
}

#[test]
fn pending_user_without_opt_in_is_not_activated() {
    let session = session_for(Role::Admin, AccountStatus::Pending);
    assert_eq!(evaluate(&session, &RouteRequirement::roles(STAFF)), AccessDecision::NotActivated);
}

#[test]
fn unknown_status_is_treated_as_inactive() {
    let session = session_for(Role::Admin, AccountStatus::Unknown);
    assert_eq!(evaluate(&session, &RouteRequirement::AUTHENTICATED), AccessDecision::NotActivated);
    assert_eq!(evaluate(&session, &RouteRequirement::AUTHENTICATED.allow_pending()), AccessDecision::Allow);
}

#[test]
fn role_check_precedes_activation_check() {
    let session = session_for(Role::User, AccountStatus::Pending);
    assert_eq!(evaluate(&session, &RouteRequirement::roles(ADMIN_ONLY)), AccessDecision::Unauthorized);
}

// =============================================================
// Properties over every combination
// =============================================================

#[test]
fn anonymous_is_always_not_logged_in() {
    let session = anonymous();
    for req in all_requirements() {
        assert_eq!(evaluate(&session, &req), AccessDecision::NotLoggedIn);
    }
}

#[test]
fn suspended_is_always_suspended() {
    for role in all_roles() {
        let session = session_for(role, AccountStatus::Suspended);
        for req in all_requirements() {
            assert_eq!(evaluate(&session, &req), AccessDecision::Suspended);
        }
    }
}

#[test]
fn decision_matches_priority_table_for_all_inputs() {
    for role in all_roles() {
        for status in ALL_STATUSES {
            let session = session_for(role.clone(), status);
            for req in all_requirements() {
                let role_ok = req.allowed_roles.is_empty() || req.allowed_roles.contains(&role);
                let expected = if status == AccountStatus::Suspended {
                    AccessDecision::Suspended
                } else if !role_ok {
                    AccessDecision::Unauthorized
                } else if status != AccountStatus::Active && !req.allow_pending_access {
                    AccessDecision::NotActivated
                } else {
                    AccessDecision::Allow
                };
                assert_eq!(evaluate(&session, &req), expected, "role={role} status={status:?} req={req:?}");
            }
        }
    }
}

#[test]
fn evaluate_does_not_touch_session() {
    let session = session_for(Role::User, AccountStatus::Active);
    let before = session.clone();
    let _ = evaluate(&session, &RouteRequirement::roles(ADMIN_ONLY));
    assert_eq!(session, before);
}

// =============================================================
// evaluate_chain
// =============================================================

#[test]
fn empty_chain_allows() {
    assert_eq!(evaluate_chain(&anonymous(), std::iter::empty::<&RouteRequirement>()), AccessDecision::Allow);
}

#[test]
fn chain_reports_outermost_refusal() {
    let session = session_for(Role::User, AccountStatus::Pending);
    let outer = RouteRequirement::roles(ADMIN_ONLY);
    let inner = RouteRequirement::roles(STAFF);
    assert_eq!(evaluate_chain(&session, [&outer, &inner]), AccessDecision::Unauthorized);
}

#[test]
fn chain_requires_every_level() {
    let session = session_for(Role::User, AccountStatus::Pending);
    let outer = RouteRequirement::roles(STAFF).allow_pending();
    let inner = RouteRequirement::roles(STAFF);
    assert_eq!(evaluate_chain(&session, [&outer, &inner]), AccessDecision::NotActivated);
    assert_eq!(evaluate_chain(&session, [&outer]), AccessDecision::Allow);
}
