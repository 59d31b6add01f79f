use super::*;

fn pages(resolved: &ResolvedRoute) -> Vec<Page> {
    resolved.chain.iter().map(|d| d.page).collect()
}

// =============================================================
// Public routes
// =============================================================

#[test]
fn root_resolves_to_home() {
    let resolved = resolve(ROUTES, "/").unwrap();
    assert_eq!(resolved.leaf(), Page::Home);
    assert!(!resolved.is_protected());
}

#[test]
fn trailing_slash_and_query_are_ignored() {
    assert_eq!(resolve(ROUTES, "/login/").unwrap().leaf(), Page::Login);
    assert_eq!(resolve(ROUTES, "/login?next=/dashboard").unwrap().leaf(), Page::Login);
    assert_eq!(resolve(ROUTES, "/contact#faq").unwrap().leaf(), Page::Contact);
}

#[test]
fn coming_soon_resolves_under_both_spellings() {
    let resolved = resolve(ROUTES, "/commingsoon").unwrap();
    assert_eq!(resolved.leaf(), Page::ComingSoon);
    assert!(!resolved.is_protected());
    assert_eq!(resolve(ROUTES, "/comingsoon").unwrap().leaf(), Page::ComingSoon);
}

#[test]
fn unknown_path_falls_through_to_not_found() {
    let resolved = resolve(ROUTES, "/no/such/page").unwrap();
    assert_eq!(resolved.leaf(), Page::NotFound);
    assert!(!resolved.is_protected());
}

// =============================================================
// Parameters
// =============================================================

#[test]
fn reset_captures_token() {
    let resolved = resolve(ROUTES, "/reset/abc123").unwrap();
    assert_eq!(resolved.leaf(), Page::Reset);
    assert_eq!(resolved.param("token"), Some("abc123"));
}

#[test]
fn activate_captures_token() {
    let resolved = resolve(ROUTES, "/activate/xyz").unwrap();
    assert_eq!(resolved.leaf(), Page::Activate);
    assert_eq!(resolved.param("token"), Some("xyz"));
    assert_eq!(resolved.param("otp"), None);
}

#[test]
fn reset_without_token_is_not_found() {
    assert_eq!(resolve(ROUTES, "/reset").unwrap().leaf(), Page::NotFound);
}

// =============================================================
// Protected routes
// =============================================================

#[test]
fn profile_allows_pending_accounts() {
    let resolved = resolve(ROUTES, "/profile").unwrap();
    let reqs: Vec<_> = resolved.requirements().collect();
    assert_eq!(reqs.len(), 1);
    assert!(reqs[0].allow_pending_access);
    assert!(reqs[0].allowed_roles.is_empty());
    assert!(!resolved.in_dashboard());
}

#[test]
fn dashboard_root_resolves_to_home_child() {
    let resolved = resolve(ROUTES, "/dashboard/").unwrap();
    assert_eq!(pages(&resolved), vec![Page::DashboardLayout, Page::DashboardHome]);
    assert!(resolved.in_dashboard());
}

#[test]
fn dashboard_children_resolve() {
    assert_eq!(resolve(ROUTES, "/dashboard/products").unwrap().leaf(), Page::Products);
    assert_eq!(resolve(ROUTES, "/dashboard/profile").unwrap().leaf(), Page::Profile);
}

#[test]
fn dashboard_levels_are_all_gated() {
    let resolved = resolve(ROUTES, "/dashboard/products").unwrap();
    let reqs: Vec<_> = resolved.requirements().collect();
    assert_eq!(reqs.len(), 2);
    for req in reqs {
        assert_eq!(req.allowed_roles, STAFF_ROLES);
        assert!(!req.allow_pending_access);
    }
}

#[test]
fn unknown_dashboard_child_is_not_found_inside_layout() {
    let resolved = resolve(ROUTES, "/dashboard/reports/2024").unwrap();
    assert_eq!(pages(&resolved), vec![Page::DashboardLayout, Page::NotFound]);
    assert!(resolved.is_protected());
}

// =============================================================
// Custom tables
// =============================================================

static NO_FALLBACK: &[RouteDescriptor] = &[RouteDescriptor::public("only", Page::Home)];

#[test]
fn unmatched_path_without_wildcard_is_none() {
    assert!(resolve(NO_FALLBACK, "/other").is_none());
    assert!(resolve(NO_FALLBACK, "/only").is_some());
}
