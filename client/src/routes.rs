//! Static route table and path resolver.
//!
//! DESIGN
//! ======
//! Routes form a tree of `RouteDescriptor`s. Resolution walks the tree
//! segment by segment; static segments match literally, `:name` segments
//! capture a parameter and `*` swallows the rest of the path. The result is
//! the chain of matched descriptors, root first, so the outlet can gate every
//! protected level and wrap children in their parent layouts.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::net::types::Role;
use crate::util::access::RouteRequirement;

/// Roles admitted to the dashboard.
pub const STAFF_ROLES: &[Role] = &[Role::Admin, Role::User];

/// Screen rendered for a matched route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    About,
    Contact,
    Training,
    KnowledgeHub,
    Subscribe,
    ComingSoon,
    Login,
    Register,
    Forgot,
    Activate,
    Reset,
    Profile,
    DashboardLayout,
    DashboardHome,
    Products,
    NotFound,
}

/// One node of the route tree.
#[derive(Debug, PartialEq, Eq)]
pub struct RouteDescriptor {
    /// Path pattern relative to the parent, without leading or trailing `/`.
    pub path: &'static str,
    pub page: Page,
    /// `Some` for protected routes.
    pub access: Option<RouteRequirement>,
    pub children: &'static [RouteDescriptor],
}

impl RouteDescriptor {
    const fn public(path: &'static str, page: Page) -> Self {
        Self { path, page, access: None, children: &[] }
    }

    const fn protected(path: &'static str, page: Page, access: RouteRequirement) -> Self {
        Self { path, page, access: Some(access), children: &[] }
    }
}

const STAFF_ONLY: RouteRequirement = RouteRequirement::roles(STAFF_ROLES);

static DASHBOARD_CHILDREN: &[RouteDescriptor] = &[
    RouteDescriptor::protected("", Page::DashboardHome, STAFF_ONLY),
    RouteDescriptor::protected("products", Page::Products, STAFF_ONLY),
    RouteDescriptor::protected("profile", Page::Profile, STAFF_ONLY),
    RouteDescriptor::public("*", Page::NotFound),
];

/// Application routes, matched in order.
pub static ROUTES: &[RouteDescriptor] = &[
    RouteDescriptor::public("", Page::Home),
    RouteDescriptor::public("about", Page::About),
    RouteDescriptor::public("contact", Page::Contact),
    RouteDescriptor::public("training", Page::Training),
    RouteDescriptor::public("knowledge-hub", Page::KnowledgeHub),
    RouteDescriptor::public("subscribe", Page::Subscribe),
    RouteDescriptor::public("commingsoon", Page::ComingSoon),
    // Correctly spelled alias of the path above.
    RouteDescriptor::public("comingsoon", Page::ComingSoon),
    RouteDescriptor::public("login", Page::Login),
    RouteDescriptor::public("register", Page::Register),
    RouteDescriptor::public("forgot", Page::Forgot),
    RouteDescriptor::public("activate/:token", Page::Activate),
    RouteDescriptor::public("reset/:token", Page::Reset),
    RouteDescriptor::protected("profile", Page::Profile, RouteRequirement::AUTHENTICATED.allow_pending()),
    RouteDescriptor {
        path: "dashboard",
        page: Page::DashboardLayout,
        access: Some(STAFF_ONLY),
        children: DASHBOARD_CHILDREN,
    },
    RouteDescriptor::public("*", Page::NotFound),
];

/// A successful match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedRoute {
    /// Matched descriptors from the root down to the leaf.
    pub chain: Vec<&'static RouteDescriptor>,
    /// Captured `:name` parameters in match order.
    pub params: Vec<(&'static str, String)>,
}

impl ResolvedRoute {
    pub fn leaf(&self) -> Page {
        self.chain.last().map_or(Page::NotFound, |d| d.page)
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.iter().find(|(k, _)| *k == name).map(|(_, v)| v.as_str())
    }

    /// Access requirements of every protected level, outermost first.
    pub fn requirements(&self) -> impl Iterator<Item = &RouteRequirement> {
        self.chain.iter().filter_map(|d| d.access.as_ref())
    }

    pub fn is_protected(&self) -> bool {
        self.requirements().next().is_some()
    }

    /// Whether the layout chrome for dashboard pages should be used.
    pub fn in_dashboard(&self) -> bool {
        self.chain.first().is_some_and(|d| d.page == Page::DashboardLayout)
    }
}

/// Resolve `path` against `routes`. Query strings and fragments are ignored.
pub fn resolve(routes: &'static [RouteDescriptor], path: &str) -> Option<ResolvedRoute> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    let mut resolved = ResolvedRoute { chain: Vec::new(), params: Vec::new() };
    match_level(routes, &segments, &mut resolved).then_some(resolved)
}

fn match_level(routes: &'static [RouteDescriptor], segments: &[&str], out: &mut ResolvedRoute) -> bool {
    for route in routes {
        let pattern: Vec<&str> = route.path.split('/').filter(|s| !s.is_empty()).collect();
        let Some((consumed, params)) = match_prefix(&pattern, segments) else {
            continue;
        };
        let rest = &segments[consumed..];

        if rest.is_empty() && route.children.is_empty() {
            out.chain.push(route);
            out.params.extend(params);
            return true;
        }

        if !route.children.is_empty() {
            let mut nested = ResolvedRoute { chain: vec![route], params };
            if match_level(route.children, rest, &mut nested) {
                out.chain.extend(nested.chain);
                out.params.extend(nested.params);
                return true;
            }
        }
    }
    false
}

/// Match `pattern` against the front of `segments`.
///
/// Returns how many segments were consumed plus captured parameters.
fn match_prefix(pattern: &[&'static str], segments: &[&str]) -> Option<(usize, Vec<(&'static str, String)>)> {
    let mut params = Vec::new();
    for (i, &part) in pattern.iter().enumerate() {
        if part == "*" {
            return Some((segments.len(), params));
        }
        let segment = segments.get(i)?;
        if let Some(name) = part.strip_prefix(':') {
            params.push((name, (*segment).to_owned()));
        } else if part != *segment {
            return None;
        }
    }
    Some((pattern.len(), params))
}
