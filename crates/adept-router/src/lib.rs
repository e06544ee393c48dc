//! Adept Router
//!
//! Static route table for the web client and the guard decision applied
//! before every client-side navigation. Pure and synchronous: the caller
//! supplies whether a session token exists.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Path of the home route (organization list)
pub const HOME_PATH: &str = "/";
/// Path of the login route
pub const LOGIN_PATH: &str = "/login";

/// Named routes of the web client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteName {
    Organizations,
    OrganizationProjects,
    Tasks,
    OrganizationMembers,
    Login,
    Register,
}

impl RouteName {
    pub fn as_str(&self) -> &'static str {
        match self {
            RouteName::Organizations => "organizations",
            RouteName::OrganizationProjects => "organization-projects",
            RouteName::Tasks => "tasks",
            RouteName::OrganizationMembers => "organization-members",
            RouteName::Login => "login",
            RouteName::Register => "register",
        }
    }

    /// Login and register pages are skipped once a session exists
    pub fn is_auth_page(&self) -> bool {
        matches!(self, RouteName::Login | RouteName::Register)
    }
}

/// A route entry: name, path pattern (`:param` segments) and metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteDef {
    pub name: RouteName,
    pub pattern: &'static str,
    /// Route metadata: navigation requires a session token
    pub requires_auth: bool,
}

/// The route table, in match order
pub static ROUTES: [RouteDef; 6] = [
    RouteDef {
        name: RouteName::Organizations,
        pattern: "/",
        requires_auth: true,
    },
    RouteDef {
        name: RouteName::OrganizationProjects,
        pattern: "/organizations/:orgId/projects",
        requires_auth: true,
    },
    RouteDef {
        name: RouteName::Tasks,
        pattern: "/organizations/:orgId/projects/:projectId",
        requires_auth: true,
    },
    RouteDef {
        name: RouteName::OrganizationMembers,
        pattern: "/organizations/:orgId/members",
        requires_auth: true,
    },
    RouteDef {
        name: RouteName::Login,
        pattern: "/login",
        requires_auth: false,
    },
    RouteDef {
        name: RouteName::Register,
        pattern: "/register",
        requires_auth: false,
    },
];

/// Characters left alone by JavaScript's `encodeURIComponent`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a path segment or query value
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

impl RouteDef {
    /// Look up a route by name
    pub fn find(name: RouteName) -> &'static RouteDef {
        ROUTES.iter().find(|r| r.name == name).unwrap_or(&ROUTES[0])
    }

    /// Build a concrete path, filling `:param` segments in order.
    /// Params are percent-encoded; missing ones leave the placeholder in place.
    pub fn href(&self, params: &[&str]) -> String {
        let mut params = params.iter();
        let parts: Vec<String> = segments(self.pattern)
            .map(|seg| {
                if seg.starts_with(':') {
                    params
                        .next()
                        .map_or_else(|| seg.to_string(), |value| encode_component(value))
                } else {
                    seg.to_string()
                }
            })
            .collect();
        format!("/{}", parts.join("/"))
    }

    /// Literal segments match ignoring ASCII case; params are captured decoded
    fn match_path(&'static self, path: &str) -> Option<RouteMatch> {
        let pattern: Vec<&str> = segments(self.pattern).collect();
        let actual: Vec<&str> = segments(path).collect();
        if pattern.len() != actual.len() {
            return None;
        }

        let mut params = Vec::new();
        for (expected, got) in pattern.iter().copied().zip(actual.iter().copied()) {
            if let Some(name) = expected.strip_prefix(':') {
                let value = percent_decode_str(got).decode_utf8_lossy();
                params.push((name, value.into_owned()));
            } else if !expected.eq_ignore_ascii_case(got) {
                return None;
            }
        }
        Some(RouteMatch {
            route: self,
            params,
        })
    }
}

/// A resolved route with its captured params
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub route: &'static RouteDef,
    pub params: Vec<(&'static str, String)>,
}

impl RouteMatch {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Resolve a location (query and fragment ignored) against the route table
pub fn resolve(path: &str) -> Option<RouteMatch> {
    let path = path.find(['?', '#']).map_or(path, |idx| &path[..idx]);
    ROUTES.iter().find_map(|route| route.match_path(path))
}

// ========================
// Guard
// ========================

/// Outcome of a guarded navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// Render the requested target
    Allow,
    /// Target needs a session and there is none
    RedirectToLogin,
    /// Login/register requested while already signed in
    RedirectToHome,
}

impl Navigation {
    pub fn redirect_path(&self) -> Option<&'static str> {
        match self {
            Navigation::Allow => None,
            Navigation::RedirectToLogin => Some(LOGIN_PATH),
            Navigation::RedirectToHome => Some(HOME_PATH),
        }
    }

    pub fn is_allowed(&self) -> bool {
        *self == Navigation::Allow
    }
}

/// Decide a transition. Precedence: auth requirement, then auth pages, then allow.
/// An unmatched target (`None`) has no metadata and is allowed.
pub fn decide(target: Option<&RouteDef>, logged_in: bool) -> Navigation {
    match target {
        Some(route) if route.requires_auth && !logged_in => Navigation::RedirectToLogin,
        Some(route) if route.name.is_auth_page() && logged_in => Navigation::RedirectToHome,
        _ => Navigation::Allow,
    }
}

/// Resolve `path` and decide in one step
pub fn evaluate(path: &str, logged_in: bool) -> Navigation {
    let matched = resolve(path);
    let navigation = decide(matched.as_ref().map(|m| m.route), logged_in);
    if !navigation.is_allowed() {
        log::debug!("[ROUTER] {} -> {:?}", path, navigation);
    }
    navigation
}
