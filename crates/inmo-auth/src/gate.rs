//! Access gate: the allow/redirect decision guarding admin paths.
//!
//! Pure and stateless — same (path, authenticated) input, same
//! decision. Session storage belongs to the session provider; this
//! module only consumes the authenticated flag.

pub const LOGIN_PATH: &str = "/admin/login";
pub const DASHBOARD_PATH: &str = "/admin/dashboard";

/// Classification of a requested path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteClass {
    /// Session-provider endpoints, always passed through untouched.
    ApiAuth,
    /// The login page itself.
    Login,
    /// Any other administrative path.
    Admin,
    /// Everything else.
    Public,
}

/// Gate outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Allow,
    Redirect(&'static str),
}

pub fn classify(path: &str) -> RouteClass {
    if path.starts_with("/api/auth") {
        RouteClass::ApiAuth
    } else if path.starts_with(LOGIN_PATH) {
        RouteClass::Login
    } else if path.starts_with("/admin") {
        RouteClass::Admin
    } else {
        RouteClass::Public
    }
}

/// Decide whether a request passes or gets redirected.
pub fn decide(path: &str, authenticated: bool) -> GateDecision {
    match classify(path) {
        RouteClass::ApiAuth => GateDecision::Allow,
        RouteClass::Login => {
            if authenticated {
                GateDecision::Redirect(DASHBOARD_PATH)
            } else {
                GateDecision::Allow
            }
        }
        RouteClass::Admin => {
            if authenticated {
                GateDecision::Allow
            } else {
                GateDecision::Redirect(LOGIN_PATH)
            }
        }
        RouteClass::Public => GateDecision::Allow,
    }
}
