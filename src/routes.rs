//! Route table and the per-navigation gating entry point.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module is the one place that spells out paths: which screens are
//! anonymous-only, which dashboard section requires which role, and what
//! an unknown path does. The rendering shell calls [`gate_for_path`] on
//! every navigation and obeys the result exactly.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::gate::{GateResult, RouteRequirement, decide};
use crate::session::{Role, Session};

/// Public landing page.
pub const LANDING: &str = "/";
/// Sign-in screen.
pub const LOGIN: &str = "/login";
/// Account registration screen.
pub const REGISTER: &str = "/register";
/// Initial password setup screen.
pub const SETUP_PASSWORD: &str = "/setup-password";
/// Password recovery screen.
pub const FORGOT_PASSWORD: &str = "/forgot-password";
/// Approval-wait screen for pending accounts.
pub const PENDING_APPROVAL: &str = "/pending-approval";
/// Email confirmation landing, reachable with or without a session.
pub const EMAIL_CONFIRMED: &str = "/email-confirmed";
/// Admin dashboard section root.
pub const ADMIN_HOME: &str = "/admin";
/// Staff dashboard section root.
pub const STAFF_HOME: &str = "/staff";
/// Student dashboard section root.
pub const STUDENT_HOME: &str = "/student";
/// Visitor dashboard section root.
pub const VISITOR_HOME: &str = "/visitor";

/// Declared routes and who may enter them. Dashboard section roots also
/// cover every path nested beneath them.
pub const ROUTES: &[(&str, RouteRequirement)] = &[
    (LANDING, RouteRequirement::PublicOnly),
    (LOGIN, RouteRequirement::PublicOnly),
    (REGISTER, RouteRequirement::PublicOnly),
    (SETUP_PASSWORD, RouteRequirement::PublicOnly),
    (FORGOT_PASSWORD, RouteRequirement::PublicOnly),
    (PENDING_APPROVAL, RouteRequirement::PendingOnly),
    (EMAIL_CONFIRMED, RouteRequirement::Any),
    (ADMIN_HOME, RouteRequirement::Authenticated(&[Role::Admin])),
    (STAFF_HOME, RouteRequirement::Authenticated(&[Role::Staff])),
    (STUDENT_HOME, RouteRequirement::Authenticated(&[Role::Student])),
    (VISITOR_HOME, RouteRequirement::Authenticated(&[Role::Visitor])),
];

/// Look up the requirement declared for `path`.
///
/// Flat routes match exactly; dashboard section roots also match nested
/// paths (`/admin/users`). The nested match is guarded by the path
/// separator, so `/administrator` matches nothing. A trailing slash is
/// insignificant. Returns `None` for paths with no declared route.
#[must_use]
pub fn requirement_for(path: &str) -> Option<RouteRequirement> {
    let path = normalize(path);
    ROUTES
        .iter()
        .find(|(route, requirement)| route_matches(route, *requirement, path))
        .map(|(_, requirement)| *requirement)
}

/// Gate one navigation: look up the requirement for `path` and decide.
///
/// A path with no declared route gates as open; the shell renders its
/// not-found screen for it.
#[must_use]
pub fn gate_for_path(session: &Session, path: &str) -> GateResult {
    let requirement = requirement_for(path).unwrap_or(RouteRequirement::Any);
    let result = decide(session, requirement);
    if let GateResult::Redirect(target) = result {
        log::debug!("gated {path}: redirecting to {target}");
    }
    result
}

/// Strip an insignificant trailing slash, keeping the root path intact.
fn normalize(path: &str) -> &str {
    match path.strip_suffix('/') {
        Some(stripped) if !stripped.is_empty() => stripped,
        _ => path,
    }
}

fn route_matches(route: &str, requirement: RouteRequirement, path: &str) -> bool {
    if path == route {
        return true;
    }
    // Only dashboard sections have nested screens.
    matches!(requirement, RouteRequirement::Authenticated(_))
        && path
            .strip_prefix(route)
            .is_some_and(|rest| rest.starts_with('/'))
}
