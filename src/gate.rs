//! Route gating decisions.
//!
//! DESIGN
//! ======
//! One pure function maps a session snapshot plus a route requirement to
//! exactly one outcome. Rule order is part of the contract: the loading
//! check runs before the user is inspected at all, and status checks run
//! before role checks so a pending admin lands on the pending page, never
//! on a wrong-role bounce.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use crate::home::home_path;
use crate::routes::{LANDING, LOGIN, PENDING_APPROVAL};
use crate::session::{AccountStatus, Role, Session};

/// Who may enter a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteRequirement {
    /// Anonymous-only screens (landing, login, register); a signed-in
    /// user is bounced to their dashboard instead.
    PublicOnly,
    /// Requires an active user whose role is in the given set.
    Authenticated(&'static [Role]),
    /// Requires a user whose status is exactly pending.
    PendingOnly,
    /// No session requirement; reachable by anyone in any state.
    Any,
}

/// Outcome of gating one navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateResult {
    /// Render the requested route.
    Render,
    /// Replace-style redirect to the given path; the blocked location
    /// must not remain in history.
    Redirect(&'static str),
    /// Session still loading; show the loading placeholder.
    Loading,
}

impl GateResult {
    /// True when the requested route should render.
    #[must_use]
    pub fn is_render(self) -> bool {
        self == Self::Render
    }

    /// Redirect target, if this outcome is a redirect.
    #[must_use]
    pub fn redirect_target(self) -> Option<&'static str> {
        match self {
            Self::Redirect(target) => Some(target),
            Self::Render | Self::Loading => None,
        }
    }
}

/// Decide what one navigation does, given the current session snapshot.
///
/// Total over its inputs: every session/requirement combination yields
/// exactly one outcome and nothing panics. While the session is loading
/// the user value is ignored entirely, so a stale or half-updated user
/// can only delay a render, never produce a wrong one.
#[must_use]
pub fn decide(session: &Session, requirement: RouteRequirement) -> GateResult {
    if session.loading {
        return GateResult::Loading;
    }

    match requirement {
        RouteRequirement::Any => GateResult::Render,
        RouteRequirement::PublicOnly => match session.user.as_ref() {
            None => GateResult::Render,
            Some(user) => GateResult::Redirect(home_path(Some(user))),
        },
        RouteRequirement::PendingOnly => match session.user.as_ref() {
            Some(user) if user.status == AccountStatus::Pending => GateResult::Render,
            _ => GateResult::Redirect(LANDING),
        },
        RouteRequirement::Authenticated(roles) => match session.user.as_ref() {
            None => GateResult::Redirect(LOGIN),
            Some(user) => match user.status {
                AccountStatus::Pending => GateResult::Redirect(PENDING_APPROVAL),
                AccountStatus::Active if roles.contains(&user.role) => GateResult::Render,
                AccountStatus::Active => GateResult::Redirect(LANDING),
                // Rejected is indistinguishable from signed-out at this
                // layer; unrecognized statuses fail closed the same way.
                AccountStatus::Rejected | AccountStatus::Unknown => GateResult::Redirect(LOGIN),
            },
        },
    }
}
