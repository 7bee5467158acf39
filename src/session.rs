//! Session snapshot and user types for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route gating and user-aware components coordinate on one session value:
//! a loading flag plus the authenticated user, if any. The session source
//! (HTTP client, test double, whatever the shell wires in) produces these
//! snapshots; this crate only reads them.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

/// Account role controlling which dashboard section a user may enter.
///
/// `Unknown` absorbs any wire value outside the closed set so a stale or
/// misbehaving backend cannot make gating fail; an unknown role resolves
/// to the landing page and passes no role check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full administrative access.
    Admin,
    /// Staff member access.
    Staff,
    /// Student access.
    Student,
    /// External visitor access.
    Visitor,
    /// Any wire value outside the closed set.
    #[serde(other)]
    Unknown,
}

/// Account lifecycle status.
///
/// Only `Active` accounts reach role-gated sections. `Unknown` absorbs
/// out-of-enum wire values and is denied wherever status is checked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    /// Created but not yet approved by an administrator.
    Pending,
    /// Approved and in good standing.
    Active,
    /// Explicitly denied approval.
    Rejected,
    /// Any wire value outside the closed set.
    #[serde(other)]
    Unknown,
}

/// An authenticated user as returned by the auth endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Family name, if the account carries one.
    #[serde(default)]
    pub last_name: Option<String>,
    /// Account role; decides the home dashboard and section access.
    pub role: Role,
    /// Account lifecycle status; checked before any role check.
    pub status: AccountStatus,
}

/// Snapshot of the authentication state at one navigation instant.
///
/// While `loading` is true the `user` field carries no meaning and must
/// not be observed; the gate short-circuits to its loading result first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    /// True while the session source is still establishing the session.
    pub loading: bool,
    /// The authenticated user, or `None` for an anonymous session.
    pub user: Option<User>,
}

/// Error decoding an auth-endpoint payload.
#[derive(Debug, thiserror::Error)]
pub enum SessionParseError {
    /// The payload is not structurally valid user JSON.
    #[error("malformed user payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl Session {
    /// Session still being established; gates everything to the loading view.
    #[must_use]
    pub fn loading() -> Self {
        Self { loading: true, user: None }
    }

    /// Ready session with no authenticated user.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Ready session for the given user.
    #[must_use]
    pub fn authenticated(user: User) -> Self {
        Self { loading: false, user: Some(user) }
    }

    /// Decode a ready session from the auth endpoint's user payload.
    ///
    /// Out-of-enum `role`/`status` strings decode to the `Unknown`
    /// variants rather than failing; gating then degrades them to safe
    /// defaults. Only structurally malformed JSON is an error.
    ///
    /// # Errors
    ///
    /// Returns [`SessionParseError::Malformed`] if the payload cannot be
    /// decoded as a user object.
    pub fn from_user_json(payload: &str) -> Result<Self, SessionParseError> {
        let user: User = serde_json::from_str(payload)?;
        Ok(Self::authenticated(user))
    }
}

/// Seam to whatever owns session fetching and logout.
///
/// Implementations own all asynchrony: refreshing, retrying, and the
/// logout side effect happen behind this trait, and each call to
/// [`SessionSource::session`] returns the then-current snapshot.
pub trait SessionSource {
    /// Current session snapshot.
    fn session(&self) -> Session;

    /// End the current session. Afterwards [`SessionSource::session`]
    /// must report no user.
    fn logout(&mut self);
}
