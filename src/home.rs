//! Dashboard resolution: where a user belongs after sign-in.
//!
//! Both the post-login redirect and the anonymous-only route bounce call
//! [`home_path`], so the two can never drift apart.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use crate::routes::{ADMIN_HOME, LANDING, PENDING_APPROVAL, STAFF_HOME, STUDENT_HOME, VISITOR_HOME};
use crate::session::{AccountStatus, Role, User};

/// Canonical landing path for the given user.
///
/// Anonymous sessions land on the public landing page, pending accounts
/// on the approval-wait page, and active accounts on their role's
/// dashboard. An unrecognized role degrades to the landing page instead
/// of failing.
#[must_use]
pub fn home_path(user: Option<&User>) -> &'static str {
    let Some(user) = user else {
        return LANDING;
    };
    if user.status == AccountStatus::Pending {
        return PENDING_APPROVAL;
    }
    match user.role {
        Role::Admin => ADMIN_HOME,
        Role::Staff => STAFF_HOME,
        Role::Student => STUDENT_HOME,
        Role::Visitor => VISITOR_HOME,
        Role::Unknown => LANDING,
    }
}
