use super::*;

fn user(role: Role, status: AccountStatus) -> User {
    User {
        id: "9f5c3a1e-0000-4000-8000-c0ffee000002".to_owned(),
        name: "Robin".to_owned(),
        last_name: Some("Okafor".to_owned()),
        role,
        status,
    }
}

#[test]
fn anonymous_lands_on_landing_page() {
    assert_eq!(home_path(None), "/");
}

#[test]
fn pending_account_lands_on_approval_wait() {
    // Status outranks role: even a pending admin waits.
    let pending = user(Role::Admin, AccountStatus::Pending);
    assert_eq!(home_path(Some(&pending)), "/pending-approval");
}

#[test]
fn each_active_role_lands_on_its_dashboard() {
    let cases = [
        (Role::Admin, "/admin"),
        (Role::Staff, "/staff"),
        (Role::Student, "/student"),
        (Role::Visitor, "/visitor"),
    ];
    for (role, expected) in cases {
        let active = user(role, AccountStatus::Active);
        assert_eq!(home_path(Some(&active)), expected, "role {role:?}");
    }
}

#[test]
fn settled_status_dispatches_on_role() {
    let rejected = user(Role::Staff, AccountStatus::Rejected);
    assert_eq!(home_path(Some(&rejected)), "/staff");
}

#[test]
fn unknown_role_degrades_to_landing_page() {
    let odd = user(Role::Unknown, AccountStatus::Active);
    assert_eq!(home_path(Some(&odd)), "/");
}

#[test]
fn resolution_is_repeatable() {
    let active = user(Role::Student, AccountStatus::Active);
    assert_eq!(home_path(Some(&active)), home_path(Some(&active)));
}
