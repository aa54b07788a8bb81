use super::*;
use chrono::TimeZone;

use crate::net::types::User;

fn user() -> User {
    User {
        id: "u1".to_owned(),
        email: "a@b.com".to_owned(),
        username: None,
        full_name: None,
        avatar_url: None,
        created_at: chrono::Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap(),
    }
}

// =============================================================
// guard_state
// =============================================================

#[test]
fn fresh_state_is_uninitialized() {
    assert_eq!(guard_state(&AuthState::default()), GuardState::Uninitialized);
}

#[test]
fn in_flight_discovery_is_initializing() {
    let mut state = AuthState::default();
    state.begin(false);
    assert_eq!(guard_state(&state), GuardState::Initializing);
}

#[test]
fn settled_with_user_is_authenticated() {
    let mut state = AuthState::default();
    let token = state.begin(false);
    state.settle_initialize(token, Ok(Some(user())));
    assert_eq!(guard_state(&state), GuardState::Authenticated);
}

#[test]
fn settled_without_user_is_unauthenticated() {
    let mut state = AuthState::default();
    let token = state.begin(false);
    state.settle_initialize(token, Ok(None));
    assert_eq!(guard_state(&state), GuardState::Unauthenticated);
}

#[test]
fn failed_discovery_is_unauthenticated() {
    let mut state = AuthState::default();
    let token = state.begin(false);
    state.settle_initialize(token, Err("backend offline".to_owned()));
    assert_eq!(guard_state(&state), GuardState::Unauthenticated);
}

#[test]
fn logout_while_viewing_protected_content_flips_to_unauthenticated() {
    let mut state = AuthState::default();
    let token = state.begin(false);
    state.settle_initialize(token, Ok(Some(user())));
    assert_eq!(guard_state(&state), GuardState::Authenticated);

    let token = state.begin(true);
    // Still authenticated while the logout is in flight.
    assert_eq!(guard_state(&state), GuardState::Authenticated);
    state.settle_logout(token, Ok(()));
    assert_eq!(guard_state(&state), GuardState::Unauthenticated);
}

#[test]
fn post_init_operation_without_user_defers_decision() {
    let mut state = AuthState::default();
    let token = state.begin(false);
    state.settle_initialize(token, Ok(None));

    // A login attempt is running; don't bounce mid-flight.
    state.begin(true);
    assert_eq!(guard_state(&state), GuardState::Initializing);
}

// =============================================================
// login_redirect_target
// =============================================================

#[test]
fn redirect_target_carries_requested_path() {
    assert_eq!(login_redirect_target("/dashboard"), "/login?from=/dashboard");
    assert_eq!(
        login_redirect_target("/wishlists/42"),
        "/login?from=/wishlists/42"
    );
}

#[test]
fn redirect_target_without_path_is_plain_login() {
    assert_eq!(login_redirect_target(""), "/login");
}
