use super::*;
use chrono::TimeZone;

fn user(email: &str) -> User {
    User {
        id: format!("id-{email}"),
        email: email.to_owned(),
        username: None,
        full_name: None,
        avatar_url: None,
        created_at: chrono::Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap(),
    }
}

// =============================================================
// Defaults and loading lifecycle
// =============================================================

#[test]
fn default_state_has_no_user_and_is_uninitialized() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.loading);
    assert!(state.error.is_none());
    assert!(!state.initialized);
}

#[test]
fn loading_is_true_only_between_begin_and_settle() {
    let mut state = AuthState::default();
    assert!(!state.loading);

    let token = state.begin(true);
    assert!(state.loading);

    state.settle_login(token, Ok(user("a@b.com")));
    assert!(!state.loading);
}

#[test]
fn failed_operations_also_clear_loading() {
    let mut state = AuthState::default();
    let token = state.begin(true);
    state.settle_login(token, Err("invalid credentials".to_owned()));
    assert!(!state.loading);

    let token = state.begin(false);
    state.settle_initialize(token, Err("network unreachable".to_owned()));
    assert!(!state.loading);
}

// =============================================================
// initialize
// =============================================================

#[test]
fn initialize_success_with_session_adopts_user() {
    let mut state = AuthState::default();
    let token = state.begin(false);
    state.settle_initialize(token, Ok(Some(user("a@b.com"))));
    assert_eq!(state.user.as_ref().map(|u| u.email.as_str()), Some("a@b.com"));
    assert!(state.error.is_none());
    assert!(state.initialized);
}

#[test]
fn initialize_success_without_session_leaves_user_absent() {
    let mut state = AuthState::default();
    let token = state.begin(false);
    state.settle_initialize(token, Ok(None));
    assert!(state.user.is_none());
    assert!(state.error.is_none());
    assert!(state.initialized);
}

#[test]
fn initialize_failure_sets_error_and_still_initializes() {
    let mut state = AuthState::default();
    let token = state.begin(false);
    state.settle_initialize(token, Err("backend offline".to_owned()));
    assert!(state.user.is_none());
    assert_eq!(state.error.as_deref(), Some("backend offline"));
    assert!(state.initialized);
}

#[test]
fn initialized_never_reverts_across_later_operations() {
    let mut state = AuthState::default();
    let token = state.begin(false);
    state.settle_initialize(token, Ok(None));
    assert!(state.initialized);

    let token = state.begin(true);
    state.settle_login(token, Err("invalid credentials".to_owned()));
    assert!(state.initialized);

    let token = state.begin(true);
    state.settle_logout(token, Ok(()));
    assert!(state.initialized);
}

#[test]
fn repeat_initialize_does_not_corrupt_state() {
    let mut state = AuthState::default();
    let token = state.begin(false);
    state.settle_initialize(token, Ok(Some(user("a@b.com"))));

    let token = state.begin(false);
    state.settle_initialize(token, Ok(Some(user("a@b.com"))));
    assert!(state.initialized);
    assert!(!state.loading);
    assert_eq!(state.user.as_ref().map(|u| u.email.as_str()), Some("a@b.com"));
}

// =============================================================
// sign_up
// =============================================================

#[test]
fn sign_up_success_clears_error_but_sets_no_user() {
    let mut state = AuthState::default();
    state.error = Some("stale".to_owned());

    let token = state.begin(true);
    assert!(state.error.is_none());
    state.settle_sign_up(token, Ok(()));
    assert!(state.user.is_none());
    assert!(state.error.is_none());
}

#[test]
fn sign_up_failure_surfaces_backend_message() {
    let mut state = AuthState::default();
    let token = state.begin(true);
    state.settle_sign_up(token, Err("email already registered".to_owned()));
    assert_eq!(state.error.as_deref(), Some("email already registered"));
}

// =============================================================
// login
// =============================================================

#[test]
fn login_success_adopts_user_and_clears_error() {
    let mut state = AuthState::default();
    let token = state.begin(true);
    state.settle_login(token, Ok(user("a@b.com")));
    assert_eq!(state.user.as_ref().map(|u| u.email.as_str()), Some("a@b.com"));
    assert!(state.error.is_none());
}

#[test]
fn login_failure_keeps_prior_user() {
    let mut state = AuthState::default();
    state.user = Some(user("a@b.com"));

    let token = state.begin(true);
    state.settle_login(token, Err("invalid credentials".to_owned()));
    assert_eq!(state.user.as_ref().map(|u| u.email.as_str()), Some("a@b.com"));
    assert_eq!(state.error.as_deref(), Some("invalid credentials"));
}

#[test]
fn new_operation_clears_previous_error_on_begin() {
    let mut state = AuthState::default();
    let token = state.begin(true);
    state.settle_login(token, Err("invalid credentials".to_owned()));
    assert!(state.error.is_some());

    state.begin(true);
    assert!(state.error.is_none());
}

// =============================================================
// logout
// =============================================================

#[test]
fn logout_success_clears_user() {
    let mut state = AuthState::default();
    state.user = Some(user("a@b.com"));

    let token = state.begin(true);
    state.settle_logout(token, Ok(()));
    assert!(state.user.is_none());
    assert!(state.error.is_none());
}

#[test]
fn logout_failure_preserves_user_and_reports_error() {
    let mut state = AuthState::default();
    state.user = Some(user("a@b.com"));

    let token = state.begin(true);
    state.settle_logout(token, Err("backend timeout".to_owned()));
    assert_eq!(state.user.as_ref().map(|u| u.email.as_str()), Some("a@b.com"));
    assert_eq!(state.error.as_deref(), Some("backend timeout"));
}

// =============================================================
// Local profile edits
// =============================================================

#[test]
fn profile_edit_updates_user_fields() {
    let mut state = AuthState::default();
    state.user = Some(user("a@b.com"));

    state.set_profile_fields("Jordan Walker".to_owned(), "jordan_w".to_owned());
    let u = state.user.as_ref().unwrap();
    assert_eq!(u.full_name.as_deref(), Some("Jordan Walker"));
    assert_eq!(u.username.as_deref(), Some("jordan_w"));
}

#[test]
fn profile_edit_with_blank_values_clears_fields() {
    let mut state = AuthState::default();
    let mut existing = user("a@b.com");
    existing.full_name = Some("Old Name".to_owned());
    state.user = Some(existing);

    state.set_profile_fields("   ".to_owned(), String::new());
    let u = state.user.as_ref().unwrap();
    assert!(u.full_name.is_none());
    assert!(u.username.is_none());
}

#[test]
fn profile_edit_without_user_is_a_no_op() {
    let mut state = AuthState::default();
    let before = state.seq;
    state.set_profile_fields("Name".to_owned(), "handle".to_owned());
    assert!(state.user.is_none());
    assert_eq!(state.seq, before);
}

// =============================================================
// Passive notification channel
// =============================================================

#[test]
fn signed_in_event_adopts_user_and_clears_error() {
    let mut state = AuthState::default();
    state.error = Some("stale".to_owned());

    state.apply_event(SessionEvent::SignedIn(user("tab2@b.com")));
    assert_eq!(state.user.as_ref().map(|u| u.email.as_str()), Some("tab2@b.com"));
    assert!(state.error.is_none());
}

#[test]
fn signed_out_event_clears_user_without_explicit_call() {
    let mut state = AuthState::default();
    state.user = Some(user("a@b.com"));

    state.apply_event(SessionEvent::SignedOut);
    assert!(state.user.is_none());
}

// =============================================================
// Completion sequencing
// =============================================================

#[test]
fn stale_login_completion_loses_to_passive_signout() {
    let mut state = AuthState::default();
    let token = state.begin(true);

    // Session ends in another tab while the login request is in flight.
    state.apply_event(SessionEvent::SignedOut);
    state.settle_login(token, Ok(user("a@b.com")));

    assert!(state.user.is_none(), "stale completion must not resurrect a session");
    assert!(!state.loading);
}

#[test]
fn stale_initialize_completion_still_latches_initialized() {
    let mut state = AuthState::default();
    let token = state.begin(false);

    state.apply_event(SessionEvent::SignedIn(user("tab2@b.com")));
    state.settle_initialize(token, Ok(None));

    assert!(state.initialized);
    assert!(!state.loading);
    assert_eq!(
        state.user.as_ref().map(|u| u.email.as_str()),
        Some("tab2@b.com"),
        "the later passive mutation wins over the stale discovery result"
    );
}

#[test]
fn overlapping_operations_apply_only_the_later_one() {
    let mut state = AuthState::default();
    let first = state.begin(true);
    let second = state.begin(true);

    // The older operation settles after the newer one began: dropped.
    state.settle_login(first, Ok(user("old@b.com")));
    assert!(state.user.is_none());

    // The newer operation is still current and applies normally.
    state.settle_login(second, Ok(user("new@b.com")));
    assert_eq!(state.user.as_ref().map(|u| u.email.as_str()), Some("new@b.com"));
}

#[test]
fn seq_advances_on_begins_events_and_applied_completions() {
    let mut state = AuthState::default();
    let s0 = state.seq;
    let token = state.begin(true);
    assert!(state.seq > s0);

    let s1 = state.seq;
    state.apply_event(SessionEvent::SignedOut);
    assert!(state.seq > s1);

    // A stale completion clears loading but does not count as a mutation.
    let s2 = state.seq;
    state.settle_login(token, Err("late".to_owned()));
    assert_eq!(state.seq, s2);
    assert!(!state.loading);
    assert!(state.error.is_none(), "stale failure must not overwrite state");
}
