use super::*;
use chrono::TimeZone;

fn user(id: &str) -> User {
    User {
        id: id.to_owned(),
        email: format!("{id}@example.com"),
        username: None,
        full_name: None,
        avatar_url: None,
        created_at: chrono::Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap(),
    }
}

#[test]
fn no_local_no_remote_is_quiet() {
    assert_eq!(detect_session_change(None, None), None);
}

#[test]
fn remote_session_appears_emits_signed_in() {
    let remote = user("u1");
    assert_eq!(
        detect_session_change(None, Some(remote.clone())),
        Some(SessionEvent::SignedIn(remote))
    );
}

#[test]
fn remote_session_gone_emits_signed_out() {
    let local = user("u1");
    assert_eq!(detect_session_change(Some(&local), None), Some(SessionEvent::SignedOut));
}

#[test]
fn same_identity_is_quiet() {
    let local = user("u1");
    assert_eq!(detect_session_change(Some(&local), Some(user("u1"))), None);
}

#[test]
fn identity_switch_emits_signed_in_for_new_user() {
    let local = user("u1");
    let remote = user("u2");
    assert_eq!(
        detect_session_change(Some(&local), Some(remote.clone())),
        Some(SessionEvent::SignedIn(remote))
    );
}
