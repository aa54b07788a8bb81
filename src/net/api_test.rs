use super::*;

#[test]
fn auth_endpoints_use_expected_paths() {
    assert_eq!(SESSION_ENDPOINT, "/auth/v1/user");
    assert_eq!(SIGNUP_ENDPOINT, "/auth/v1/signup");
    assert_eq!(TOKEN_ENDPOINT, "/auth/v1/token?grant_type=password");
    assert_eq!(LOGOUT_ENDPOINT, "/auth/v1/logout");
}

#[test]
fn session_request_failed_message_formats_status() {
    assert_eq!(session_request_failed_message(503), "session request failed: 503");
}

#[test]
fn malformed_response_message_names_endpoint() {
    assert_eq!(
        malformed_response_message("/auth/v1/user"),
        "malformed response from /auth/v1/user"
    );
}

#[test]
fn extract_error_message_prefers_error_description() {
    let body = r#"{"error_description":"Invalid login credentials","msg":"ignored"}"#;
    assert_eq!(extract_error_message(body, 400), "Invalid login credentials");
}

#[test]
fn extract_error_message_reads_msg_and_message_keys() {
    assert_eq!(
        extract_error_message(r#"{"msg":"Email not confirmed"}"#, 400),
        "Email not confirmed"
    );
    assert_eq!(
        extract_error_message(r#"{"message":"User already registered"}"#, 422),
        "User already registered"
    );
}

#[test]
fn extract_error_message_skips_empty_strings() {
    assert_eq!(
        extract_error_message(r#"{"error_description":"","msg":"Rate limited"}"#, 429),
        "Rate limited"
    );
}

#[test]
fn extract_error_message_falls_back_to_status() {
    assert_eq!(
        extract_error_message("<html>bad gateway</html>", 502),
        "request failed with status 502"
    );
    assert_eq!(
        extract_error_message(r#"{"code":42}"#, 500),
        "request failed with status 500"
    );
}
