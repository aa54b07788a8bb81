//! REST wrapper over the hosted auth backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` against the
//! same-origin `/auth/v1` proxy. Server-side (SSR): inert stubs, since auth
//! is only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is flattened to a display string here; the session store is
//! the only consumer and models exactly one error slot. The backend's richer
//! error codes are not preserved beyond their message.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::User;

#[cfg(any(test, feature = "hydrate"))]
const SESSION_ENDPOINT: &str = "/auth/v1/user";
#[cfg(any(test, feature = "hydrate"))]
const SIGNUP_ENDPOINT: &str = "/auth/v1/signup";
#[cfg(any(test, feature = "hydrate"))]
const TOKEN_ENDPOINT: &str = "/auth/v1/token?grant_type=password";
#[cfg(any(test, feature = "hydrate"))]
const LOGOUT_ENDPOINT: &str = "/auth/v1/logout";

#[cfg(any(test, feature = "hydrate"))]
fn session_request_failed_message(status: u16) -> String {
    format!("session request failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn malformed_response_message(endpoint: &str) -> String {
    format!("malformed response from {endpoint}")
}

/// Pull a display message out of a backend failure body.
///
/// The backend reports errors as JSON with one of `error_description`,
/// `msg`, or `message`; anything else falls back to the HTTP status.
#[cfg(any(test, feature = "hydrate"))]
fn extract_error_message(body: &str, status: u16) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["error_description", "msg", "message"] {
            if let Some(message) = value.get(key).and_then(|v| v.as_str()) {
                if !message.is_empty() {
                    return message.to_owned();
                }
            }
        }
    }
    format!("request failed with status {status}")
}

#[cfg(feature = "hydrate")]
#[derive(Debug, serde::Deserialize)]
struct TokenResponse {
    user: User,
}

/// Fetch the currently authenticated user, if a session exists.
///
/// `Ok(None)` means the backend answered and no session is active;
/// `Err` means the question itself could not be answered.
///
/// # Errors
///
/// Returns a display string when the request fails or the body is malformed.
pub async fn fetch_session() -> Result<Option<User>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(SESSION_ENDPOINT)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        match resp.status() {
            200 => {
                let user: User = resp
                    .json()
                    .await
                    .map_err(|_| malformed_response_message(SESSION_ENDPOINT))?;
                Ok(Some(user))
            }
            401 | 404 => Ok(None),
            status => Err(session_request_failed_message(status)),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Ok(None)
    }
}

/// Request account creation for the given credentials.
///
/// A success does not start a session; the backend sends a verification
/// email first.
///
/// # Errors
///
/// Returns the backend's failure message as a display string.
pub async fn sign_up(email: &str, password: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post(SIGNUP_ENDPOINT)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if resp.ok() {
            return Ok(());
        }
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        Err(extract_error_message(&body, status))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Start a session for the given credentials, returning the identity.
///
/// # Errors
///
/// Returns the backend's failure message as a display string (e.g. invalid
/// credentials, unverified email).
pub async fn sign_in(email: &str, password: &str) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post(TOKEN_ENDPOINT)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(extract_error_message(&body, status));
        }
        let body: TokenResponse = resp
            .json()
            .await
            .map_err(|_| malformed_response_message(TOKEN_ENDPOINT))?;
        Ok(body.user)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// End the current session.
///
/// # Errors
///
/// Returns the backend's failure message as a display string.
pub async fn sign_out() -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(LOGOUT_ENDPOINT)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if resp.ok() {
            return Ok(());
        }
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        Err(extract_error_message(&body, status))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}
