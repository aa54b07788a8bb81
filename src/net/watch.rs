//! Background session watcher feeding the store's passive event channel.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend can end or establish a session outside this tab (expiry,
//! another device, another tab). The watcher periodically re-asks the backend
//! for the current session and converts any divergence from local state into
//! [`SessionEvent`]s, so views react without an explicit operation.

#[cfg(test)]
#[path = "watch_test.rs"]
mod watch_test;

use crate::net::types::User;
use crate::state::auth::{SessionEvent, SessionStore};

/// How often the watcher re-checks the backend session.
#[cfg(feature = "hydrate")]
const POLL_INTERVAL: std::time::Duration = std::time::Duration::from_secs(30);

/// Compare the locally held user against the backend's answer and produce
/// the event that reconciles them, if any.
fn detect_session_change(local: Option<&User>, remote: Option<User>) -> Option<SessionEvent> {
    match (local, remote) {
        (None, Some(user)) => Some(SessionEvent::SignedIn(user)),
        (Some(_), None) => Some(SessionEvent::SignedOut),
        (Some(held), Some(user)) if held.id != user.id => Some(SessionEvent::SignedIn(user)),
        _ => None,
    }
}

/// Spawn the watch loop as a local task. Fetch errors produce no event; the
/// next tick simply tries again.
#[cfg(feature = "hydrate")]
pub fn spawn_session_watch(store: SessionStore) {
    leptos::task::spawn_local(async move {
        loop {
            gloo_timers::future::sleep(POLL_INTERVAL).await;
            let state = store.get_untracked();
            // Nothing to reconcile against until the first discovery ran,
            // and an in-flight operation will settle on its own.
            if !state.initialized || state.loading {
                continue;
            }
            match crate::net::api::fetch_session().await {
                Ok(remote) => {
                    if let Some(event) = detect_session_change(state.user.as_ref(), remote) {
                        store.handle_event(event);
                    }
                }
                Err(e) => leptos::logging::warn!("session watch failed: {e}"),
            }
        }
    });
}

#[cfg(not(feature = "hydrate"))]
pub fn spawn_session_watch(store: SessionStore) {
    let _ = store;
}
