//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionStore` is the single source of truth for "who is logged in". It is
//! created once at application start, provided via Leptos context, and read
//! reactively by the navbar, route guards, and user-aware pages. The four
//! operations and the passive [`SessionEvent`] path are the only write paths.
//!
//! DESIGN
//! ======
//! State transitions live on [`AuthState`] as plain methods so they can be
//! unit-tested without a browser; the store is a thin `RwSignal` wrapper that
//! adds the async backend calls. Every mutation bumps a sequence counter, and
//! an in-flight operation only adopts its result if nothing mutated the state
//! after it began. A later passive notification therefore invalidates a
//! slower explicit completion instead of losing to it.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::types::User;

/// Out-of-band session change pushed by the backend (e.g. a session expired
/// or was established in another tab).
#[derive(Clone, Debug, PartialEq)]
pub enum SessionEvent {
    /// A session now exists for this user.
    SignedIn(User),
    /// The session ended remotely.
    SignedOut,
}

/// Authentication state tracking the current user and operation status.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    /// Current authenticated identity, if any.
    pub user: Option<User>,
    /// True strictly while an operation is in flight.
    pub loading: bool,
    /// Last backend failure, overwritten or cleared by each new operation.
    pub error: Option<String>,
    /// Whether the first session discovery has completed. Transitions
    /// false -> true exactly once and never reverts.
    pub initialized: bool,
    /// Monotonic counter identifying the latest applied mutation. Operation
    /// starts, passive events, and applied completions bump it; a stale
    /// completion's bookkeeping does not.
    pub seq: u64,
}

impl AuthState {
    /// Mark an operation as started. Returns the token its completion must
    /// present to apply a result.
    pub fn begin(&mut self, clear_error: bool) -> u64 {
        self.loading = true;
        if clear_error {
            self.error = None;
        }
        self.seq += 1;
        self.seq
    }

    fn is_current(&self, token: u64) -> bool {
        self.seq == token
    }

    /// Settle session discovery. Always clears `loading` and latches
    /// `initialized`; adopts the outcome only when no later mutation has won.
    pub fn settle_initialize(&mut self, token: u64, outcome: Result<Option<User>, String>) {
        if self.is_current(token) {
            match outcome {
                Ok(user) => {
                    self.user = user;
                    self.error = None;
                }
                Err(message) => {
                    self.user = None;
                    self.error = Some(message);
                }
            }
            self.seq += 1;
        }
        self.initialized = true;
        self.loading = false;
    }

    /// Settle account creation. Registration never yields a session, so a
    /// success only clears the error.
    pub fn settle_sign_up(&mut self, token: u64, outcome: Result<(), String>) {
        if self.is_current(token) {
            match outcome {
                Ok(()) => self.error = None,
                Err(message) => self.error = Some(message),
            }
            self.seq += 1;
        }
        self.loading = false;
    }

    /// Settle a credential login. Failure leaves any existing user untouched.
    pub fn settle_login(&mut self, token: u64, outcome: Result<User, String>) {
        if self.is_current(token) {
            match outcome {
                Ok(user) => {
                    self.user = Some(user);
                    self.error = None;
                }
                Err(message) => self.error = Some(message),
            }
            self.seq += 1;
        }
        self.loading = false;
    }

    /// Settle a logout. Failure preserves the local user; the backend session
    /// is still considered live until it confirms termination.
    pub fn settle_logout(&mut self, token: u64, outcome: Result<(), String>) {
        if self.is_current(token) {
            match outcome {
                Ok(()) => self.user = None,
                Err(message) => self.error = Some(message),
            }
            self.seq += 1;
        }
        self.loading = false;
    }

    /// Overwrite editable profile fields on the local user, if one exists.
    /// Empty strings clear the field. Counts as a mutation.
    pub fn set_profile_fields(&mut self, full_name: String, username: String) {
        let Some(user) = self.user.as_mut() else {
            return;
        };
        user.full_name = Some(full_name).filter(|v| !v.trim().is_empty());
        user.username = Some(username).filter(|v| !v.trim().is_empty());
        self.seq += 1;
    }

    /// Apply a passive backend notification. This is an independent write
    /// path and counts as a mutation, so it invalidates any in-flight
    /// explicit completion.
    pub fn apply_event(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::SignedIn(user) => {
                self.user = Some(user);
                self.error = None;
            }
            SessionEvent::SignedOut => self.user = None,
        }
        self.seq += 1;
    }
}

/// Owned handle to the process-wide session state.
///
/// Cheap to copy; all clones observe and mutate the same underlying signal.
#[derive(Clone, Copy)]
pub struct SessionStore {
    state: RwSignal<AuthState>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(AuthState::default()),
        }
    }

    /// Reactive read of the current state snapshot.
    #[must_use]
    pub fn get(&self) -> AuthState {
        self.state.get()
    }

    /// Non-reactive read, for event handlers and spawned tasks.
    #[must_use]
    pub fn get_untracked(&self) -> AuthState {
        self.state.get_untracked()
    }

    /// Discover an existing backend session and settle into it.
    ///
    /// Safe to call repeatedly; callers normally gate on `initialized` via
    /// [`Self::initialize_once`].
    pub async fn initialize(&self) {
        let token = self.state.try_update(|s| s.begin(false)).unwrap_or_default();
        let outcome = crate::net::api::fetch_session().await;
        self.state.update(|s| s.settle_initialize(token, outcome));
    }

    /// Trigger session discovery unless it already ran or is in flight.
    /// Route guards call this on entry; repeat calls are no-ops.
    pub fn initialize_once(&self) {
        let pending = self
            .state
            .with_untracked(|s| s.initialized || s.loading);
        if pending {
            return;
        }
        let store = *self;
        let token = self.state.try_update(|s| s.begin(false)).unwrap_or_default();
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::fetch_session().await;
            store.state.update(|s| s.settle_initialize(token, outcome));
        });
    }

    /// Request account creation. A success does not establish a session; the
    /// user must verify their email before logging in.
    pub async fn sign_up(&self, email: &str, password: &str) {
        let token = self.state.try_update(|s| s.begin(true)).unwrap_or_default();
        let outcome = crate::net::api::sign_up(email, password).await;
        self.state.update(|s| s.settle_sign_up(token, outcome));
    }

    /// Request a session for the given credentials.
    pub async fn login(&self, email: &str, password: &str) {
        let token = self.state.try_update(|s| s.begin(true)).unwrap_or_default();
        let outcome = crate::net::api::sign_in(email, password).await;
        self.state.update(|s| s.settle_login(token, outcome));
    }

    /// Request session termination.
    pub async fn logout(&self) {
        let token = self.state.try_update(|s| s.begin(true)).unwrap_or_default();
        let outcome = crate::net::api::sign_out().await;
        self.state.update(|s| s.settle_logout(token, outcome));
    }

    /// Edit the local profile copy. Persistence is out of scope for the
    /// session backend, so this only changes what the UI displays.
    pub fn set_profile_fields(&self, full_name: String, username: String) {
        self.state.update(|s| s.set_profile_fields(full_name, username));
    }

    /// Feed a passive backend notification into the store.
    pub fn handle_event(&self, event: SessionEvent) {
        self.state.update(|s| s.apply_event(event));
    }
}
