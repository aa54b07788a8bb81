//! Route guard gating protected views behind the session check.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route wraps its page in [`ProtectedRoute`]. The guard owns
//! first-visit session discovery, renders the loading screen until the store
//! settles, and bounces unauthenticated visitors to the login page carrying
//! the path they asked for.

#[cfg(test)]
#[path = "protected_route_test.rs"]
mod protected_route_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::loading_screen::LoadingScreen;
use crate::state::auth::{AuthState, SessionStore};

/// Access decision derived from live session state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardState {
    /// No session discovery has been triggered yet.
    Uninitialized,
    /// Discovery (or a later operation that may produce a user) is in
    /// flight; no navigation decision is made.
    Initializing,
    /// A user is present; render the protected subtree.
    Authenticated,
    /// Settled with no user; redirect to login.
    Unauthenticated,
}

/// Map session state to a guard decision.
///
/// Not sticky: callers re-derive this on every state change, so a logout
/// while viewing protected content re-routes immediately.
#[must_use]
pub fn guard_state(state: &AuthState) -> GuardState {
    if !state.initialized {
        if state.loading {
            GuardState::Initializing
        } else {
            GuardState::Uninitialized
        }
    } else if state.user.is_some() {
        GuardState::Authenticated
    } else if state.loading {
        GuardState::Initializing
    } else {
        GuardState::Unauthenticated
    }
}

/// Login entry point carrying the originally requested path, so the login
/// flow can return the visitor after success.
#[must_use]
pub fn login_redirect_target(requested_path: &str) -> String {
    if requested_path.is_empty() {
        return "/login".to_owned();
    }
    format!("/login?from={requested_path}")
}

/// Wrapper that renders its children only for an authenticated session.
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let location = use_location();
    let navigate = use_navigate();

    // Kick off session discovery. The effect reads nothing reactive, so it
    // runs once per mount, and the store ignores repeat triggers anyway.
    Effect::new(move || {
        store.initialize_once();
    });

    // Redirect once the store settles without a user.
    let requested = location.pathname;
    Effect::new(move || {
        let state = store.get();
        if guard_state(&state) == GuardState::Unauthenticated {
            let target = login_redirect_target(&requested.get_untracked());
            navigate(
                &target,
                NavigateOptions {
                    replace: true,
                    ..NavigateOptions::default()
                },
            );
        }
    });

    let children = StoredValue::new(children);
    view! {
        <Show
            when=move || guard_state(&store.get()) == GuardState::Authenticated
            fallback=move || view! { <LoadingScreen/> }
        >
            {children.with_value(|children| children())}
        </Show>
    }
}
