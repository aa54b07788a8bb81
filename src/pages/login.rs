//! Login page with email/password credentials and post-login return.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::state::auth::SessionStore;

/// Trim and require both credential fields.
fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Please fill in all fields");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Where to send the user after a successful login. The guard put the
/// originally requested path in the `from` query parameter.
fn return_path(from: Option<String>) -> String {
    match from {
        Some(path) if path.starts_with('/') => path,
        _ => "/dashboard".to_owned(),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let navigate = use_navigate();
    let query = use_query_map();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let form_error = RwSignal::new(None::<&'static str>);

    let busy = move || store.get().loading;
    let backend_error = move || store.get().error;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy() {
            return;
        }
        form_error.set(None);

        let (email_value, password_value) =
            match validate_login_input(&email.get(), &password.get()) {
                Ok(values) => values,
                Err(message) => {
                    form_error.set(Some(message));
                    return;
                }
            };
        let destination = return_path(query.get_untracked().get("from"));

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                store.login(&email_value, &password_value).await;
                let state = store.get_untracked();
                if state.user.is_some() && state.error.is_none() {
                    navigate(&destination, NavigateOptions::default());
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value, destination, &navigate);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-page__panel">
                <a class="auth-page__brand" href="/">
                    <span aria-hidden="true">"\u{1f381}"</span>
                    " Wishly"
                </a>

                <div class="card auth-card">
                    <h2 class="auth-card__title">"Log in to your account"</h2>

                    <form class="auth-form" on:submit=on_submit>
                        <Show when=move || form_error.get().is_some() || backend_error().is_some()>
                            <div class="auth-form__error">
                                {move || {
                                    form_error
                                        .get()
                                        .map(str::to_owned)
                                        .or_else(backend_error)
                                        .unwrap_or_default()
                                }}
                            </div>
                        </Show>

                        <label class="auth-form__label">
                            "Email address"
                            <input
                                class="input"
                                type="email"
                                placeholder="you@example.com"
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                            />
                        </label>

                        <label class="auth-form__label">
                            "Password"
                            <input
                                class="input"
                                type="password"
                                placeholder="\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}"
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                        </label>

                        <button class="btn btn--primary auth-form__submit" type="submit" disabled=busy>
                            {move || if busy() { "Logging in..." } else { "Log in" }}
                        </button>
                    </form>

                    <p class="auth-card__switch">
                        "Don't have an account? "
                        <a href="/register">"Sign up"</a>
                    </p>
                </div>
            </div>
        </div>
    }
}
