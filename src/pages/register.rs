//! Registration page; account creation precedes email verification, so a
//! success shows a confirmation panel instead of starting a session.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;

use crate::state::auth::SessionStore;

const MIN_PASSWORD_LEN: usize = 6;

/// Validate the registration form, returning trimmed credentials.
fn validate_register_input(
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() || confirm.is_empty() {
        return Err("Please fill in all fields");
    }
    if password != confirm {
        return Err("Passwords do not match");
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters");
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let form_error = RwSignal::new(None::<&'static str>);
    let submitted = RwSignal::new(false);

    let busy = move || store.get().loading;
    let backend_error = move || store.get().error;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy() {
            return;
        }
        form_error.set(None);

        let (email_value, password_value) =
            match validate_register_input(&email.get(), &password.get(), &confirm.get()) {
                Ok(values) => values,
                Err(message) => {
                    form_error.set(Some(message));
                    return;
                }
            };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            store.sign_up(&email_value, &password_value).await;
            if store.get_untracked().error.is_none() {
                submitted.set(true);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-page__panel">
                <a class="auth-page__brand" href="/">
                    <span aria-hidden="true">"\u{1f381}"</span>
                    " Wishly"
                </a>

                <Show
                    when=move || submitted.get()
                    fallback=move || {
                        view! {
                            <div class="card auth-card">
                                <h2 class="auth-card__title">"Create your account"</h2>

                                <form class="auth-form" on:submit=on_submit>
                                    <Show when=move || {
                                        form_error.get().is_some() || backend_error().is_some()
                                    }>
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
                                            prop:value=move || password.get()
                                            on:input=move |ev| password.set(event_target_value(&ev))
                                        />
                                        <span class="auth-form__hint">
                                            "Must be at least 6 characters"
                                        </span>
                                    </label>

                                    <label class="auth-form__label">
                                        "Confirm Password"
                                        <input
                                            class="input"
                                            type="password"
                                            prop:value=move || confirm.get()
                                            on:input=move |ev| confirm.set(event_target_value(&ev))
                                        />
                                    </label>

                                    <button
                                        class="btn btn--primary auth-form__submit"
                                        type="submit"
                                        disabled=busy
                                    >
                                        {move || {
                                            if busy() { "Creating account..." } else { "Sign up" }
                                        }}
                                    </button>
                                </form>

                                <p class="auth-card__switch">
                                    "Already have an account? "
                                    <a href="/login">"Log in"</a>
                                </p>
                            </div>
                        }
                    }
                >
                    <div class="card auth-card auth-card--success">
                        <h2 class="auth-card__title">"Registration Successful!"</h2>
                        <p class="auth-card__note">
                            "Please check your email to verify your account."
                        </p>
                        <a class="btn btn--primary" href="/login">"Go to Login"</a>
                    </div>
                </Show>
            </div>
        </div>
    }
}
