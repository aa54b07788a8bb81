//! Profile page: session user details, inline profile editing (mocked), the
//! user's wishlists, and sign-out.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;

use crate::components::wishlist_card::WishlistCard;
use crate::mock;
use crate::net::types::{User, Wishlist};
use crate::state::auth::SessionStore;

/// Preferred display name: full name, then username, then the local part of
/// the email address.
fn display_name(user: &User) -> String {
    if let Some(name) = user.full_name.as_deref().filter(|n| !n.trim().is_empty()) {
        return name.to_owned();
    }
    if let Some(handle) = user.username.as_deref().filter(|h| !h.trim().is_empty()) {
        return handle.to_owned();
    }
    user.email
        .split('@')
        .next()
        .unwrap_or(&user.email)
        .to_owned()
}

/// Single-letter avatar fallback when no image is set.
fn avatar_initial(user: &User) -> String {
    display_name(user)
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_else(|| "?".to_owned())
}

async fn fetch_own_wishlists() -> Vec<Wishlist> {
    mock::simulated_latency().await;
    mock::personal_wishlists()
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let store = expect_context::<SessionStore>();

    let wishlists = LocalResource::new(fetch_own_wishlists);
    let editing = RwSignal::new(false);
    let draft_name = RwSignal::new(String::new());
    let draft_username = RwSignal::new(String::new());

    let user = move || store.get().user;

    let start_editing = move |_| {
        if let Some(u) = store.get_untracked().user {
            draft_name.set(u.full_name.unwrap_or_default());
            draft_username.set(u.username.unwrap_or_default());
            editing.set(true);
        }
    };

    // Profile persistence is mocked; the edit only lives in the local session
    // copy until the page reloads.
    let save_profile = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        store.set_profile_fields(draft_name.get_untracked(), draft_username.get_untracked());
        editing.set(false);
    };

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            store.logout().await;
            if store.get_untracked().user.is_none() {
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href("/");
                }
            }
        });
    };

    view! {
        <div class="profile-page">
            {move || {
                user()
                    .map(|u| {
                        let heading = display_name(&u);
                        let initial = avatar_initial(&u);
                        let avatar_url = u.avatar_url.clone();
                        let username = u.username.clone();
                        let email = u.email.clone();
                        let joined = u.created_at.format("%B %Y").to_string();
                        view! {
                            <header class="card profile-page__header">
                                <div class="profile-page__avatar">
                                    {match avatar_url {
                                        Some(url) => {
                                            view! { <img src=url alt="Avatar"/> }.into_any()
                                        }
                                        None => {
                                            view! {
                                                <span class="profile-page__avatar-initial">
                                                    {initial}
                                                </span>
                                            }
                                                .into_any()
                                        }
                                    }}
                                </div>
                                <div class="profile-page__identity">
                                    <h1 class="profile-page__name">{heading}</h1>
                                    {username
                                        .map(|h| {
                                            view! {
                                                <p class="profile-page__handle">{format!("@{h}")}</p>
                                            }
                                        })}
                                    <p class="profile-page__email">{email}</p>
                                    <p class="profile-page__joined">
                                        {format!("Member since {joined}")}
                                    </p>
                                </div>
                                <div class="profile-page__actions">
                                    <button class="btn btn--secondary" on:click=start_editing>
                                        "Edit Profile"
                                    </button>
                                    <button class="btn btn--ghost" on:click=on_logout>
                                        "Log out"
                                    </button>
                                </div>
                            </header>
                        }
                    })
            }}

            <Show when=move || editing.get()>
                <form class="card profile-page__edit" on:submit=save_profile>
                    <h2>"Edit Profile"</h2>
                    <label class="auth-form__label">
                        "Full name"
                        <input
                            class="input"
                            type="text"
                            prop:value=move || draft_name.get()
                            on:input=move |ev| draft_name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        "Username"
                        <input
                            class="input"
                            type="text"
                            prop:value=move || draft_username.get()
                            on:input=move |ev| draft_username.set(event_target_value(&ev))
                        />
                    </label>
                    <div class="profile-page__edit-actions">
                        <button class="btn btn--primary" type="submit">"Save"</button>
                        <button
                            class="btn btn--ghost"
                            type="button"
                            on:click=move |_| editing.set(false)
                        >
                            "Cancel"
                        </button>
                    </div>
                </form>
            </Show>

            <section class="profile-page__wishlists">
                <h2>"Your Wishlists"</h2>
                <Suspense fallback=move || {
                    view! { <p class="profile-page__loading">"Loading wishlists..."</p> }
                }>
                    {move || {
                        wishlists
                            .get()
                            .map(|lists| {
                                if lists.is_empty() {
                                    view! {
                                        <div class="card profile-page__empty">
                                            <p>"You haven't created any wishlists yet."</p>
                                            <a class="btn btn--primary" href="/wishlists/new">
                                                "Create a Wishlist"
                                            </a>
                                        </div>
                                    }
                                        .into_any()
                                } else {
                                    view! {
                                        <div class="profile-page__grid">
                                            {lists
                                                .into_iter()
                                                .map(|w| view! { <WishlistCard wishlist=w/> })
                                                .collect::<Vec<_>>()}
                                        </div>
                                    }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>
            </section>
        </div>
    }
}
