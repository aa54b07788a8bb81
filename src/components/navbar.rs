//! Top navigation bar with session-aware links.

use leptos::prelude::*;

use crate::state::auth::SessionStore;

/// Sticky site header. Shows Explore to everyone; dashboard, create, profile
/// and logout appear once a user is present.
#[component]
pub fn Navbar() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let menu_open = RwSignal::new(false);

    let signed_in = move || store.get().user.is_some();

    let on_logout = move |_| {
        menu_open.set(false);
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                store.logout().await;
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href("/");
                }
            });
        }
    };

    view! {
        <nav class="navbar">
            <div class="navbar__inner">
                <a class="navbar__brand" href="/">
                    <span class="navbar__brand-mark" aria-hidden="true">"\u{1f381}"</span>
                    <span class="navbar__brand-name">"Wishly"</span>
                </a>

                <div class="navbar__links">
                    <a class="navbar__link" href="/explore">"Explore"</a>
                    <Show when=signed_in>
                        <a class="navbar__link" href="/dashboard">"Dashboard"</a>
                        <a class="btn btn--primary" href="/wishlists/new">"+ New Wishlist"</a>
                    </Show>
                </div>

                <div class="navbar__session">
                    <Show
                        when=signed_in
                        fallback=|| {
                            view! {
                                <a class="navbar__link" href="/login">"Log in"</a>
                                <a class="btn btn--primary" href="/register">"Sign up"</a>
                            }
                        }
                    >
                        <a class="navbar__link navbar__link--profile" href="/profile" title="Profile">
                            {move || {
                                store
                                    .get()
                                    .user
                                    .map(|u| u.email)
                                    .unwrap_or_default()
                            }}
                        </a>
                        <button class="navbar__logout" on:click=on_logout title="Log out">
                            "Log out"
                        </button>
                    </Show>
                </div>

                <button
                    class="navbar__menu-toggle"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                    aria-label="Toggle menu"
                >
                    {move || if menu_open.get() { "\u{2715}" } else { "\u{2630}" }}
                </button>
            </div>

            <Show when=move || menu_open.get()>
                <div class="navbar__mobile">
                    <a class="navbar__mobile-link" href="/explore" on:click=move |_| menu_open.set(false)>
                        "Explore"
                    </a>
                    <Show
                        when=signed_in
                        fallback=move || {
                            view! {
                                <a class="navbar__mobile-link" href="/login" on:click=move |_| menu_open.set(false)>
                                    "Log in"
                                </a>
                                <a class="navbar__mobile-link" href="/register" on:click=move |_| menu_open.set(false)>
                                    "Sign up"
                                </a>
                            }
                        }
                    >
                        <a class="navbar__mobile-link" href="/dashboard" on:click=move |_| menu_open.set(false)>
                            "My Wishlists"
                        </a>
                        <a class="navbar__mobile-link" href="/wishlists/new" on:click=move |_| menu_open.set(false)>
                            "New Wishlist"
                        </a>
                        <a class="navbar__mobile-link" href="/profile" on:click=move |_| menu_open.set(false)>
                            "Profile"
                        </a>
                        <button class="navbar__mobile-link" on:click=on_logout>
                            "Log out"
                        </button>
                    </Show>
                </div>
            </Show>
        </nav>
    }
}
