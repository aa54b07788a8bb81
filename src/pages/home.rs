//! Public landing page with the marketing hero and feature highlights.

use leptos::prelude::*;

use crate::state::auth::SessionStore;

#[component]
fn Feature(icon: &'static str, title: &'static str, body: &'static str) -> impl IntoView {
    view! {
        <div class="card home-page__feature">
            <span class="home-page__feature-icon" aria-hidden="true">{icon}</span>
            <h3>{title}</h3>
            <p>{body}</p>
        </div>
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let signed_in = move || store.get().user.is_some();

    view! {
        <div class="home-page">
            <section class="home-page__hero">
                <h1 class="home-page__title">"Share your wishes with the people who care"</h1>
                <p class="home-page__tagline">
                    "Create wishlists for birthdays, weddings, and every occasion in \
                     between. Friends and family can contribute toward the gifts you \
                     actually want."
                </p>
                <div class="home-page__cta">
                    <Show
                        when=signed_in
                        fallback=|| {
                            view! {
                                <a class="btn btn--primary" href="/register">
                                    "Get Started"
                                </a>
                                <a class="btn btn--ghost" href="/explore">
                                    "Explore Wishlists"
                                </a>
                            }
                        }
                    >
                        <a class="btn btn--primary" href="/dashboard">
                            "Go to Dashboard"
                        </a>
                    </Show>
                </div>
            </section>

            <section class="home-page__features">
                <Feature
                    icon="\u{1f4dd}"
                    title="Create"
                    body="Build wishlists with prices, photos, and links to the exact \
                          products you want."
                />
                <Feature
                    icon="\u{1f517}"
                    title="Share"
                    body="Make lists public or share them privately with the people who \
                          matter."
                />
                <Feature
                    icon="\u{1f49d}"
                    title="Contribute"
                    body="Friends can chip in any amount toward bigger gifts, together."
                />
            </section>
        </div>
    }
}
