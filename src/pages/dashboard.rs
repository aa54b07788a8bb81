//! Dashboard page, the authenticated landing route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Always rendered behind the route guard, so a session user is present.
//! Shows the user's wishlists with search and visibility filtering plus the
//! recent-activity sidebar; data comes from the mock fixtures layer.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::activity_feed::ActivityFeed;
use crate::components::wishlist_card::WishlistCard;
use crate::mock;
use crate::net::types::{Activity, Wishlist};
use crate::state::auth::SessionStore;

/// Visibility filter buttons above the wishlist grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VisibilityFilter {
    #[default]
    All,
    Public,
    Private,
}

impl VisibilityFilter {
    fn admits(self, wishlist: &Wishlist) -> bool {
        match self {
            Self::All => true,
            Self::Public => wishlist.is_public,
            Self::Private => !wishlist.is_public,
        }
    }
}

/// Case-insensitive title/description search combined with the visibility
/// filter.
fn filter_wishlists(
    wishlists: &[Wishlist],
    search: &str,
    filter: VisibilityFilter,
) -> Vec<Wishlist> {
    let needle = search.trim().to_lowercase();
    wishlists
        .iter()
        .filter(|w| {
            let matches_search = needle.is_empty()
                || w.title.to_lowercase().contains(&needle)
                || w.description
                    .as_deref()
                    .is_some_and(|d| d.to_lowercase().contains(&needle));
            matches_search && filter.admits(w)
        })
        .cloned()
        .collect()
}

async fn fetch_dashboard() -> (Vec<Wishlist>, Vec<Activity>) {
    mock::simulated_latency().await;
    (mock::personal_wishlists(), mock::recent_activity())
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();

    let data = LocalResource::new(fetch_dashboard);
    let search = RwSignal::new(String::new());
    let filter = RwSignal::new(VisibilityFilter::All);

    let greeting = move || {
        store
            .get()
            .user
            .map(|u| format!("Welcome, {}", u.email))
            .unwrap_or_else(|| "Welcome".to_owned())
    };

    let filter_button = move |target: VisibilityFilter, label: &'static str| {
        view! {
            <button
                class="filter-group__button"
                class=("filter-group__button--active", move || filter.get() == target)
                on:click=move |_| filter.set(target)
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="dashboard-page">
            <header class="page-hero">
                <h1 class="page-hero__title">{greeting}</h1>
                <p class="page-hero__subtitle">
                    "Manage your wishlists and see your recent activity"
                </p>
            </header>

            <div class="dashboard-page__layout">
                <section class="dashboard-page__main">
                    <div class="dashboard-page__heading">
                        <h2>"Your Wishlists"</h2>
                        <a class="btn btn--primary" href="/wishlists/new">"+ New Wishlist"</a>
                    </div>

                    <div class="dashboard-page__controls">
                        <input
                            class="input dashboard-page__search"
                            type="text"
                            placeholder="Search wishlists..."
                            prop:value=move || search.get()
                            on:input=move |ev| search.set(event_target_value(&ev))
                        />
                        <div class="filter-group">
                            {filter_button(VisibilityFilter::All, "All")}
                            {filter_button(VisibilityFilter::Public, "Public")}
                            {filter_button(VisibilityFilter::Private, "Private")}
                        </div>
                    </div>

                    <Suspense fallback=move || {
                        view! { <p class="dashboard-page__loading">"Loading wishlists..."</p> }
                    }>
                        {move || {
                            data.get()
                                .map(|(wishlists, _)| {
                                    let visible = filter_wishlists(
                                        &wishlists,
                                        &search.get(),
                                        filter.get(),
                                    );
                                    if visible.is_empty() {
                                        view! {
                                            <div class="card dashboard-page__empty">
                                                <h3>"No wishlists found"</h3>
                                                <p>
                                                    {move || {
                                                        let term = search.get();
                                                        if term.trim().is_empty() {
                                                            "You haven't created any wishlists yet."
                                                                .to_owned()
                                                        } else {
                                                            format!("No results for \"{}\"", term.trim())
                                                        }
                                                    }}
                                                </p>
                                                <a class="btn btn--primary" href="/wishlists/new">
                                                    "Create Your First Wishlist"
                                                </a>
                                            </div>
                                        }
                                            .into_any()
                                    } else {
                                        view! {
                                            <div class="dashboard-page__grid">
                                                {visible
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

                <aside class="card dashboard-page__sidebar">
                    <h2 class="dashboard-page__sidebar-title">"Recent Activity"</h2>
                    <Suspense fallback=move || {
                        view! { <p class="activity-feed__empty">"Loading activity..."</p> }
                    }>
                        {move || {
                            data.get().map(|(_, activities)| {
                                view! { <ActivityFeed activities=activities/> }
                            })
                        }}
                    </Suspense>
                </aside>
            </div>
        </div>
    }
}
