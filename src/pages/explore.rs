//! Explore page: browse public wishlists with search, category filter, and
//! sort controls. Publicly reachable, no session required.

#[cfg(test)]
#[path = "explore_test.rs"]
mod explore_test;

use leptos::prelude::*;

use crate::components::wishlist_card::WishlistCard;
use crate::mock;
use crate::net::types::{Wishlist, WishlistCategory};

/// Orderings offered by the sort dropdown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Newest,
    Popular,
    Fulfillment,
}

impl SortOrder {
    const ALL: [Self; 3] = [Self::Newest, Self::Popular, Self::Fulfillment];

    fn label(self) -> &'static str {
        match self {
            Self::Newest => "Newest",
            Self::Popular => "Most Items",
            Self::Fulfillment => "Most Funded",
        }
    }

    fn slug(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Popular => "popular",
            Self::Fulfillment => "fulfillment",
        }
    }

    fn from_slug(slug: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|s| s.slug() == slug)
            .unwrap_or_default()
    }
}

/// Apply search text, optional category filter, and sort order to the public
/// wishlist set.
fn search_and_sort(
    wishlists: &[Wishlist],
    search: &str,
    category: Option<WishlistCategory>,
    order: SortOrder,
) -> Vec<Wishlist> {
    let needle = search.trim().to_lowercase();
    let mut visible: Vec<Wishlist> = wishlists
        .iter()
        .filter(|w| {
            let matches_search = needle.is_empty()
                || w.title.to_lowercase().contains(&needle)
                || w.description
                    .as_deref()
                    .is_some_and(|d| d.to_lowercase().contains(&needle));
            let matches_category = category.is_none_or(|c| w.category == c);
            matches_search && matches_category
        })
        .cloned()
        .collect();

    match order {
        SortOrder::Newest => visible.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortOrder::Popular => visible.sort_by(|a, b| b.items_count.cmp(&a.items_count)),
        SortOrder::Fulfillment => {
            visible.sort_by(|a, b| b.fulfillment_percent().cmp(&a.fulfillment_percent()));
        }
    }
    visible
}

async fn fetch_public() -> Vec<Wishlist> {
    mock::simulated_latency().await;
    mock::public_wishlists()
}

#[component]
pub fn ExplorePage() -> impl IntoView {
    let data = LocalResource::new(fetch_public);
    let search = RwSignal::new(String::new());
    let category = RwSignal::new(None::<WishlistCategory>);
    let order = RwSignal::new(SortOrder::Newest);

    let category_chip = move |target: Option<WishlistCategory>| {
        let label = target.map_or("All", WishlistCategory::label);
        view! {
            <button
                class="filter-group__button"
                class=("filter-group__button--active", move || category.get() == target)
                on:click=move |_| category.set(target)
            >
                {target.map(WishlistCategory::icon).unwrap_or_default()}
                " "
                {label}
            </button>
        }
    };

    view! {
        <div class="explore-page">
            <header class="page-hero">
                <h1 class="page-hero__title">"Explore Wishlists"</h1>
                <p class="page-hero__subtitle">
                    "Discover public wishlists and help make wishes come true"
                </p>
            </header>

            <div class="explore-page__controls">
                <input
                    class="input explore-page__search"
                    type="text"
                    placeholder="Search wishlists..."
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <select
                    class="input explore-page__sort"
                    on:change=move |ev| order.set(SortOrder::from_slug(&event_target_value(&ev)))
                >
                    {SortOrder::ALL
                        .into_iter()
                        .map(|s| {
                            view! {
                                <option value=s.slug() selected=move || order.get() == s>
                                    {s.label()}
                                </option>
                            }
                        })
                        .collect::<Vec<_>>()}
                </select>
            </div>

            <div class="filter-group explore-page__categories">
                {category_chip(None)}
                {WishlistCategory::ALL
                    .into_iter()
                    .map(|c| category_chip(Some(c)))
                    .collect::<Vec<_>>()}
            </div>

            <Suspense fallback=move || {
                view! { <p class="explore-page__loading">"Loading wishlists..."</p> }
            }>
                {move || {
                    data.get()
                        .map(|wishlists| {
                            let visible = search_and_sort(
                                &wishlists,
                                &search.get(),
                                category.get(),
                                order.get(),
                            );
                            if visible.is_empty() {
                                view! {
                                    <div class="card explore-page__empty">
                                        <h3>"No wishlists found"</h3>
                                        <p>"Try a different search or category."</p>
                                    </div>
                                }
                                    .into_any()
                            } else {
                                view! {
                                    <div class="explore-page__grid">
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
        </div>
    }
}
