//! Reusable card for wishlist summaries on dashboard, explore, and profile.

#[cfg(test)]
#[path = "wishlist_card_test.rs"]
mod wishlist_card_test;

use chrono::{DateTime, Utc};
use leptos::prelude::*;

use crate::net::types::Wishlist;

fn format_created_date(created_at: DateTime<Utc>) -> String {
    created_at.format("%b %-d, %Y").to_string()
}

fn items_label(count: u32) -> String {
    if count == 1 {
        "1 item".to_owned()
    } else {
        format!("{count} items")
    }
}

/// A clickable summary card linking to the wishlist detail page.
#[component]
pub fn WishlistCard(wishlist: Wishlist) -> impl IntoView {
    let percent = wishlist.fulfillment_percent();
    let href = format!("/wishlists/{}", wishlist.id);
    let bar_width = format!("width: {percent}%");
    let visibility = if wishlist.is_public { "Public" } else { "Private" };

    view! {
        <div class="card wishlist-card">
            <div class="wishlist-card__meta">
                <span class="wishlist-card__icon" aria-hidden="true">
                    {wishlist.category.icon()}
                </span>
                <span class="wishlist-card__category">{wishlist.category.label()}</span>
                <span class="wishlist-card__visibility">{visibility}</span>
            </div>

            <h3 class="wishlist-card__title">{wishlist.title.clone()}</h3>
            <Show when={
                let description = wishlist.description.clone();
                move || description.is_some()
            }>
                <p class="wishlist-card__description">
                    {wishlist.description.clone().unwrap_or_default()}
                </p>
            </Show>

            <p class="wishlist-card__created">
                "Created " {format_created_date(wishlist.created_at)}
            </p>

            <div class="wishlist-card__progress">
                <div class="wishlist-card__progress-row">
                    <span>"Fulfillment Progress"</span>
                    <span>{percent} "%"</span>
                </div>
                <div class="progress-bar">
                    <div class="progress-bar__fill" style=bar_width></div>
                </div>
            </div>

            <div class="wishlist-card__footer">
                <span class="wishlist-card__count">{items_label(wishlist.items_count)}</span>
                <a class="wishlist-card__open" href=href>
                    "View Wishlist \u{2197}"
                </a>
            </div>
        </div>
    }
}
