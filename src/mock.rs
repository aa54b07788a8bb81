//! In-memory fixtures standing in for wishlist/activity API data.
//!
//! DESIGN
//! ======
//! Pages load these through `LocalResource` with a short simulated latency so
//! loading states render realistically. Only the auth session talks to a real
//! backend; everything else in the product is mocked at this layer.

use chrono::{DateTime, TimeZone, Utc};

use crate::net::types::{
    Activity, ActivityActor, ActivityKind, Wishlist, WishlistCategory, WishlistItem,
};

/// Brief artificial delay so resource loading states are visible in the
/// browser; a no-op on the server.
#[allow(clippy::unused_async)]
pub async fn simulated_latency() {
    #[cfg(feature = "hydrate")]
    gloo_timers::future::sleep(std::time::Duration::from_millis(400)).await;
}

fn ts(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

#[allow(clippy::too_many_arguments)]
fn wishlist(
    id: &str,
    user_id: &str,
    title: &str,
    description: &str,
    category: WishlistCategory,
    is_public: bool,
    created: DateTime<Utc>,
    items_count: u32,
    total_price: f64,
    fulfilled_price: f64,
) -> Wishlist {
    Wishlist {
        id: id.to_owned(),
        user_id: user_id.to_owned(),
        title: title.to_owned(),
        description: Some(description.to_owned()),
        category,
        is_public,
        created_at: created,
        updated_at: created,
        items_count,
        total_price,
        fulfilled_price,
    }
}

/// Wishlists owned by the signed-in user, for dashboard and profile grids.
#[must_use]
pub fn personal_wishlists() -> Vec<Wishlist> {
    vec![
        wishlist(
            "1",
            "123",
            "Birthday Wishlist",
            "Things I would love to get for my upcoming birthday!",
            WishlistCategory::Birthday,
            true,
            ts(2023, 5, 15, 10, 0),
            5,
            450.0,
            150.0,
        ),
        wishlist(
            "2",
            "123",
            "Home Office Setup",
            "Items I need for my new home office",
            WishlistCategory::Project,
            true,
            ts(2023, 4, 20, 10, 0),
            8,
            1200.0,
            300.0,
        ),
        wishlist(
            "3",
            "123",
            "Christmas Ideas",
            "Gift ideas for the holiday season",
            WishlistCategory::Holiday,
            false,
            ts(2023, 3, 10, 10, 0),
            12,
            800.0,
            0.0,
        ),
    ]
}

/// Public wishlists shown on the explore page.
#[must_use]
pub fn public_wishlists() -> Vec<Wishlist> {
    vec![
        wishlist(
            "1",
            "123",
            "Birthday Wishlist",
            "Things I would love to get for my upcoming birthday!",
            WishlistCategory::Birthday,
            true,
            ts(2023, 5, 15, 10, 0),
            5,
            450.0,
            150.0,
        ),
        wishlist(
            "2",
            "456",
            "Wedding Registry",
            "Help us celebrate our special day with these gift ideas",
            WishlistCategory::Wedding,
            true,
            ts(2023, 4, 10, 10, 0),
            12,
            2500.0,
            1200.0,
        ),
        wishlist(
            "3",
            "789",
            "Charity Fundraiser",
            "Support our local animal shelter with these needed supplies",
            WishlistCategory::Charity,
            true,
            ts(2023, 5, 5, 10, 0),
            8,
            1000.0,
            350.0,
        ),
        wishlist(
            "4",
            "123",
            "Home Office Setup",
            "Items I need for my new home office",
            WishlistCategory::Project,
            true,
            ts(2023, 4, 20, 10, 0),
            8,
            1200.0,
            300.0,
        ),
        wishlist(
            "5",
            "456",
            "Baby Shower Registry",
            "Expecting a little one soon! Here are some things we need.",
            WishlistCategory::Baby,
            true,
            ts(2023, 3, 15, 10, 0),
            15,
            1800.0,
            900.0,
        ),
        wishlist(
            "6",
            "789",
            "Graduation Gifts",
            "Help me celebrate my college graduation!",
            WishlistCategory::Graduation,
            true,
            ts(2023, 5, 1, 10, 0),
            6,
            800.0,
            200.0,
        ),
    ]
}

/// Recent activity entries for the dashboard sidebar.
#[must_use]
pub fn recent_activity() -> Vec<Activity> {
    vec![
        Activity {
            id: "1".to_owned(),
            kind: ActivityKind::Contribution,
            user_id: "456".to_owned(),
            target_id: "1".to_owned(),
            message: "contributed to your birthday wishlist".to_owned(),
            amount: Some(50.0),
            created_at: ts(2023, 5, 18, 14, 30),
            actor: ActivityActor {
                username: "john_smith".to_owned(),
                avatar_url: None,
            },
        },
        Activity {
            id: "2".to_owned(),
            kind: ActivityKind::Fulfillment,
            user_id: "789".to_owned(),
            target_id: "1".to_owned(),
            message: "purchased the headphones from your birthday wishlist".to_owned(),
            amount: None,
            created_at: ts(2023, 5, 17, 9, 15),
            actor: ActivityActor {
                username: "sarah_j".to_owned(),
                avatar_url: None,
            },
        },
        Activity {
            id: "3".to_owned(),
            kind: ActivityKind::Thanks,
            user_id: "123".to_owned(),
            target_id: "2".to_owned(),
            message: "sent you a thank you note for the office chair".to_owned(),
            amount: None,
            created_at: ts(2023, 5, 16, 16, 45),
            actor: ActivityActor {
                username: "alex_walker".to_owned(),
                avatar_url: None,
            },
        },
    ]
}

/// The wishlist rendered on the detail page.
#[must_use]
pub fn birthday_wishlist() -> Wishlist {
    wishlist(
        "1",
        "123",
        "Birthday Wishlist",
        "Things I would love to get for my upcoming birthday! Thanks for checking \
         out my wishlist. Feel free to contribute to any item or purchase it \
         directly from the vendor link.",
        WishlistCategory::Birthday,
        true,
        ts(2023, 5, 15, 10, 0),
        5,
        450.0,
        150.0,
    )
}

fn item(
    id: &str,
    name: &str,
    description: &str,
    price: f64,
    is_fulfilled: bool,
    fulfilled_amount: f64,
    contributors_count: u32,
) -> WishlistItem {
    let created = ts(2023, 5, 15, 10, 0);
    WishlistItem {
        id: id.to_owned(),
        wishlist_id: "1".to_owned(),
        name: name.to_owned(),
        description: Some(description.to_owned()),
        price,
        image_url: None,
        product_url: Some(format!("https://example.com/{id}")),
        created_at: created,
        updated_at: created,
        is_fulfilled,
        fulfilled_amount,
        contributors_count,
    }
}

/// Items on the birthday wishlist.
#[must_use]
pub fn birthday_items() -> Vec<WishlistItem> {
    vec![
        item(
            "1",
            "Wireless Headphones",
            "Sony WH-1000XM4 Noise Cancelling Headphones",
            350.0,
            false,
            100.0,
            2,
        ),
        item("2", "Smart Watch", "Apple Watch Series 7", 400.0, false, 0.0, 0),
        item(
            "3",
            "Coffee Maker",
            "Breville Barista Express Espresso Machine",
            700.0,
            false,
            0.0,
            0,
        ),
        item(
            "4",
            "Kindle Paperwhite",
            "Latest generation e-reader with adjustable warm light",
            140.0,
            true,
            140.0,
            1,
        ),
        item(
            "5",
            "Hiking Backpack",
            "Osprey Atmos AG 65 Backpack",
            300.0,
            false,
            0.0,
            0,
        ),
    ]
}
