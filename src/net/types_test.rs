use super::*;
use chrono::TimeZone;

fn ts() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 5, 15, 10, 0, 0).unwrap()
}

fn sample_wishlist(total: f64, fulfilled: f64) -> Wishlist {
    Wishlist {
        id: "w1".to_owned(),
        user_id: "u1".to_owned(),
        title: "Birthday Wishlist".to_owned(),
        description: None,
        category: WishlistCategory::Birthday,
        is_public: true,
        created_at: ts(),
        updated_at: ts(),
        items_count: 5,
        total_price: total,
        fulfilled_price: fulfilled,
    }
}

fn sample_item(price: f64, fulfilled: f64, is_fulfilled: bool) -> WishlistItem {
    WishlistItem {
        id: "i1".to_owned(),
        wishlist_id: "w1".to_owned(),
        name: "Headphones".to_owned(),
        description: None,
        price,
        image_url: None,
        product_url: None,
        created_at: ts(),
        updated_at: ts(),
        is_fulfilled,
        fulfilled_amount: fulfilled,
        contributors_count: 0,
    }
}

#[test]
fn fulfillment_percent_rounds_to_whole() {
    assert_eq!(sample_wishlist(450.0, 150.0).fulfillment_percent(), 33);
}

#[test]
fn fulfillment_percent_zero_total_is_zero() {
    assert_eq!(sample_wishlist(0.0, 0.0).fulfillment_percent(), 0);
}

#[test]
fn fulfillment_percent_clamps_overfunded_to_100() {
    assert_eq!(sample_wishlist(100.0, 250.0).fulfillment_percent(), 100);
}

#[test]
fn item_funded_percent_uses_flag_over_amount() {
    assert_eq!(sample_item(140.0, 0.0, true).funded_percent(), 100);
}

#[test]
fn item_funded_percent_from_partial_amount() {
    assert_eq!(sample_item(350.0, 100.0, false).funded_percent(), 29);
}

#[test]
fn item_remaining_amount_never_negative() {
    assert_eq!(sample_item(100.0, 120.0, false).remaining_amount(), 0.0);
    assert_eq!(sample_item(100.0, 40.0, false).remaining_amount(), 60.0);
}

#[test]
fn user_deserializes_with_optional_profile_fields_absent() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": "u-1",
        "email": "a@b.com",
        "username": null,
        "full_name": null,
        "avatar_url": null,
        "created_at": "2023-05-15T10:00:00Z"
    }))
    .unwrap();
    assert_eq!(user.email, "a@b.com");
    assert!(user.username.is_none());
    assert_eq!(user.created_at, ts());
}

#[test]
fn category_serde_uses_lowercase_slugs() {
    let json = serde_json::to_string(&WishlistCategory::Housewarming).unwrap();
    assert_eq!(json, "\"housewarming\"");
    let back: WishlistCategory = serde_json::from_str(&json).unwrap();
    assert_eq!(back, WishlistCategory::Housewarming);
}

#[test]
fn category_slug_round_trips() {
    for category in WishlistCategory::ALL {
        assert_eq!(WishlistCategory::from_slug(category.slug()), category);
    }
}

#[test]
fn category_from_unknown_slug_falls_back_to_other() {
    assert_eq!(WishlistCategory::from_slug("anniversary"), WishlistCategory::Other);
}

#[test]
fn activity_kind_serde_is_lowercase() {
    let kind: ActivityKind = serde_json::from_str("\"fulfillment\"").unwrap();
    assert_eq!(kind, ActivityKind::Fulfillment);
}
