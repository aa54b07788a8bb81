use super::*;

fn named_item(name: &str, price: &str) -> FormItem {
    FormItem {
        name: name.to_owned(),
        price: price.to_owned(),
        ..FormItem::blank()
    }
}

// ============================================================================
// Title validation
// ============================================================================

#[test]
fn title_is_trimmed() {
    assert_eq!(validate_title("  My List  "), Ok("My List".to_owned()));
}

#[test]
fn blank_title_is_rejected() {
    assert_eq!(validate_title("   "), Err("Please give your wishlist a title"));
}

// ============================================================================
// Item validation
// ============================================================================

#[test]
fn one_valid_item_passes() {
    assert_eq!(validate_items(&[named_item("Headphones", "350")]), Ok(()));
}

#[test]
fn untouched_blank_rows_are_ignored() {
    let rows = vec![named_item("Headphones", "350"), FormItem::blank()];
    assert_eq!(validate_items(&rows), Ok(()));
}

#[test]
fn all_blank_rows_require_an_item() {
    let rows = vec![FormItem::blank(), FormItem::blank()];
    assert_eq!(validate_items(&rows), Err("Add at least one item to your wishlist"));
}

#[test]
fn filled_row_without_name_is_rejected() {
    let rows = vec![named_item("", "350")];
    assert_eq!(validate_items(&rows), Err("Every item needs a name"));
}

#[test]
fn filled_row_with_bad_price_is_rejected() {
    assert_eq!(
        validate_items(&[named_item("Headphones", "")]),
        Err("Every item needs a valid price")
    );
    assert_eq!(
        validate_items(&[named_item("Headphones", "abc")]),
        Err("Every item needs a valid price")
    );
    assert_eq!(
        validate_items(&[named_item("Headphones", "0")]),
        Err("Every item needs a valid price")
    );
    assert_eq!(
        validate_items(&[named_item("Headphones", "-5")]),
        Err("Every item needs a valid price")
    );
}

#[test]
fn decimal_prices_are_accepted() {
    assert_eq!(validate_items(&[named_item("Book", "12.99")]), Ok(()));
}
