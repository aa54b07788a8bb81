use super::*;
use chrono::TimeZone;

#[test]
fn format_created_date_is_short_month_day_year() {
    let date = Utc.with_ymd_and_hms(2023, 5, 15, 10, 0, 0).unwrap();
    assert_eq!(format_created_date(date), "May 15, 2023");
}

#[test]
fn format_created_date_does_not_pad_single_digit_days() {
    let date = Utc.with_ymd_and_hms(2023, 3, 5, 0, 0, 0).unwrap();
    assert_eq!(format_created_date(date), "Mar 5, 2023");
}

#[test]
fn items_label_handles_singular_and_plural() {
    assert_eq!(items_label(1), "1 item");
    assert_eq!(items_label(0), "0 items");
    assert_eq!(items_label(12), "12 items");
}
