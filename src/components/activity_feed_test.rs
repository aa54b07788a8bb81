use super::*;
use chrono::{Duration, TimeZone};

fn base() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 5, 18, 12, 0, 0).unwrap()
}

#[test]
fn under_a_minute_is_just_now() {
    let now = base();
    assert_eq!(format_relative_time(now - Duration::seconds(5), now), "just now");
    assert_eq!(format_relative_time(now - Duration::seconds(59), now), "just now");
}

#[test]
fn minutes_with_singular_and_plural() {
    let now = base();
    assert_eq!(format_relative_time(now - Duration::minutes(1), now), "1 minute ago");
    assert_eq!(format_relative_time(now - Duration::minutes(45), now), "45 minutes ago");
}

#[test]
fn hours_with_singular_and_plural() {
    let now = base();
    assert_eq!(format_relative_time(now - Duration::hours(1), now), "1 hour ago");
    assert_eq!(format_relative_time(now - Duration::hours(23), now), "23 hours ago");
}

#[test]
fn days_up_to_a_week() {
    let now = base();
    assert_eq!(format_relative_time(now - Duration::days(1), now), "1 day ago");
    assert_eq!(format_relative_time(now - Duration::days(6), now), "6 days ago");
}

#[test]
fn older_than_a_week_is_short_date() {
    let now = base();
    assert_eq!(format_relative_time(now - Duration::days(9), now), "May 9");
}

#[test]
fn kind_icons_are_distinct() {
    let icons = [
        kind_icon(ActivityKind::Contribution),
        kind_icon(ActivityKind::Fulfillment),
        kind_icon(ActivityKind::Thanks),
    ];
    assert_eq!(icons.len(), 3);
    assert_ne!(icons[0], icons[1]);
    assert_ne!(icons[1], icons[2]);
}
