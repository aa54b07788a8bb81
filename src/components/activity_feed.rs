//! Recent-activity feed for the dashboard sidebar.

#[cfg(test)]
#[path = "activity_feed_test.rs"]
mod activity_feed_test;

use chrono::{DateTime, Utc};
use leptos::prelude::*;

use crate::net::types::{Activity, ActivityKind};

fn kind_icon(kind: ActivityKind) -> &'static str {
    match kind {
        ActivityKind::Contribution => "\u{1f4b0}",
        ActivityKind::Fulfillment => "\u{1f381}",
        ActivityKind::Thanks => "\u{2764}\u{fe0f}",
    }
}

/// Render a timestamp relative to `now` ("just now", "2 days ago"), falling
/// back to a short date past one week.
fn format_relative_time(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - at).num_seconds();
    if seconds < 60 {
        return "just now".to_owned();
    }

    let minutes = seconds / 60;
    if minutes < 60 {
        let unit = if minutes == 1 { "minute" } else { "minutes" };
        return format!("{minutes} {unit} ago");
    }

    let hours = minutes / 60;
    if hours < 24 {
        let unit = if hours == 1 { "hour" } else { "hours" };
        return format!("{hours} {unit} ago");
    }

    let days = hours / 24;
    if days < 7 {
        let unit = if days == 1 { "day" } else { "days" };
        return format!("{days} {unit} ago");
    }

    at.format("%b %-d").to_string()
}

/// Vertical timeline of activity entries.
#[component]
pub fn ActivityFeed(activities: Vec<Activity>) -> impl IntoView {
    if activities.is_empty() {
        return view! { <p class="activity-feed__empty">"No recent activity"</p> }.into_any();
    }

    let now = Utc::now();
    view! {
        <ul class="activity-feed">
            {activities
                .into_iter()
                .map(|activity| {
                    view! {
                        <li class="activity-feed__entry">
                            <span class="activity-feed__icon" aria-hidden="true">
                                {kind_icon(activity.kind)}
                            </span>
                            <div class="activity-feed__body">
                                <span class="activity-feed__actor">
                                    {activity.actor.username.clone()}
                                </span>
                                " "
                                {activity.message.clone()}
                                {activity
                                    .amount
                                    .map(|amount| {
                                        view! {
                                            <span class="activity-feed__amount">
                                                " $" {format!("{amount:.0}")}
                                            </span>
                                        }
                                    })}
                            </div>
                            <time class="activity-feed__time">
                                {format_relative_time(activity.created_at, now)}
                            </time>
                        </li>
                    }
                })
                .collect::<Vec<_>>()}
        </ul>
    }
    .into_any()
}
