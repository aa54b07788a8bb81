//! Shared DTOs for the client/backend boundary.
//!
//! DESIGN
//! ======
//! These types mirror the hosted backend's payloads so serde round-trips stay
//! lossless. Derived presentation values (fulfillment percentages, remaining
//! amounts) live here as methods so page and card code stays declarative.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An authenticated user as returned by the auth backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Login email address.
    pub email: String,
    /// Chosen handle, if the profile has one.
    pub username: Option<String>,
    /// Display name, if the profile has one.
    pub full_name: Option<String>,
    /// Avatar image URL, if available.
    pub avatar_url: Option<String>,
    /// Account creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// A wishlist summary as shown on dashboard, explore, and profile grids.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Wishlist {
    /// Unique wishlist identifier (UUID string).
    pub id: String,
    /// Owning user (UUID string).
    pub user_id: String,
    /// Display title.
    pub title: String,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Occasion category.
    pub category: WishlistCategory,
    /// Whether the list appears on the public explore page.
    pub is_public: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last-modified timestamp.
    pub updated_at: DateTime<Utc>,
    /// Number of items on the list.
    pub items_count: u32,
    /// Sum of item prices in whole currency units.
    pub total_price: f64,
    /// Sum contributed so far in whole currency units.
    pub fulfilled_price: f64,
}

impl Wishlist {
    /// Overall fulfillment as a whole percentage, clamped to 0..=100.
    #[must_use]
    pub fn fulfillment_percent(&self) -> u8 {
        percent_of(self.fulfilled_price, self.total_price)
    }
}

/// A single item on a wishlist.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WishlistItem {
    /// Unique item identifier (UUID string).
    pub id: String,
    /// Wishlist this item belongs to (UUID string).
    pub wishlist_id: String,
    /// Display name.
    pub name: String,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Price in whole currency units.
    pub price: f64,
    /// Product photo URL, if available.
    pub image_url: Option<String>,
    /// External vendor link, if available.
    pub product_url: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last-modified timestamp.
    pub updated_at: DateTime<Utc>,
    /// Whether the item has been fully funded or purchased.
    pub is_fulfilled: bool,
    /// Amount contributed so far in whole currency units.
    pub fulfilled_amount: f64,
    /// Number of distinct contributors.
    pub contributors_count: u32,
}

impl WishlistItem {
    /// Funded share as a whole percentage, clamped to 0..=100.
    #[must_use]
    pub fn funded_percent(&self) -> u8 {
        if self.is_fulfilled {
            return 100;
        }
        percent_of(self.fulfilled_amount, self.price)
    }

    /// Amount still needed to fully fund the item, never negative.
    #[must_use]
    pub fn remaining_amount(&self) -> f64 {
        (self.price - self.fulfilled_amount).max(0.0)
    }
}

/// An entry in the recent-activity feed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// Unique activity identifier (UUID string).
    pub id: String,
    /// What kind of event this is.
    pub kind: ActivityKind,
    /// User who performed the action (UUID string).
    pub user_id: String,
    /// Item or wishlist the action targeted (UUID string).
    pub target_id: String,
    /// Human-readable summary fragment.
    pub message: String,
    /// Contribution amount, for contribution events.
    pub amount: Option<f64>,
    /// When the event occurred.
    pub created_at: DateTime<Utc>,
    /// Denormalized actor details for display.
    pub actor: ActivityActor,
}

/// Display details of the user behind an activity entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActivityActor {
    pub username: String,
    pub avatar_url: Option<String>,
}

/// Kinds of events shown in the activity feed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    /// Someone put money toward an item.
    Contribution,
    /// An item was fully funded or purchased.
    Fulfillment,
    /// A recipient sent a thank-you note.
    Thanks,
}

/// Occasion categories a wishlist can belong to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WishlistCategory {
    #[default]
    Birthday,
    Wedding,
    Baby,
    Holiday,
    Graduation,
    Housewarming,
    Charity,
    Project,
    Other,
}

impl WishlistCategory {
    /// All categories in display order, for pickers and filters.
    pub const ALL: [Self; 9] = [
        Self::Birthday,
        Self::Wedding,
        Self::Baby,
        Self::Holiday,
        Self::Graduation,
        Self::Housewarming,
        Self::Charity,
        Self::Project,
        Self::Other,
    ];

    /// Human-readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Birthday => "Birthday",
            Self::Wedding => "Wedding",
            Self::Baby => "Baby",
            Self::Holiday => "Holiday",
            Self::Graduation => "Graduation",
            Self::Housewarming => "Housewarming",
            Self::Charity => "Charity",
            Self::Project => "Project",
            Self::Other => "Other",
        }
    }

    /// Emoji icon shown next to the category chip.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Birthday => "\u{1f382}",
            Self::Wedding => "\u{1f48d}",
            Self::Baby => "\u{1f476}",
            Self::Holiday => "\u{1f384}",
            Self::Graduation => "\u{1f393}",
            Self::Housewarming => "\u{1f3e0}",
            Self::Charity => "\u{1f496}",
            Self::Project => "\u{1f4bb}",
            Self::Other => "\u{1f381}",
        }
    }

    /// Stable identifier used in query strings and serde payloads.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Birthday => "birthday",
            Self::Wedding => "wedding",
            Self::Baby => "baby",
            Self::Holiday => "holiday",
            Self::Graduation => "graduation",
            Self::Housewarming => "housewarming",
            Self::Charity => "charity",
            Self::Project => "project",
            Self::Other => "other",
        }
    }

    /// Parse a slug back into a category; unknown slugs fall back to `Other`.
    #[must_use]
    pub fn from_slug(slug: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|c| c.slug() == slug)
            .unwrap_or(Self::Other)
    }
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn percent_of(part: f64, whole: f64) -> u8 {
    if whole <= 0.0 {
        return 0;
    }
    ((part / whole * 100.0).round().clamp(0.0, 100.0)) as u8
}
