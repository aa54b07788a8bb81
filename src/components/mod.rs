//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome and shared cards while reading session state
//! from the Leptos context provider; only `protected_route` makes navigation
//! decisions.

pub mod activity_feed;
pub mod footer;
pub mod loading_screen;
pub mod navbar;
pub mod protected_route;
pub mod wishlist_card;
