//! Routed page components.

pub mod dashboard;
pub mod explore;
pub mod home;
pub mod login;
pub mod not_found;
pub mod profile;
pub mod register;
pub mod wishlist;
pub mod wishlist_create;
