//! # wishly
//!
//! Leptos + WASM frontend for the Wishly social wishlist application.
//!
//! Authentication talks to a real backend through `net::api`; wishlist and
//! activity data is served from in-memory fixtures in `mock` until the rest
//! of the product API lands. Session state lives in `state::auth` and is the
//! only stateful subsystem.

pub mod app;
pub mod components;
pub mod mock;
pub mod net;
pub mod pages;
pub mod state;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
