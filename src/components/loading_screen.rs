//! Full-screen loading placeholder shown while the session settles.

use leptos::prelude::*;

#[component]
pub fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="loading-screen">
            <div class="loading-screen__spinner" aria-hidden="true"></div>
            <p class="loading-screen__label">"Loading..."</p>
        </div>
    }
}
