//! Fallback route for unknown paths.

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <h1 class="not-found-page__code">"404"</h1>
            <p class="not-found-page__message">"We couldn't find that page."</p>
            <a class="btn btn--primary" href="/">"Back to Home"</a>
        </div>
    }
}
