//! Site footer with platform and support links.

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__inner">
                <div class="footer__brand">
                    <a class="footer__logo" href="/">
                        <span aria-hidden="true">"\u{1f381}"</span>
                        " Wishly"
                    </a>
                    <p class="footer__tagline">
                        "The social wishlist platform that makes gifting meaningful and easy."
                    </p>
                </div>
                <div class="footer__column">
                    <h3 class="footer__heading">"Platform"</h3>
                    <ul class="footer__list">
                        <li><a href="/explore">"Explore"</a></li>
                        <li><a href="/dashboard">"Dashboard"</a></li>
                        <li><a href="/wishlists/new">"Create Wishlist"</a></li>
                    </ul>
                </div>
                <div class="footer__column">
                    <h3 class="footer__heading">"Support"</h3>
                    <ul class="footer__list">
                        <li><a href="#">"Help Center"</a></li>
                        <li><a href="#">"Contact Us"</a></li>
                        <li><a href="#">"Privacy Policy"</a></li>
                        <li><a href="#">"Terms of Service"</a></li>
                    </ul>
                </div>
            </div>
            <p class="footer__copyright">"\u{a9} 2025 Wishly. All rights reserved."</p>
        </footer>
    }
}
