//! Root application component with routing and context providers.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_location,
};

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::components::protected_route::ProtectedRoute;
use crate::net::watch::spawn_session_watch;
use crate::pages::dashboard::DashboardPage;
use crate::pages::explore::ExplorePage;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::profile::ProfilePage;
use crate::pages::register::RegisterPage;
use crate::pages::wishlist::WishlistPage;
use crate::pages::wishlist_create::WishlistCreatePage;
use crate::state::auth::SessionStore;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Auth screens render standalone, without the site chrome.
fn is_auth_route(path: &str) -> bool {
    matches!(path.trim_end_matches('/'), "/login" | "/register")
}

/// Root application component.
///
/// Provides the session store context, starts the passive session watcher,
/// and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = SessionStore::new();
    provide_context(store);
    spawn_session_watch(store);

    view! {
        <Stylesheet id="leptos" href="/pkg/wishly.css"/>
        <Title text="Wishly"/>

        <Router>
            <SiteShell/>
        </Router>
    }
}

/// Navbar/footer wrapper around the routed pages.
#[component]
fn SiteShell() -> impl IntoView {
    let location = use_location();
    let chrome = move || !is_auth_route(&location.pathname.get());

    view! {
        <div class="site">
            <Show when=chrome>
                <Navbar/>
            </Show>

            <main class="site__main">
                <Routes fallback=NotFoundPage>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("explore") view=ExplorePage/>
                    <Route
                        path=StaticSegment("dashboard")
                        view=|| view! { <ProtectedRoute><DashboardPage/></ProtectedRoute> }
                    />
                    <Route
                        path=(StaticSegment("wishlists"), StaticSegment("new"))
                        view=|| view! { <ProtectedRoute><WishlistCreatePage/></ProtectedRoute> }
                    />
                    <Route
                        path=(StaticSegment("wishlists"), ParamSegment("id"))
                        view=|| view! { <ProtectedRoute><WishlistPage/></ProtectedRoute> }
                    />
                    <Route
                        path=StaticSegment("profile")
                        view=|| view! { <ProtectedRoute><ProfilePage/></ProtectedRoute> }
                    />
                </Routes>
            </main>

            <Show when=chrome>
                <Footer/>
            </Show>
        </div>
    }
}
