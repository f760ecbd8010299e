//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::config::{SITE_NAME, STYLESHEET};
use crate::pages::{
    community::CommunityPage, explore::ExplorePage, games::GamesPage, home::HomePage, news::NewsPage,
    store::StorePage,
};
use crate::routes::AppRoute;
use crate::state::search::SearchState;

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

/// Root application component.
///
/// Provides the header search context and maps each `AppRoute` to its page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let search = RwSignal::new(SearchState::default());
    provide_context(search);

    view! {
        <Stylesheet id="leptos" href=STYLESHEET/>
        <Title text=SITE_NAME/>

        <Router>
            <div class="site">
                <NavBar/>
                <main class="site__main">
                    <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                        <Route path=StaticSegment(AppRoute::Home.segment()) view=HomePage/>
                        <Route path=StaticSegment(AppRoute::Games.segment()) view=GamesPage/>
                        <Route path=StaticSegment(AppRoute::Community.segment()) view=CommunityPage/>
                        <Route path=StaticSegment(AppRoute::Store.segment()) view=StorePage/>
                        <Route path=StaticSegment(AppRoute::News.segment()) view=NewsPage/>
                        <Route path=StaticSegment(AppRoute::Explore.segment()) view=ExplorePage/>
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
