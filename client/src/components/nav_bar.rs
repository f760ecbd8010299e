//! Fixed site header: brand, section links, and the search form.

use leptos::prelude::*;

use crate::config::SITE_NAME;
use crate::routes::AppRoute;
use crate::state::search::SearchState;

#[component]
pub fn NavBar() -> impl IntoView {
    let search = expect_context::<RwSignal<SearchState>>();

    // Submitting only logs; the browser's default form navigation is suppressed.
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        search.with_untracked(SearchState::submit);
    };

    view! {
        <header class="site-header">
            <div class="site-header__inner">
                <a class="site-header__brand" href=AppRoute::Home.path()>
                    {SITE_NAME}
                </a>
                <nav class="site-header__nav">
                    {AppRoute::NAV
                        .into_iter()
                        .map(|route| {
                            view! {
                                <a class="site-header__link" href=route.path()>
                                    {route.label()}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                </nav>
                <form class="search-form" on:submit=on_submit>
                    <input
                        class="search-form__input"
                        type="text"
                        placeholder="Search Games..."
                        prop:value=move || search.get().query
                        on:input=move |ev| search.update(|s| s.query = event_target_value(&ev))
                    />
                    <button class="search-form__button" type="submit">
                        "Search"
                    </button>
                </form>
            </div>
        </header>
    }
}
