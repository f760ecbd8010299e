//! Explore blurb. The button has no action.

use leptos::prelude::*;

#[component]
pub fn ExplorePage() -> impl IntoView {
    view! {
        <div class="panel panel--mid">
            <h2 class="panel__title">"Explore"</h2>
            <p class="panel__body">
                "Discover exciting new games and genres. Start your next adventure today!"
            </p>
            <button class="btn btn--pill" type="button">
                "Start Exploring"
            </button>
        </div>
    }
}
