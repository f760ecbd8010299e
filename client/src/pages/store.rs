//! Store blurb. The button has no action.

use leptos::prelude::*;

#[component]
pub fn StorePage() -> impl IntoView {
    view! {
        <div class="panel panel--light">
            <h2 class="panel__title">"Store"</h2>
            <p class="panel__body">
                "Browse our store for the latest anime to watch, merchandise, and exclusive discounts!"
            </p>
            <button class="btn btn--pill" type="button">
                "Visit Store"
            </button>
        </div>
    }
}
