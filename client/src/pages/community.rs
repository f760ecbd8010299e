//! Community blurb. The join link points back at this page.

use leptos::prelude::*;

use crate::routes::AppRoute;

#[component]
pub fn CommunityPage() -> impl IntoView {
    view! {
        <div class="panel panel--mid">
            <h2 class="panel__title">"Community"</h2>
            <p class="panel__body">
                "Join our vibrant community. Participate in discussions, share tips, and connect with like-minded individuals."
            </p>
            <a class="btn btn--pill" href=AppRoute::Community.path()>
                "Join the Community"
            </a>
        </div>
    }
}
