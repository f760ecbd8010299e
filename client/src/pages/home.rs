//! Landing page hero.

use leptos::prelude::*;

use crate::config::{HOME_BACKGROUND, SITE_NAME};
use crate::routes::AppRoute;

#[component]
pub fn HomePage() -> impl IntoView {
    let background = format!("background-image: url(\"{HOME_BACKGROUND}\")");

    view! {
        <section class="hero" style=background>
            <div class="hero__overlay">
                <div class="hero__content">
                    <h1 class="hero__title">"Welcome to " {SITE_NAME}</h1>
                    <p class="hero__lead">
                        "Join and watch the ultimate experience and level up your adventure."
                    </p>
                    <p class="hero__sub">"Get exclusive offers and new releases."</p>
                    <a class="btn btn--cta" href=AppRoute::Explore.path()>
                        "Explore Now"
                    </a>
                </div>
            </div>
        </section>
    }
}
