//! Static news headlines.

#[cfg(test)]
#[path = "news_test.rs"]
mod news_test;

use leptos::prelude::*;

/// A fixed headline with its leading marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Headline {
    pub marker: &'static str,
    pub text: &'static str,
}

pub const HEADLINES: [Headline; 6] = [
    Headline { marker: "📅", text: "Demon Slayer announces new season release date for 2024." },
    Headline { marker: "🎬", text: "Attack on Titan final season part 3 trailer drops with epic new footage." },
    Headline { marker: "🏆", text: "Jujutsu Kaisen wins \"Best Anime of the Year\" at Crunchyroll Anime Awards." },
    Headline { marker: "🎮", text: "Naruto Shippuden RPG game to launch with a new storyline." },
    Headline { marker: "🏅", text: "One Piece breaks another record with over 1,000 episodes aired." },
    Headline { marker: "🌍", text: "My Hero Academia collaborates with global brands for new merchandise." },
];

#[component]
pub fn NewsPage() -> impl IntoView {
    view! {
        <div class="panel panel--dark">
            <h2 class="panel__title">"Anime News"</h2>
            <p class="panel__body">"Stay up-to-date with the latest anime news, updates, and releases!"</p>
            <ul class="news-list">
                {HEADLINES
                    .iter()
                    .map(|h| {
                        view! {
                            <li class="news-list__item">
                                <span class="news-list__marker" aria-hidden="true">{h.marker}</span>
                                " "
                                {h.text}
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </div>
    }
}
