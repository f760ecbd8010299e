//! Games page: the remote catalog rendered as a card grid.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only stateful route. Each mount is one activation: it issues a single
//! catalog request from the browser and settles `Loading` into `Loaded` or
//! `Failed`. Server rendering always emits `Loading` and never fetches.
//!
//! ERROR HANDLING
//! ==============
//! Fetch errors are logged by `CatalogState::from_result`; the page shows the
//! generic message only. A response that lands after unmount is dropped by the
//! activation guard instead of writing to a disposed signal.

use leptos::prelude::*;

use crate::components::catalog_card::CatalogCard;
use crate::net::types::CatalogItem;
use crate::state::catalog::{Activation, CatalogState};

#[component]
pub fn GamesPage() -> impl IntoView {
    let catalog = RwSignal::new(CatalogState::default());
    let activation = Activation::new();

    #[cfg(feature = "hydrate")]
    {
        let task_activation = activation.clone();
        leptos::task::spawn_local(async move {
            if let Some(next) = task_activation.run(crate::net::api::fetch_catalog).await {
                catalog.set(next);
            }
        });
    }

    on_cleanup(move || activation.deactivate());

    move || match catalog.get() {
        CatalogState::Loading => view! { <div class="catalog-status">"Loading..."</div> }.into_any(),
        CatalogState::Failed(message) => {
            view! { <div class="catalog-status catalog-status--error">{message}</div> }.into_any()
        }
        CatalogState::Loaded(items) => view! { <CatalogGrid items/> }.into_any(),
    }
}

/// Heading plus one card per item, keyed by item id, in received order.
#[component]
fn CatalogGrid(items: Vec<CatalogItem>) -> impl IntoView {
    view! {
        <div class="catalog">
            <h2 class="catalog__title">"Anime Library"</h2>
            <div class="catalog__grid">
                <For
                    each=move || items.clone()
                    key=|item| item.id
                    children=move |item: CatalogItem| view! { <CatalogCard item/> }
                />
            </div>
        </div>
    }
}
