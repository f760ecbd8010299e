//! Card for one catalog item in the games grid.

use leptos::prelude::*;

use crate::net::types::CatalogItem;

/// Thumbnail plus a single-line title.
#[component]
pub fn CatalogCard(item: CatalogItem) -> impl IntoView {
    let CatalogItem { id, title, image_url } = item;
    let alt = title.clone();
    let hover = title.clone();

    view! {
        <article class="catalog-card" data-id=id.to_string()>
            <img class="catalog-card__image" src=image_url alt=alt loading="lazy"/>
            <div class="catalog-card__title" title=hover>{title}</div>
        </article>
    }
}
