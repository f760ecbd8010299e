//! # animeverse
//!
//! Leptos + WASM frontend for the AnimeVerse site.
//!
//! This crate contains the routed pages, the navigation shell, the catalog
//! fetch, and the view state behind the `/games` list. It is compiled twice:
//! with `hydrate` into the browser bundle, and with `ssr` into the server,
//! which renders the shell and hands off to hydration.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;

/// WASM entry point: install browser logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
