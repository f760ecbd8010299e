//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Stitches Leptos SSR rendering, the compiled client bundle under `/pkg`, a
//! health probe, and the static assets directory into one Axum router. No
//! route here serves application data; the catalog is fetched by the browser.
//!
//! Requests that match no route fall through to the assets directory, and
//! from there to the Leptos file-and-404 handler, so an asset file can never
//! shadow or collide with a registered route.

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::error::ServerError;

/// Full application router.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section).
pub fn app(config: &ServerConfig) -> Result<Router, ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(animeverse::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || animeverse::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    // Leptos serves anything under its site root, else renders the 404 shell.
    let not_found = Router::new()
        .fallback(leptos_axum::file_and_error_handler(animeverse::app::shell))
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(leptos_router
        .merge(site_routes(config, not_found))
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

/// Health probe plus the assets directory as the catch-all, handing misses
/// (and non-GET requests) to `not_found`.
fn site_routes(config: &ServerConfig, not_found: Router) -> Router {
    let assets = ServeDir::new(&config.assets_dir)
        .call_fallback_on_method_not_allowed(true)
        .fallback(not_found);

    Router::new().route("/healthz", get(healthz)).fallback_service(assets)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
