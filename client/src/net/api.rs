//! HTTP helper for the catalog endpoint.
//!
//! Client-side (hydrate): a real `GET` via `gloo-net`.
//! Server-side (SSR): a stub returning an error, since the list is only ever
//! fetched after the view activates in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get a typed `Result`; the view decides what the user sees.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{CatalogError, CatalogItem};

#[cfg(any(test, feature = "hydrate"))]
fn catalog_endpoint() -> &'static str {
    crate::config::CATALOG_ENDPOINT
}

/// Fetch the catalog listing. No query parameters, no auth headers.
///
/// # Errors
///
/// `NetworkFailure` when the request cannot complete, `HttpStatusFailure` on
/// a non-2xx answer, `ParseFailure` when the body is not the expected shape.
pub async fn fetch_catalog() -> Result<Vec<CatalogItem>, CatalogError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(catalog_endpoint())
            .send()
            .await
            .map_err(|e| CatalogError::NetworkFailure(e.to_string()))?;
        super::types::check_status(resp.status())?;
        let body = resp
            .text()
            .await
            .map_err(|e| CatalogError::NetworkFailure(e.to_string()))?;
        super::types::parse_catalog(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(CatalogError::NetworkFailure("not available on server".to_owned()))
    }
}
