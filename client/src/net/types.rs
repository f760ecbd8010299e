//! Catalog wire DTOs and the display item they map into.
//!
//! DESIGN
//! ======
//! The remote envelope is decoded into records mirroring its nesting first, then
//! flattened into `CatalogItem`. Views only ever see the flattened form, so a
//! change in the remote's nesting touches this module alone.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::HashSet;

use serde::Deserialize;

/// Errors produced while loading the catalog.
///
/// The view collapses every variant into one generic message; the `Display`
/// text is for logs only.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// The request could not be sent or no response arrived.
    #[error("catalog request failed: {0}")]
    NetworkFailure(String),

    /// The endpoint answered with a non-success status.
    #[error("catalog responded with status {status}")]
    HttpStatusFailure { status: u16 },

    /// The body was not the expected JSON shape.
    #[error("catalog body parse failed: {0}")]
    ParseFailure(String),
}

/// One displayable catalog entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogItem {
    /// Remote identifier; unique within one fetched collection.
    pub id: u64,
    pub title: String,
    pub image_url: String,
}

/// Top-level response envelope.
#[derive(Debug, Deserialize)]
pub struct CatalogEnvelope {
    pub data: Vec<CatalogRecord>,
}

/// A single record as the remote sends it. Unknown fields are ignored.
#[derive(Debug, Deserialize)]
pub struct CatalogRecord {
    pub mal_id: u64,
    pub title: String,
    pub images: CatalogImages,
}

#[derive(Debug, Deserialize)]
pub struct CatalogImages {
    pub jpg: CatalogImageSet,
}

#[derive(Debug, Deserialize)]
pub struct CatalogImageSet {
    pub image_url: String,
}

impl From<CatalogRecord> for CatalogItem {
    fn from(record: CatalogRecord) -> Self {
        Self { id: record.mal_id, title: record.title, image_url: record.images.jpg.image_url }
    }
}

/// Map a non-success HTTP status to an error.
///
/// # Errors
///
/// Returns `HttpStatusFailure` for any status outside `200..=299`.
pub fn check_status(status: u16) -> Result<(), CatalogError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(CatalogError::HttpStatusFailure { status })
    }
}

/// Decode a response body into display items, preserving received order.
///
/// Records repeating an earlier `id` are dropped so ids stay usable as
/// rendering keys.
///
/// # Errors
///
/// Returns `ParseFailure` if the body is not JSON, lacks the `data`
/// collection, or any record lacks an id, title, or thumbnail URL.
pub fn parse_catalog(body: &str) -> Result<Vec<CatalogItem>, CatalogError> {
    let envelope: CatalogEnvelope =
        serde_json::from_str(body).map_err(|e| CatalogError::ParseFailure(e.to_string()))?;

    let mut seen = HashSet::with_capacity(envelope.data.len());
    let mut items = Vec::with_capacity(envelope.data.len());
    for record in envelope.data {
        if !seen.insert(record.mal_id) {
            log::warn!("dropping duplicate catalog id {}", record.mal_id);
            continue;
        }
        items.push(CatalogItem::from(record));
    }
    Ok(items)
}
