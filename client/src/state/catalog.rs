//! Catalog list view state and its activation guard.
//!
//! DESIGN
//! ======
//! The view is always in exactly one of three states, so "loading and failed"
//! or "failed with items" cannot be expressed. Transitions are linear:
//! `Loading` settles once into `Loaded` or `Failed`, and a fresh activation
//! starts over at `Loading`.
//!
//! The fetch is fire-and-forget. An `Activation` token ties its result to the
//! view instance that issued it: once the view is torn down, or once a result
//! has been applied, further results are discarded.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::config::CATALOG_FAILED_MESSAGE;
use crate::net::types::{CatalogError, CatalogItem};

/// State of one catalog view activation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CatalogState {
    /// Request in flight; placeholder shown.
    #[default]
    Loading,
    /// Items in received order, one card each.
    Loaded(Vec<CatalogItem>),
    /// User-facing message; no items shown.
    Failed(String),
}

impl CatalogState {
    /// Build the settled state for a fetch outcome.
    ///
    /// Errors are logged in full and replaced by the generic message.
    pub fn from_result(result: Result<Vec<CatalogItem>, CatalogError>) -> Self {
        match result {
            Ok(items) => Self::Loaded(items),
            Err(e) => {
                log::error!("error fetching catalog: {e}");
                Self::Failed(CATALOG_FAILED_MESSAGE.to_owned())
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Items to render; empty unless loaded.
    pub fn items(&self) -> &[CatalogItem] {
        match self {
            Self::Loaded(items) => items.as_slice(),
            Self::Loading | Self::Failed(_) => &[],
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message.as_str()),
            Self::Loading | Self::Loaded(_) => None,
        }
    }
}

/// Token scoping a fetch result to the view activation that issued it.
///
/// Clones share the same flags, so the spawned fetch task and the view's
/// cleanup hook observe each other.
#[derive(Clone, Debug)]
pub struct Activation {
    live: Arc<AtomicBool>,
    settled: Arc<AtomicBool>,
}

impl Default for Activation {
    fn default() -> Self {
        Self::new()
    }
}

impl Activation {
    pub fn new() -> Self {
        Self { live: Arc::new(AtomicBool::new(true)), settled: Arc::new(AtomicBool::new(false)) }
    }

    /// Mark the owning view as gone. Idempotent.
    pub fn deactivate(&self) {
        self.live.store(false, Ordering::Release);
    }

    pub fn is_live(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }

    /// Resolve a fetch outcome into the next view state.
    ///
    /// Returns `None` when the view has been deactivated or a result was
    /// already applied for this activation.
    pub fn settle(&self, result: Result<Vec<CatalogItem>, CatalogError>) -> Option<CatalogState> {
        if !self.is_live() {
            log::debug!("catalog result arrived after view deactivated; dropping");
            return None;
        }
        if self.settled.swap(true, Ordering::AcqRel) {
            log::debug!("catalog activation already settled; dropping");
            return None;
        }
        Some(CatalogState::from_result(result))
    }

    /// Issue this activation's one request and resolve it.
    ///
    /// `fetch` is not called at all if the view is already gone.
    pub async fn run<F, Fut>(&self, fetch: F) -> Option<CatalogState>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<CatalogItem>, CatalogError>>,
    {
        if !self.is_live() {
            return None;
        }
        let result = fetch().await;
        self.settle(result)
    }
}
