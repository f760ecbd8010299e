//! Header search box state.
//!
//! The search form is a stub: submitting records the query in the log and
//! does nothing else. No filtering, navigation, or request follows.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

/// Text currently typed into the header search input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchState {
    pub query: String,
}

impl SearchState {
    /// Handle a form submission.
    pub fn submit(&self) {
        log::info!("search query: {}", self.query);
    }
}
