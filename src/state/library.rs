//! Shared state shape for the history and liked-videos pages.

#[cfg(test)]
#[path = "library_test.rs"]
mod library_test;

use crate::net::types::VideoSummary;

/// A flat, dated list of videos tied to the viewer's account.
#[derive(Clone, Debug, Default)]
pub struct LibraryState {
    pub items: Vec<VideoSummary>,
    pub loading: bool,
    pub error: Option<String>,
}

impl LibraryState {
    /// Whether the empty-list placeholder should show.
    #[must_use]
    pub fn show_empty(&self) -> bool {
        !self.loading && self.error.is_none() && self.items.is_empty()
    }
}
