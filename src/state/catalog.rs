//! Browse-page state: the public catalog plus the signed-in rail.
//!
//! DESIGN
//! ======
//! The catalog and the recommendation rail load independently so a slow or
//! failed `/api/video/me` call never blanks the public grid.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use crate::net::types::VideoSummary;

/// Maximum number of entries shown in the recommendation rail.
pub const RAIL_LIMIT: usize = 6;

/// Videos backing the browse page.
#[derive(Clone, Debug, Default)]
pub struct CatalogState {
    pub videos: Vec<VideoSummary>,
    pub recommended: Vec<VideoSummary>,
    pub loading: bool,
    pub error: Option<String>,
}

impl CatalogState {
    /// Entries for the rail, capped at [`RAIL_LIMIT`].
    ///
    /// Falls back to the head of the public catalog when there are no
    /// recommendations yet, so the rail is never an empty strip for
    /// signed-out visitors.
    #[must_use]
    pub fn rail(&self) -> &[VideoSummary] {
        let source = if self.recommended.is_empty() {
            &self.videos
        } else {
            &self.recommended
        };
        &source[..source.len().min(RAIL_LIMIT)]
    }

    /// Whether the empty-catalog placeholder should show.
    #[must_use]
    pub fn show_empty(&self) -> bool {
        !self.loading && self.error.is_none() && self.videos.is_empty()
    }
}
