//! Watch-page state: one video's detail block plus the related rail.
//!
//! DESIGN
//! ======
//! Reactions are applied optimistically. The counts and the viewer's own
//! status move the moment the button is pressed; the server call runs
//! behind it and a failure reloads the page state rather than trying to
//! unpick the arithmetic.

#[cfg(test)]
#[path = "watch_test.rs"]
mod watch_test;

use crate::net::types::{LikeStatus, VideoDetail, VideoSummary, WatchPayload};

/// State backing the watch page.
#[derive(Clone, Debug, Default)]
pub struct WatchState {
    pub detail: Option<VideoDetail>,
    pub related: Vec<VideoSummary>,
    pub loading: bool,
    pub error: Option<String>,
}

impl WatchState {
    /// Install a freshly loaded payload, clearing any stale error.
    pub fn apply(&mut self, payload: WatchPayload) {
        self.detail = Some(payload.video_details);
        self.related = payload.related;
        self.loading = false;
        self.error = None;
    }

    /// The viewer's current reaction, `Neutral` when signed out or unknown.
    #[must_use]
    pub fn viewer_status(&self) -> LikeStatus {
        self.detail
            .as_ref()
            .and_then(|detail| detail.viewer_like_status)
            .unwrap_or_default()
    }

    /// Apply a reaction optimistically: move the counts off the old status
    /// onto the new one. No-op when nothing is loaded or nothing changes.
    pub fn react(&mut self, next: LikeStatus) {
        let Some(detail) = self.detail.as_mut() else {
            return;
        };
        let current = detail.viewer_like_status.unwrap_or_default();
        if current == next {
            return;
        }
        match current {
            LikeStatus::Liked => detail.likes = (detail.likes - 1).max(0),
            LikeStatus::Disliked => detail.dislikes = (detail.dislikes - 1).max(0),
            LikeStatus::Neutral => {}
        }
        match next {
            LikeStatus::Liked => detail.likes += 1,
            LikeStatus::Disliked => detail.dislikes += 1,
            LikeStatus::Neutral => {}
        }
        detail.viewer_like_status = Some(next);
    }
}

/// Reaction resulting from pressing a like/dislike button: pressing the
/// active button releases it back to neutral.
#[must_use]
pub fn next_like_status(current: LikeStatus, pressed: LikeStatus) -> LikeStatus {
    if current == pressed {
        LikeStatus::Neutral
    } else {
        pressed
    }
}
