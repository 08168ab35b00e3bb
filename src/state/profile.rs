//! Profile-page state: identity card, uploads, and the viewer-only tabs.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use crate::net::types::{UserProfile, VideoSummary};

/// Which list the profile page is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProfileTab {
    #[default]
    Videos,
    History,
    Liked,
}

impl ProfileTab {
    pub const ALL: [Self; 3] = [Self::Videos, Self::Liked, Self::History];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Videos => "Videos",
            Self::History => "History",
            Self::Liked => "Liked",
        }
    }

    /// History and liked lists are private to their owner.
    #[must_use]
    pub fn visible(self, own_profile: bool) -> bool {
        match self {
            Self::Videos => true,
            Self::History | Self::Liked => own_profile,
        }
    }
}

/// State backing the profile page.
#[derive(Clone, Debug, Default)]
pub struct ProfileState {
    pub profile: Option<UserProfile>,
    pub videos: Vec<VideoSummary>,
    pub history: Vec<VideoSummary>,
    pub liked: Vec<VideoSummary>,
    pub tab: ProfileTab,
    pub loading: bool,
    pub error: Option<String>,
}

impl ProfileState {
    /// The list behind the active tab.
    #[must_use]
    pub fn active_list(&self) -> &[VideoSummary] {
        match self.tab {
            ProfileTab::Videos => &self.videos,
            ProfileTab::History => &self.history,
            ProfileTab::Liked => &self.liked,
        }
    }
}
