use super::*;

fn video(id: i64) -> VideoSummary {
    VideoSummary {
        id,
        title: format!("video {id}"),
        description: String::new(),
        thumbnail_url: "thumb.png".to_owned(),
        user_id: None,
        views: 0,
        likes: 0,
        dislikes: 0,
        upload_date: None,
        watched_at: None,
        liked_at: None,
    }
}

// =============================================================
// Tab visibility
// =============================================================

#[test]
fn uploads_are_always_visible() {
    assert!(ProfileTab::Videos.visible(true));
    assert!(ProfileTab::Videos.visible(false));
}

#[test]
fn activity_tabs_are_owner_only() {
    assert!(ProfileTab::History.visible(true));
    assert!(!ProfileTab::History.visible(false));
    assert!(ProfileTab::Liked.visible(true));
    assert!(!ProfileTab::Liked.visible(false));
}

#[test]
fn every_tab_has_a_label() {
    for tab in ProfileTab::ALL {
        assert!(!tab.label().is_empty());
    }
}

// =============================================================
// Active list selection
// =============================================================

#[test]
fn active_list_follows_the_tab() {
    let state = ProfileState {
        videos: vec![video(1)],
        history: vec![video(2), video(3)],
        liked: vec![video(4)],
        ..ProfileState::default()
    };

    let by_tab = |tab| ProfileState {
        tab,
        ..state.clone()
    };
    assert_eq!(by_tab(ProfileTab::Videos).active_list().len(), 1);
    assert_eq!(by_tab(ProfileTab::History).active_list().len(), 2);
    assert_eq!(by_tab(ProfileTab::Liked).active_list().len(), 1);
    assert_eq!(by_tab(ProfileTab::Liked).active_list()[0].id, 4);
}

#[test]
fn the_default_tab_is_uploads() {
    assert_eq!(ProfileState::default().tab, ProfileTab::Videos);
}
