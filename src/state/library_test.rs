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
// Empty placeholder
// =============================================================

#[test]
fn empty_placeholder_shows_only_after_a_clean_empty_load() {
    assert!(LibraryState::default().show_empty());
}

#[test]
fn empty_placeholder_hides_while_loading() {
    let state = LibraryState {
        loading: true,
        ..LibraryState::default()
    };
    assert!(!state.show_empty());
}

#[test]
fn empty_placeholder_hides_behind_errors_and_content() {
    let failed = LibraryState {
        error: Some("offline".to_owned()),
        ..LibraryState::default()
    };
    assert!(!failed.show_empty());

    let loaded = LibraryState {
        items: vec![video(1)],
        ..LibraryState::default()
    };
    assert!(!loaded.show_empty());
}
