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

fn videos(count: i64) -> Vec<VideoSummary> {
    (1..=count).map(video).collect()
}

// =============================================================
// Rail selection
// =============================================================

#[test]
fn rail_prefers_recommendations() {
    let state = CatalogState {
        videos: videos(3),
        recommended: vec![video(100), video(101)],
        ..CatalogState::default()
    };
    let ids: Vec<i64> = state.rail().iter().map(|v| v.id).collect();
    assert_eq!(ids, vec![100, 101]);
}

#[test]
fn rail_falls_back_to_the_catalog_head() {
    let state = CatalogState {
        videos: videos(3),
        ..CatalogState::default()
    };
    let ids: Vec<i64> = state.rail().iter().map(|v| v.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn rail_is_capped() {
    let state = CatalogState {
        recommended: videos(10),
        ..CatalogState::default()
    };
    assert_eq!(state.rail().len(), RAIL_LIMIT);
}

#[test]
fn rail_is_empty_when_nothing_loaded() {
    assert!(CatalogState::default().rail().is_empty());
}

// =============================================================
// Empty placeholder
// =============================================================

#[test]
fn empty_placeholder_waits_for_loading_to_finish() {
    let loading = CatalogState {
        loading: true,
        ..CatalogState::default()
    };
    assert!(!loading.show_empty());
    assert!(CatalogState::default().show_empty());
}

#[test]
fn empty_placeholder_defers_to_errors_and_content() {
    let failed = CatalogState {
        error: Some("offline".to_owned()),
        ..CatalogState::default()
    };
    assert!(!failed.show_empty());

    let loaded = CatalogState {
        videos: videos(1),
        ..CatalogState::default()
    };
    assert!(!loaded.show_empty());
}
