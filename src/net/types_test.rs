use super::*;

// =============================================================
// LikeStatus serde
// =============================================================

#[test]
fn like_status_serializes_to_signed_integers() {
    assert_eq!(serde_json::to_string(&LikeStatus::Liked).unwrap(), "1");
    assert_eq!(serde_json::to_string(&LikeStatus::Neutral).unwrap(), "0");
    assert_eq!(serde_json::to_string(&LikeStatus::Disliked).unwrap(), "-1");
}

#[test]
fn like_status_deserializes_from_signed_integers() {
    assert_eq!(serde_json::from_str::<LikeStatus>("1").unwrap(), LikeStatus::Liked);
    assert_eq!(serde_json::from_str::<LikeStatus>("0").unwrap(), LikeStatus::Neutral);
    assert_eq!(serde_json::from_str::<LikeStatus>("-1").unwrap(), LikeStatus::Disliked);
}

#[test]
fn like_status_rejects_out_of_range_values() {
    assert!(serde_json::from_str::<LikeStatus>("2").is_err());
    assert!(serde_json::from_str::<LikeStatus>("-2").is_err());
}

#[test]
fn like_status_defaults_to_neutral() {
    assert_eq!(LikeStatus::default(), LikeStatus::Neutral);
}

// =============================================================
// List payloads
// =============================================================

#[test]
fn video_summary_deserializes_a_catalog_row() {
    let json = r#"{
        "id": 3,
        "title": "Intro",
        "description": "First upload",
        "thumbnail_url": "/thumbnails/intro.png",
        "user_id": 9,
        "views": 120,
        "likes": 4,
        "dislikes": 1,
        "upload_date": "2024-05-01T10:00:00.000Z"
    }"#;
    let video: VideoSummary = serde_json::from_str(json).unwrap();
    assert_eq!(video.id, 3);
    assert_eq!(video.user_id, Some(9));
    assert_eq!(video.views, 120);
    assert_eq!(video.watched_at, None);
}

#[test]
fn video_summary_accepts_counts_encoded_as_floats() {
    let json = r#"{
        "id": 3,
        "title": "Intro",
        "thumbnail_url": "/thumbnails/intro.png",
        "views": 120.0,
        "likes": 4.0,
        "dislikes": 0.0
    }"#;
    let video: VideoSummary = serde_json::from_str(json).unwrap();
    assert_eq!(video.views, 120);
    assert_eq!(video.likes, 4);
}

#[test]
fn video_summary_rejects_fractional_counts() {
    let json = r#"{
        "id": 3,
        "title": "Intro",
        "thumbnail_url": "/thumbnails/intro.png",
        "views": 120.5
    }"#;
    assert!(serde_json::from_str::<VideoSummary>(json).is_err());
}

#[test]
fn video_summary_defaults_optional_fields() {
    let json = r#"{
        "id": 3,
        "title": "Intro",
        "thumbnail_url": "/thumbnails/intro.png"
    }"#;
    let video: VideoSummary = serde_json::from_str(json).unwrap();
    assert_eq!(video.description, "");
    assert_eq!(video.user_id, None);
    assert_eq!(video.views, 0);
    assert_eq!(video.upload_date, None);
}

#[test]
fn history_rows_carry_their_watched_timestamp() {
    let json = r#"{
        "id": 3,
        "title": "Intro",
        "thumbnail_url": "/thumbnails/intro.png",
        "watched_at": "2024-06-02T08:30:00.000Z"
    }"#;
    let video: VideoSummary = serde_json::from_str(json).unwrap();
    assert_eq!(video.watched_at.as_deref(), Some("2024-06-02T08:30:00.000Z"));
}

// =============================================================
// Watch payload
// =============================================================

fn watch_payload_json(user_like_status: &str) -> String {
    format!(
        r#"{{
            "videoDetails": {{
                "video": {{
                    "id": 3,
                    "title": "Intro",
                    "description": "First upload",
                    "video_url": "/videos/intro.mp4",
                    "thumbnail_url": "/thumbnails/intro.png",
                    "user_id": 9,
                    "views": 121,
                    "upload_date": "2024-05-01T10:00:00.000Z"
                }},
                "likes": 4,
                "dislikes": 1,
                "userLikeStatus": {user_like_status},
                "comments": [
                    {{
                        "id": 11,
                        "user_id": 5,
                        "username": "bob",
                        "profile_pic_url": null,
                        "comment": "Nice one",
                        "upload_date": "2024-05-02T12:00:00.000Z"
                    }}
                ],
                "user": {{"id": 9, "username": "alice", "profile_pic_url": "/profile_pics/alice.png"}}
            }},
            "randomVideos": [
                {{"id": 4, "title": "Next", "thumbnail_url": "/thumbnails/next.png"}}
            ]
        }}"#
    )
}

#[test]
fn watch_payload_deserializes_camel_case_keys() {
    let payload: WatchPayload = serde_json::from_str(&watch_payload_json("1")).unwrap();
    assert_eq!(payload.video_details.video.id, 3);
    assert_eq!(payload.video_details.likes, 4);
    assert_eq!(payload.video_details.viewer_like_status, Some(LikeStatus::Liked));
    assert_eq!(payload.video_details.comments.len(), 1);
    assert_eq!(payload.video_details.comments[0].username, "bob");
    assert_eq!(payload.related.len(), 1);
}

#[test]
fn watch_payload_treats_null_like_status_as_absent() {
    let payload: WatchPayload = serde_json::from_str(&watch_payload_json("null")).unwrap();
    assert_eq!(payload.video_details.viewer_like_status, None);
}

#[test]
fn watch_payload_tolerates_a_missing_related_rail() {
    let json = r#"{
        "videoDetails": {
            "video": {
                "id": 3,
                "title": "Intro",
                "video_url": "/videos/intro.mp4",
                "thumbnail_url": "/thumbnails/intro.png"
            },
            "likes": 0,
            "dislikes": 0
        }
    }"#;
    let payload: WatchPayload = serde_json::from_str(json).unwrap();
    assert!(payload.related.is_empty());
    assert_eq!(payload.video_details.viewer_like_status, None);
    assert!(payload.video_details.comments.is_empty());
    assert_eq!(payload.video_details.user, None);
}

// =============================================================
// Profile payload
// =============================================================

#[test]
fn profile_payload_maps_the_misspelled_background_column() {
    let json = r#"{
        "userDetail": [{
            "id": 9,
            "username": "alice",
            "email": "alice@example.com",
            "created_at": "2024-01-15T09:00:00.000Z",
            "profile_pic_url": "/profile_pics/alice.png",
            "backround_pic_url": "/background_pics/alice-banner.png"
        }],
        "userVideos": [
            {"id": 3, "title": "Intro", "thumbnail_url": "/thumbnails/intro.png"}
        ]
    }"#;
    let payload: ProfilePayload = serde_json::from_str(json).unwrap();
    let profile = &payload.user_detail[0];
    assert_eq!(profile.username, "alice");
    assert_eq!(
        profile.background_pic_url.as_deref(),
        Some("/background_pics/alice-banner.png")
    );
    assert_eq!(payload.user_videos.len(), 1);
}

#[test]
fn profile_payload_tolerates_an_empty_detail_array() {
    let json = r#"{"userDetail": []}"#;
    let payload: ProfilePayload = serde_json::from_str(json).unwrap();
    assert!(payload.user_detail.is_empty());
    assert!(payload.user_videos.is_empty());
}

// =============================================================
// Envelope and auth payloads
// =============================================================

#[test]
fn envelope_unwraps_the_data_key() {
    let json = r#"{"data": {"user": {"id": 9, "username": "alice"}}}"#;
    let envelope: Envelope<LoginData> = serde_json::from_str(json).unwrap();
    assert_eq!(envelope.data.user.id, 9);
    assert_eq!(envelope.data.user.username, "alice");
}

#[test]
fn register_payload_is_a_bare_auth_user() {
    let json = r#"{"data": {"id": 12, "username": "carol"}}"#;
    let envelope: Envelope<AuthUser> = serde_json::from_str(json).unwrap();
    assert_eq!(envelope.data.id, 12);
}

#[test]
fn error_body_message_defaults_to_none() {
    let body: ErrorBody = serde_json::from_str("{}").unwrap();
    assert_eq!(body.message, None);

    let body: ErrorBody = serde_json::from_str(r#"{"message": "No video found"}"#).unwrap();
    assert_eq!(body.message.as_deref(), Some("No video found"));
}
