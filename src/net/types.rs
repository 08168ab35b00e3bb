//! Wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON payloads, which wrap everything in
//! a `{ "data": ... }` envelope and mix snake_case columns with a few
//! camelCase aggregate keys. The quirks stay at this boundary: serde renames
//! cover the camelCase keys (and one long-lived column typo), and the
//! tolerant number decoder accepts counts that arrive as JSON floats.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Standard success envelope around every JSON payload.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

/// Body shape of a non-success response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// Viewer's recorded reaction to a video.
///
/// On the wire this is a signed integer: `1` like, `0` neutral, `-1`
/// dislike.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "i8", try_from = "i8")]
pub enum LikeStatus {
    Liked,
    #[default]
    Neutral,
    Disliked,
}

impl From<LikeStatus> for i8 {
    fn from(status: LikeStatus) -> Self {
        match status {
            LikeStatus::Liked => 1,
            LikeStatus::Neutral => 0,
            LikeStatus::Disliked => -1,
        }
    }
}

impl TryFrom<i8> for LikeStatus {
    type Error = String;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Liked),
            0 => Ok(Self::Neutral),
            -1 => Ok(Self::Disliked),
            other => Err(format!("like status out of range: {other}")),
        }
    }
}

/// One video as it appears in list payloads (catalog, recommendations,
/// profile uploads, history, liked).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VideoSummary {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub thumbnail_url: String,
    /// Uploader id; some list payloads omit it.
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_i64_from_number")]
    pub views: i64,
    #[serde(default, deserialize_with = "deserialize_i64_from_number")]
    pub likes: i64,
    #[serde(default, deserialize_with = "deserialize_i64_from_number")]
    pub dislikes: i64,
    #[serde(default)]
    pub upload_date: Option<String>,
    /// Set only by the history endpoint.
    #[serde(default)]
    pub watched_at: Option<String>,
    /// Set only by the liked-videos endpoint.
    #[serde(default)]
    pub liked_at: Option<String>,
}

/// Full video row as returned inside the watch payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VideoRecord {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub video_url: String,
    pub thumbnail_url: String,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_i64_from_number")]
    pub views: i64,
    #[serde(default)]
    pub upload_date: Option<String>,
}

/// One comment under a video.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub user_id: i64,
    pub username: String,
    #[serde(default)]
    pub profile_pic_url: Option<String>,
    pub comment: String,
    #[serde(default)]
    pub upload_date: Option<String>,
}

/// The uploader block inside the watch payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Uploader {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub profile_pic_url: Option<String>,
}

/// Aggregated detail block for one video: the row itself, reaction counts,
/// the viewer's own reaction, comments, and the uploader.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VideoDetail {
    pub video: VideoRecord,
    #[serde(default, deserialize_with = "deserialize_i64_from_number")]
    pub likes: i64,
    #[serde(default, deserialize_with = "deserialize_i64_from_number")]
    pub dislikes: i64,
    /// Absent or `null` for signed-out viewers.
    #[serde(rename = "userLikeStatus", default)]
    pub viewer_like_status: Option<LikeStatus>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub user: Option<Uploader>,
}

/// Payload of the watch endpoint: the requested video plus a related rail.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WatchPayload {
    #[serde(rename = "videoDetails")]
    pub video_details: VideoDetail,
    #[serde(rename = "randomVideos", default)]
    pub related: Vec<VideoSummary>,
}

/// One user's profile row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub profile_pic_url: Option<String>,
    /// The column has carried this typo since the first schema migration;
    /// renaming it here keeps the wire format untouched.
    #[serde(rename = "backround_pic_url", default)]
    pub background_pic_url: Option<String>,
}

/// Payload of the profile endpoint. `userDetail` arrives as a one-element
/// array.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProfilePayload {
    #[serde(rename = "userDetail")]
    pub user_detail: Vec<UserProfile>,
    #[serde(rename = "userVideos", default)]
    pub user_videos: Vec<VideoSummary>,
}

/// The user block returned by the auth endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    pub username: String,
}

/// Login payload: the user sits one level down.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginData {
    pub user: AuthUser,
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let serde_json::Value::Number(number) = value else {
        return Err(D::Error::custom(format!("expected a number, got {value}")));
    };
    if let Some(int) = number.as_i64() {
        return Ok(int);
    }
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    if let Some(float) = number.as_f64()
        && float.is_finite()
        && float.fract() == 0.0
        && float >= i64::MIN as f64
        && float <= i64::MAX as f64
    {
        return Ok(float as i64);
    }
    Err(D::Error::custom(format!("number {number} is not a whole i64")))
}
