//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Server-side (SSR):
//! stubs returning errors, since every endpoint here is only meaningful in
//! the browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module is the only place that builds requests. It attaches the
//! bearer token from the session propagator, and it owns the one response to
//! a rejected token: any 401/403 on an authenticated request clears the
//! session and redirects to the login screen. Pages never re-implement
//! either concern.
//!
//! ERROR HANDLING
//! ==============
//! Everything funnels into [`ApiError`]. Server-sent messages are preserved
//! so pages can show them verbatim; transport and decode failures get their
//! own variants so logs stay diagnosable.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{AuthUser, LikeStatus, ProfilePayload, VideoSummary, WatchPayload};

#[cfg(feature = "hydrate")]
use gloo_net::http::{Request, Response};

#[cfg(feature = "hydrate")]
use super::types::{Envelope, ErrorBody, LoginData};

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// Token as carried in an `Authorization` response header, with the scheme
/// prefix removed case-insensitively.
#[cfg(any(test, feature = "hydrate"))]
fn strip_bearer_prefix(header: &str) -> &str {
    let trimmed = header.trim();
    trimmed
        .get(..7)
        .filter(|prefix| prefix.eq_ignore_ascii_case("bearer "))
        .map_or(trimmed, |_| trimmed[7..].trim_start())
}

#[cfg(any(test, feature = "hydrate"))]
fn is_auth_failure(status: u16) -> bool {
    matches!(status, 401 | 403)
}

#[cfg(any(test, feature = "hydrate"))]
fn video_detail_endpoint(video_id: i64) -> String {
    format!("/api/video/me/{video_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn video_delete_endpoint(video_id: i64) -> String {
    format!("/api/video/delete/{video_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn profile_endpoint(user_id: Option<i64>) -> String {
    user_id.map_or_else(
        || "/api/profile/".to_owned(),
        |id| format!("/api/profile?user_id={id}"),
    )
}

#[cfg(feature = "hydrate")]
fn require_token() -> Result<String, ApiError> {
    crate::session::current()
        .map(|session| session.token)
        .ok_or(ApiError::Auth)
}

#[cfg(feature = "hydrate")]
fn net_error(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

#[cfg(not(feature = "hydrate"))]
fn server_unavailable() -> ApiError {
    ApiError::Network("not available during server rendering".to_owned())
}

/// A bearer token was rejected. Drop the session (which notifies the navbar
/// and guards synchronously) and hand the tab to the login screen.
#[cfg(feature = "hydrate")]
fn force_logout() {
    log::warn!("bearer token rejected; clearing session");
    crate::session::clear();
    crate::util::guard::redirect_to_login();
}

/// Map a non-success response to an [`ApiError`], applying the forced
/// logout when an authenticated request came back 401/403.
#[cfg(feature = "hydrate")]
async fn failure(resp: Response, authed: bool) -> ApiError {
    if authed && is_auth_failure(resp.status()) {
        force_logout();
        return ApiError::Auth;
    }
    let message = resp
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message);
    ApiError::server(resp.status(), message.as_deref())
}

#[cfg(feature = "hydrate")]
async fn expect_data<T: serde::de::DeserializeOwned>(
    resp: Response,
    authed: bool,
) -> Result<T, ApiError> {
    if !resp.ok() {
        return Err(failure(resp, authed).await);
    }
    resp.json::<Envelope<T>>()
        .await
        .map(|envelope| envelope.data)
        .map_err(|err| ApiError::Decode(err.to_string()))
}

#[cfg(feature = "hydrate")]
async fn expect_ok(resp: Response, authed: bool) -> Result<(), ApiError> {
    if resp.ok() {
        Ok(())
    } else {
        Err(failure(resp, authed).await)
    }
}

// =============================================================
// Auth
// =============================================================

/// Sign in with email and password via `POST /api/auth/login`.
///
/// The bearer token travels in the `Authorization` response header; the
/// body carries the user record.
///
/// # Errors
///
/// Returns an error if the request fails, the credentials are rejected, or
/// the response is missing the token or user payload.
pub async fn login(email: &str, password: &str) -> Result<(String, AuthUser), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = Request::post("/api/auth/login")
            .json(&payload)
            .map_err(net_error)?
            .send()
            .await
            .map_err(net_error)?;
        if !resp.ok() {
            return Err(failure(resp, false).await);
        }
        let token = resp
            .headers()
            .get("authorization")
            .map(|header| strip_bearer_prefix(&header).to_owned())
            .filter(|token| !token.is_empty())
            .ok_or_else(|| {
                ApiError::Decode("login response carried no authorization header".to_owned())
            })?;
        let body: Envelope<LoginData> = resp
            .json()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))?;
        Ok((token, body.data.user))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(server_unavailable())
    }
}

/// Create an account via `POST /api/auth/register`.
///
/// Newer backends issue the bearer token straight from this endpoint;
/// older ones only issue it at login, so the token slot may come back
/// `None` and callers fall back to [`login`].
///
/// # Errors
///
/// Returns an error if the request fails, the server rejects the fields, or
/// the user payload cannot be decoded.
pub async fn register(
    username: &str,
    email: &str,
    password: &str,
) -> Result<(Option<String>, AuthUser), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({
            "username": username,
            "email": email,
            "password": password,
        });
        let resp = Request::post("/api/auth/register")
            .json(&payload)
            .map_err(net_error)?
            .send()
            .await
            .map_err(net_error)?;
        if !resp.ok() {
            return Err(failure(resp, false).await);
        }
        let token = resp
            .headers()
            .get("authorization")
            .map(|header| strip_bearer_prefix(&header).to_owned())
            .filter(|token| !token.is_empty());
        let body: Envelope<AuthUser> = resp
            .json()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))?;
        Ok((token, body.data))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, email, password);
        Err(server_unavailable())
    }
}

/// Permanently delete the signed-in account via `DELETE /api/auth/delete`.
///
/// # Errors
///
/// Returns an error if there is no session or the server refuses.
pub async fn delete_account() -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let token = require_token()?;
        let resp = Request::delete("/api/auth/delete")
            .header("Authorization", &bearer_header(&token))
            .send()
            .await
            .map_err(net_error)?;
        expect_ok(resp, true).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(server_unavailable())
    }
}

// =============================================================
// Videos
// =============================================================

/// Fetch the public catalog via `GET /api/video/`. No session required.
///
/// # Errors
///
/// Returns an error if the request fails or the payload cannot be decoded.
pub async fn fetch_videos() -> Result<Vec<VideoSummary>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = Request::get("/api/video/").send().await.map_err(net_error)?;
        expect_data(resp, false).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(server_unavailable())
    }
}

/// Fetch personalized recommendations via `GET /api/video/me`.
///
/// # Errors
///
/// Returns an error if there is no session, the request fails, or the
/// payload cannot be decoded.
pub async fn fetch_recommended() -> Result<Vec<VideoSummary>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let token = require_token()?;
        let resp = Request::get("/api/video/me")
            .header("Authorization", &bearer_header(&token))
            .send()
            .await
            .map_err(net_error)?;
        expect_data(resp, true).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(server_unavailable())
    }
}

/// Fetch one video's watch payload via `GET /api/video/me/{id}`.
///
/// Works signed out; the bearer token is attached when present so the
/// response can include the viewer's own reaction.
///
/// # Errors
///
/// Returns an error if the request fails or the payload cannot be decoded.
pub async fn fetch_video_detail(video_id: i64) -> Result<WatchPayload, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let token = crate::session::current().map(|session| session.token);
        let mut builder = Request::get(&video_detail_endpoint(video_id));
        if let Some(token) = token.as_deref() {
            builder = builder.header("Authorization", &bearer_header(token));
        }
        let resp = builder.send().await.map_err(net_error)?;
        expect_data(resp, token.is_some()).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = video_id;
        Err(server_unavailable())
    }
}

/// Upload a new video via `POST /api/video/upload` as multipart fields
/// `title`, `description`, `video`, and `thumbnail`.
///
/// # Errors
///
/// Returns an error if there is no session, the form cannot be assembled,
/// or the server refuses the upload.
#[cfg(feature = "hydrate")]
pub async fn upload_video(
    title: &str,
    description: &str,
    video: &web_sys::File,
    thumbnail: &web_sys::File,
) -> Result<(), ApiError> {
    let token = require_token()?;
    let form = web_sys::FormData::new().map_err(|_| form_error())?;
    form.append_with_str("title", title).map_err(|_| form_error())?;
    form.append_with_str("description", description)
        .map_err(|_| form_error())?;
    form.append_with_blob("video", video).map_err(|_| form_error())?;
    form.append_with_blob("thumbnail", thumbnail)
        .map_err(|_| form_error())?;
    let resp = Request::post("/api/video/upload")
        .header("Authorization", &bearer_header(&token))
        .body(form)
        .map_err(net_error)?
        .send()
        .await
        .map_err(net_error)?;
    expect_ok(resp, true).await
}

/// Delete one of the viewer's videos via `DELETE /api/video/delete/{id}`.
///
/// # Errors
///
/// Returns an error if there is no session or the server refuses.
pub async fn delete_video(video_id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let token = require_token()?;
        let resp = Request::delete(&video_delete_endpoint(video_id))
            .header("Authorization", &bearer_header(&token))
            .send()
            .await
            .map_err(net_error)?;
        expect_ok(resp, true).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = video_id;
        Err(server_unavailable())
    }
}

// =============================================================
// Reactions, comments, history
// =============================================================

/// Record a watch event via `POST /api/history/`.
///
/// # Errors
///
/// Returns an error if there is no session or the server refuses.
pub async fn record_watch(video_id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let token = require_token()?;
        let payload = serde_json::json!({ "video_id": video_id });
        let resp = Request::post("/api/history/")
            .header("Authorization", &bearer_header(&token))
            .json(&payload)
            .map_err(net_error)?
            .send()
            .await
            .map_err(net_error)?;
        expect_ok(resp, true).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = video_id;
        Err(server_unavailable())
    }
}

/// Set the viewer's reaction via `POST /api/likes/`.
///
/// # Errors
///
/// Returns an error if there is no session or the server refuses.
pub async fn submit_like(video_id: i64, status: LikeStatus) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let token = require_token()?;
        let payload = serde_json::json!({ "video_id": video_id, "like_status": status });
        let resp = Request::post("/api/likes/")
            .header("Authorization", &bearer_header(&token))
            .json(&payload)
            .map_err(net_error)?
            .send()
            .await
            .map_err(net_error)?;
        expect_ok(resp, true).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (video_id, status);
        Err(server_unavailable())
    }
}

/// Post (or overwrite) the viewer's comment via `POST /api/comments/`.
///
/// # Errors
///
/// Returns an error if there is no session or the server refuses.
pub async fn post_comment(video_id: i64, comment: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let token = require_token()?;
        let payload = serde_json::json!({ "video_id": video_id, "comment": comment });
        let resp = Request::post("/api/comments/")
            .header("Authorization", &bearer_header(&token))
            .json(&payload)
            .map_err(net_error)?
            .send()
            .await
            .map_err(net_error)?;
        expect_ok(resp, true).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (video_id, comment);
        Err(server_unavailable())
    }
}

/// Fetch the viewer's watch history via `GET /api/history/me`.
///
/// # Errors
///
/// Returns an error if there is no session, the request fails, or the
/// payload cannot be decoded.
pub async fn fetch_history() -> Result<Vec<VideoSummary>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let token = require_token()?;
        let resp = Request::get("/api/history/me")
            .header("Authorization", &bearer_header(&token))
            .send()
            .await
            .map_err(net_error)?;
        expect_data(resp, true).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(server_unavailable())
    }
}

/// Fetch the viewer's liked videos via `GET /api/likes/me`.
///
/// # Errors
///
/// Returns an error if there is no session, the request fails, or the
/// payload cannot be decoded.
pub async fn fetch_liked() -> Result<Vec<VideoSummary>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let token = require_token()?;
        let resp = Request::get("/api/likes/me")
            .header("Authorization", &bearer_header(&token))
            .send()
            .await
            .map_err(net_error)?;
        expect_data(resp, true).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(server_unavailable())
    }
}

// =============================================================
// Profiles
// =============================================================

/// Fetch a profile via `GET /api/profile/` (the viewer's own) or
/// `GET /api/profile?user_id={id}` (anyone's).
///
/// # Errors
///
/// Returns an error if there is no session, the request fails, or the
/// payload cannot be decoded.
pub async fn fetch_profile(user_id: Option<i64>) -> Result<ProfilePayload, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let token = require_token()?;
        let resp = Request::get(&profile_endpoint(user_id))
            .header("Authorization", &bearer_header(&token))
            .send()
            .await
            .map_err(net_error)?;
        expect_data(resp, true).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user_id;
        Err(server_unavailable())
    }
}

/// Replace the viewer's profile picture via `PUT /api/profile/pic`.
///
/// # Errors
///
/// Returns an error if there is no session, the form cannot be assembled,
/// or the server refuses.
#[cfg(feature = "hydrate")]
pub async fn update_profile_pic(file: &web_sys::File) -> Result<(), ApiError> {
    put_picture("/api/profile/pic", "profile_pic", file).await
}

/// Replace the viewer's banner via `PUT /api/profile/background`.
///
/// # Errors
///
/// Returns an error if there is no session, the form cannot be assembled,
/// or the server refuses.
#[cfg(feature = "hydrate")]
pub async fn update_background_pic(file: &web_sys::File) -> Result<(), ApiError> {
    put_picture("/api/profile/background", "background_pic", file).await
}

#[cfg(feature = "hydrate")]
async fn put_picture(endpoint: &str, field: &str, file: &web_sys::File) -> Result<(), ApiError> {
    let token = require_token()?;
    let form = web_sys::FormData::new().map_err(|_| form_error())?;
    form.append_with_blob(field, file).map_err(|_| form_error())?;
    let resp = Request::put(endpoint)
        .header("Authorization", &bearer_header(&token))
        .body(form)
        .map_err(net_error)?
        .send()
        .await
        .map_err(net_error)?;
    expect_ok(resp, true).await
}

#[cfg(feature = "hydrate")]
fn form_error() -> ApiError {
    ApiError::Network("could not assemble multipart form".to_owned())
}
