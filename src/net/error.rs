//! Error taxonomy for API calls.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// Why an API call failed, from the caller's point of view.
///
/// `Auth` doubles as a signal that the centralized 401/403 handling already
/// cleared the session and started the redirect to the login screen; pages
/// usually stop painting rather than display it.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// No usable session, or the server rejected the bearer token.
    #[error("authentication required")]
    Auth,
    /// Non-success HTTP response; `message` is ready to show as-is.
    #[error("{message}")]
    Server { status: u16, message: String },
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// A response arrived but its body did not match the wire schema.
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build [`ApiError::Server`] from a status code and the server's
    /// optional message, falling back to a generic line when the body
    /// carried nothing usable.
    pub fn server(status: u16, message: Option<&str>) -> Self {
        let message = match message {
            Some(text) if !text.trim().is_empty() => text.to_owned(),
            _ => format!("request failed with status {status}"),
        };
        Self::Server { status, message }
    }
}
