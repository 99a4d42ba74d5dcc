//! Error types for HTTP operations and notification delivery.

use thiserror::Error;

/// Error type for HTTP operations.
///
/// Describes what went wrong at the transport level. None of these are
/// retried locally; they are reported to the caller as-is.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, connection refused,
    /// TLS failures and other network-level errors.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out.
    ///
    /// No complete response arrived within the configured timeout.
    #[error("Request timed out")]
    Timeout,

    /// The provided URL is invalid.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Error type for delivering a notification.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// The request never produced a response.
    #[error("api request: {0}")]
    Http(#[from] HttpError),

    /// The API answered with something other than 200 OK.
    #[error("got status \"{status}\", expected 200 ok, body {body:?}")]
    NonSuccessStatus {
        /// HTTP status code
        status: http::StatusCode,
        /// Leading part of the response body, lossily decoded
        body: String,
    },
}

impl NotifyError {
    /// Returns true if the request failed because the timeout elapsed.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Http(HttpError::Timeout))
    }
}
