use thiserror::Error;

/// Errors from talking to the Unsplash API.
///
/// The UI never shows these directly. Each one is logged to stderr and the
/// user sees one of the static banner messages instead.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport, TLS, or body-decode failure
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API answered with a non-success status (bad key, rate limit, ...)
    #[error("unexpected HTTP status: {0}")]
    Status(reqwest::StatusCode),
}
