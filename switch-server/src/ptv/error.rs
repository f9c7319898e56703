//! Feed client error types.

/// Errors from the PTV HTTP client.
///
/// Every variant means the board could not be obtained; callers treat them
/// all as "feed unavailable" and fail the request.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not the expected JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// API returned an error status code
    #[error("PTV API error: {status} {message}")]
    Api { status: u16, message: String },

    /// Credentials were rejected
    #[error("unauthorized: check PTV_DEVID and PTV_KEY")]
    Unauthorized,

    /// A departure carried a timestamp we could not parse
    #[error("invalid departure time: {0}")]
    InvalidTime(String),

    /// The client's request limiter was shut down
    #[error("client closed")]
    Closed,
}
