//! Directory error types.

use thiserror::Error;
use tonal_core::errors::CoreError;

/// Errors that can occur when talking to the Twitter API.
#[derive(Debug, Error)]
pub enum TwitterError {
    /// HTTP transport error (connect, timeout, TLS).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API rejected the bearer token.
    #[error("unauthorized ({status}): check TWITTER_BEARER_TOKEN")]
    Unauthorized {
        /// 401 or 403.
        status: u16,
    },

    /// The API returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the API.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The API returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// The API answered 200 with a problem object instead of data.
    #[error("{title}: {detail}")]
    Upstream { title: String, detail: String },

    /// The response body is missing expected fields or is not valid JSON.
    #[error("malformed upstream response from {endpoint}: {reason}")]
    MalformedResponse { endpoint: String, reason: String },

    /// Local validation failed before any request was sent.
    #[error(transparent)]
    Invalid(#[from] CoreError),
}
