//! Error types for the folio client crates.

use std::time::Duration;

/// Errors from client API operations.
///
/// Mid-stream failures are not represented here: once a chat stream is open,
/// transport and server errors arrive as a terminal
/// [`StreamEvent::Error`](crate::StreamEvent::Error) on the stream itself.
/// An `Err` from a stream-open call therefore always means the stream never
/// produced a byte, and the caller may fall back to the non-streaming path.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// No session is attached to the client. Raised before any network I/O.
    #[error("no session: authenticate before calling this operation")]
    MissingAuth,

    // Retryable errors
    /// Network-level error (connection reset, DNS failure, etc.).
    #[error("network error: {0}")]
    Network(#[source] Box<dyn std::error::Error + Send + Sync>),
    /// Rate limited by the backend.
    #[error("rate limited, retry after {retry_after:?}")]
    RateLimit {
        /// Suggested retry delay, if provided by the API.
        retry_after: Option<Duration>,
    },
    /// Request timed out.
    #[error("timeout after {0:?}")]
    Timeout(Duration),
    /// Backend is temporarily unavailable.
    #[error("service unavailable: {0}")]
    ServiceUnavailable(String),

    // Terminal errors
    /// The bearer token was rejected.
    #[error("authentication failed: {0}")]
    Authentication(String),
    /// Malformed or invalid request.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    /// The document, note, or highlight does not exist.
    #[error("not found: {0}")]
    NotFound(String),
    /// A response body could not be decoded.
    #[error("decode error: {0}")]
    Decode(String),
}

impl ApiError {
    /// Whether this error is likely transient and the request can be retried.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Network(_)
                | Self::RateLimit { .. }
                | Self::Timeout(_)
                | Self::ServiceUnavailable(_)
        )
    }
}
