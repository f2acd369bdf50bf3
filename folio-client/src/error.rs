//! Internal helpers mapping HTTP/reqwest errors to [`ApiError`].

use std::time::Duration;

use folio_types::ApiError;

/// Map an HTTP status code from the backend to an [`ApiError`].
pub(crate) fn map_http_status(status: reqwest::StatusCode, body: &str) -> ApiError {
    match status.as_u16() {
        401 => ApiError::Authentication(body.to_string()),
        400 => ApiError::InvalidRequest(body.to_string()),
        404 => ApiError::NotFound(body.to_string()),
        // The backend does not put a retry delay in the body; that comes in
        // the Retry-After header, which callers with header access can use.
        429 => ApiError::RateLimit { retry_after: None },
        500..=599 => ApiError::ServiceUnavailable(body.to_string()),
        _ => ApiError::InvalidRequest(format!("HTTP {status}: {body}")),
    }
}

/// Map a [`reqwest::Error`] to an [`ApiError`].
pub(crate) fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        // Generic 30-second duration; the configured timeout is not tracked here
        ApiError::Timeout(Duration::from_secs(30))
    } else {
        ApiError::Network(Box::new(err))
    }
}
