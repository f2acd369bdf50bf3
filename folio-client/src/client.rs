//! Client struct, builder, and shared request plumbing.

use folio_types::{ApiError, Session};
use serde::de::DeserializeOwned;

use crate::error::{map_http_status, map_reqwest_error};

/// Default backend base URL for local development.
const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Client for the folio backend.
///
/// Holds the base URL, an optional [`Session`], and one shared
/// [`reqwest::Client`] reused across all operations. The session is attached
/// explicitly — there is no ambient token storage — so a client without a
/// session can only call the unauthenticated auth operations, and everything
/// else fails fast with [`ApiError::MissingAuth`] before any network I/O.
///
/// # Example
///
/// ```no_run
/// use folio_client::FolioClient;
///
/// # async fn run() -> Result<(), folio_client::ApiError> {
/// let client = FolioClient::new("https://folio.example.com");
/// let session = client.login("ada@example.com", "hunter2").await?;
/// let client = client.with_session(session);
/// # Ok(())
/// # }
/// ```
pub struct FolioClient {
    /// Backend base URL, no trailing slash.
    pub(crate) base_url: String,
    /// The authenticated session, if any.
    pub(crate) session: Option<Session>,
    /// Shared HTTP client.
    pub(crate) http: reqwest::Client,
}

impl FolioClient {
    /// Create a client for the given base URL, without a session.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            session: None,
            http: reqwest::Client::new(),
        }
    }

    /// Create a client for `http://localhost:8080`.
    #[must_use]
    pub fn localhost() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }

    /// Attach an authenticated session.
    #[must_use]
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = Some(session);
        self
    }

    /// Override the HTTP client (custom timeouts, proxies, test transports).
    #[must_use]
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    /// The attached session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// The bearer token, or [`ApiError::MissingAuth`] when no session is
    /// attached. Every authenticated operation goes through this gate before
    /// touching the network.
    pub(crate) fn bearer(&self) -> Result<&str, ApiError> {
        self.session
            .as_ref()
            .map(Session::token)
            .ok_or(ApiError::MissingAuth)
    }

    /// Join a path onto the base URL.
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Send a request, mapping transport errors and non-2xx statuses.
    pub(crate) async fn send(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, ApiError> {
        let response = request.send().await.map_err(map_reqwest_error)?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.map_err(map_reqwest_error)?;
            return Err(map_http_status(status, &body));
        }
        Ok(response)
    }

    /// Send a request and decode the JSON response body.
    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = self.send(request).await?;
        let text = response.text().await.map_err(map_reqwest_error)?;
        serde_json::from_str(&text).map_err(|e| ApiError::Decode(format!("invalid JSON response: {e}")))
    }
}
