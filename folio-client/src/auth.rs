//! Auth operations: registration, login, token verification.

use folio_types::{ApiError, Session, UserProfile};
use serde::Deserialize;

use crate::FolioClient;

/// Wire shape of a successful login.
#[derive(Debug, Deserialize)]
struct LoginResponse {
    access_token: String,
    #[allow(dead_code)]
    token_type: String,
    user: UserProfile,
}

impl FolioClient {
    /// Register a new account. Does not log in — call [`login`](Self::login)
    /// afterwards.
    pub async fn register(
        &self,
        email: &str,
        username: &str,
        password: &str,
    ) -> Result<UserProfile, ApiError> {
        let url = self.url("/api/auth/register");
        let body = serde_json::json!({
            "email": email,
            "username": username,
            "password": password,
        });
        self.send_json(self.http.post(&url).json(&body)).await
    }

    /// Exchange credentials for a [`Session`].
    ///
    /// The session is returned to the caller rather than stored: attach it
    /// with [`with_session`](Self::with_session), and drop it at logout.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, ApiError> {
        let url = self.url("/api/auth/login");
        let body = serde_json::json!({ "email": email, "password": password });
        let response: LoginResponse = self.send_json(self.http.post(&url).json(&body)).await?;
        Ok(Session::new(response.access_token, response.user))
    }

    /// Check that the attached session's token is still accepted by the
    /// backend, returning the user it belongs to.
    pub async fn verify_session(&self) -> Result<UserProfile, ApiError> {
        let token = self.bearer()?;
        let url = self.url("/api/auth/check-auth");
        self.send_json(self.http.get(&url).bearer_auth(token)).await
    }
}
