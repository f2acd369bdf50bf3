//! User profile and preference operations.

use folio_types::{ApiError, Preferences, UserProfile};
use serde::{Deserialize, Serialize};

use crate::FolioClient;
use crate::error::map_reqwest_error;

/// The backend nests preference maps under a `preferences` key.
#[derive(Debug, Serialize, Deserialize)]
struct PreferencesEnvelope {
    preferences: Preferences,
}

impl FolioClient {
    /// Fetch the authenticated user's profile.
    pub async fn profile(&self) -> Result<UserProfile, ApiError> {
        let token = self.bearer()?;
        let url = self.url("/api/users/profile");
        self.send_json(self.http.get(&url).bearer_auth(token)).await
    }

    /// Change the authenticated user's display name.
    pub async fn update_profile(&self, username: &str) -> Result<UserProfile, ApiError> {
        let token = self.bearer()?;
        let url = self.url("/api/users/profile");
        let body = serde_json::json!({ "username": username });
        self.send_json(self.http.put(&url).bearer_auth(token).json(&body))
            .await
    }

    /// Fetch the authenticated user's preference map.
    pub async fn preferences(&self) -> Result<Preferences, ApiError> {
        let token = self.bearer()?;
        let url = self.url("/api/users/preferences");
        let envelope: PreferencesEnvelope =
            self.send_json(self.http.get(&url).bearer_auth(token)).await?;
        Ok(envelope.preferences)
    }

    /// Replace the authenticated user's preference map.
    pub async fn update_preferences(&self, preferences: Preferences) -> Result<Preferences, ApiError> {
        let token = self.bearer()?;
        let url = self.url("/api/users/preferences");
        let envelope: PreferencesEnvelope = self
            .send_json(
                self.http
                    .put(&url)
                    .bearer_auth(token)
                    .json(&PreferencesEnvelope { preferences }),
            )
            .await?;
        Ok(envelope.preferences)
    }

    /// Upload a profile picture.
    pub async fn upload_avatar(&self, filename: &str, content: Vec<u8>) -> Result<(), ApiError> {
        let token = self.bearer()?;
        let url = self.url("/api/users/avatar");
        let part = reqwest::multipart::Part::bytes(content)
            .file_name(filename.to_owned())
            .mime_str("image/jpeg")
            .map_err(map_reqwest_error)?;
        let form = reqwest::multipart::Form::new().part("file", part);
        self.send(self.http.post(&url).bearer_auth(token).multipart(form))
            .await?;
        Ok(())
    }
}
