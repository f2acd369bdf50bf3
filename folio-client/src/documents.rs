//! Document store operations: list, fetch, upload, thumbnails, delete, rename.

use std::time::Duration;

use bytes::Bytes;
use folio_types::{ApiError, Document};

use crate::FolioClient;
use crate::error::map_reqwest_error;

/// Thumbnail fetches are bounded: the backend renders them lazily, so first
/// requests can be slow or transiently fail while the render completes.
const THUMBNAIL_TIMEOUT: Duration = Duration::from_secs(10);
const THUMBNAIL_ATTEMPTS: u32 = 3;
const THUMBNAIL_BACKOFF: Duration = Duration::from_millis(250);

impl FolioClient {
    /// List stored documents, newest first.
    pub async fn list_documents(&self, skip: usize, limit: usize) -> Result<Vec<Document>, ApiError> {
        let token = self.bearer()?;
        let url = self.url(&format!("/api/pdfs/?skip={skip}&limit={limit}"));
        self.send_json(self.http.get(&url).bearer_auth(token)).await
    }

    /// Fetch the raw PDF bytes of a document.
    pub async fn fetch_document(&self, document_id: &str) -> Result<Bytes, ApiError> {
        let token = self.bearer()?;
        let url = self.url(&format!("/api/pdfs/{document_id}"));
        let response = self.send(self.http.get(&url).bearer_auth(token)).await?;
        response.bytes().await.map_err(map_reqwest_error)
    }

    /// Upload a PDF. The backend queues it for indexing and returns the
    /// stored record, initially with `processing_status: pending`.
    pub async fn upload_document(
        &self,
        title: &str,
        filename: &str,
        content: Vec<u8>,
    ) -> Result<Document, ApiError> {
        let token = self.bearer()?;
        let url = self.url("/api/pdfs/");

        let part = reqwest::multipart::Part::bytes(content)
            .file_name(filename.to_owned())
            .mime_str("application/pdf")
            .map_err(map_reqwest_error)?;
        let form = reqwest::multipart::Form::new()
            .text("title", title.to_owned())
            .part("file", part);

        tracing::debug!(url = %url, title = %title, "uploading document");

        self.send_json(self.http.post(&url).bearer_auth(token).multipart(form))
            .await
    }

    /// Fetch a document's rendered thumbnail (JPEG bytes).
    ///
    /// Retries transient failures up to two times with doubling backoff;
    /// terminal errors (auth, not-found) return immediately.
    pub async fn fetch_thumbnail(&self, document_id: &str) -> Result<Bytes, ApiError> {
        let token = self.bearer()?;
        let url = self.url(&format!("/api/pdfs/{document_id}/thumbnail"));

        let mut attempt = 1;
        let mut delay = THUMBNAIL_BACKOFF;
        loop {
            let request = self
                .http
                .get(&url)
                .bearer_auth(token)
                .timeout(THUMBNAIL_TIMEOUT);
            let result = match self.send(request).await {
                Ok(response) => response.bytes().await.map_err(map_reqwest_error),
                Err(err) => Err(err),
            };
            match result {
                Ok(bytes) => return Ok(bytes),
                Err(err) if attempt < THUMBNAIL_ATTEMPTS && err.is_retryable() => {
                    tracing::warn!(document = %document_id, attempt, error = %err, "thumbnail fetch failed, retrying");
                    tokio::time::sleep(delay).await;
                    delay *= 2;
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// Delete a document and everything attached to it.
    pub async fn delete_document(&self, document_id: &str) -> Result<(), ApiError> {
        let token = self.bearer()?;
        let url = self.url(&format!("/api/pdfs/{document_id}"));
        self.send(self.http.delete(&url).bearer_auth(token)).await?;
        Ok(())
    }

    /// Change a document's title. Returns the updated record.
    pub async fn rename_document(&self, document_id: &str, title: &str) -> Result<Document, ApiError> {
        let token = self.bearer()?;
        let url = self.url(&format!("/api/pdfs/{document_id}"));
        let body = serde_json::json!({ "title": title });
        self.send_json(self.http.patch(&url).bearer_auth(token).json(&body))
            .await
    }
}
