//! Annotation store operations: notes and highlights, keyed by document.

use folio_types::{ApiError, Highlight, NewHighlight, NewNote, Note};

use crate::FolioClient;

impl FolioClient {
    /// List all notes on a document, oldest first.
    pub async fn list_notes(&self, document_id: &str) -> Result<Vec<Note>, ApiError> {
        let token = self.bearer()?;
        let url = self.url(&format!("/api/pdfs/{document_id}/notes"));
        self.send_json(self.http.get(&url).bearer_auth(token)).await
    }

    /// Create a note on a document page.
    pub async fn create_note(&self, document_id: &str, note: &NewNote) -> Result<Note, ApiError> {
        let token = self.bearer()?;
        let url = self.url(&format!("/api/pdfs/{document_id}/notes"));
        self.send_json(self.http.post(&url).bearer_auth(token).json(note))
            .await
    }

    /// Replace a note's content and position.
    pub async fn update_note(
        &self,
        document_id: &str,
        note_id: i64,
        note: &NewNote,
    ) -> Result<Note, ApiError> {
        let token = self.bearer()?;
        let url = self.url(&format!("/api/pdfs/{document_id}/notes/{note_id}"));
        self.send_json(self.http.put(&url).bearer_auth(token).json(note))
            .await
    }

    /// Delete a note.
    pub async fn delete_note(&self, document_id: &str, note_id: i64) -> Result<(), ApiError> {
        let token = self.bearer()?;
        let url = self.url(&format!("/api/pdfs/{document_id}/notes/{note_id}"));
        self.send(self.http.delete(&url).bearer_auth(token)).await?;
        Ok(())
    }

    /// List all highlights on a document.
    pub async fn list_highlights(&self, document_id: &str) -> Result<Vec<Highlight>, ApiError> {
        let token = self.bearer()?;
        let url = self.url(&format!("/api/pdfs/{document_id}/highlights"));
        self.send_json(self.http.get(&url).bearer_auth(token)).await
    }

    /// Create a highlight on a document page.
    pub async fn create_highlight(
        &self,
        document_id: &str,
        highlight: &NewHighlight,
    ) -> Result<Highlight, ApiError> {
        let token = self.bearer()?;
        let url = self.url(&format!("/api/pdfs/{document_id}/highlights"));
        self.send_json(self.http.post(&url).bearer_auth(token).json(highlight))
            .await
    }

    /// Replace a highlight's text, color, note, and geometry.
    pub async fn update_highlight(
        &self,
        document_id: &str,
        highlight_id: i64,
        highlight: &NewHighlight,
    ) -> Result<Highlight, ApiError> {
        let token = self.bearer()?;
        let url = self.url(&format!("/api/pdfs/{document_id}/highlights/{highlight_id}"));
        self.send_json(self.http.put(&url).bearer_auth(token).json(highlight))
            .await
    }

    /// Delete a highlight.
    pub async fn delete_highlight(
        &self,
        document_id: &str,
        highlight_id: i64,
    ) -> Result<(), ApiError> {
        let token = self.bearer()?;
        let url = self.url(&format!("/api/pdfs/{document_id}/highlights/{highlight_id}"));
        self.send(self.http.delete(&url).bearer_auth(token)).await?;
        Ok(())
    }
}
