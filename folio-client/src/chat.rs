//! Chat operations: streaming query and the one-shot fallback.

use folio_types::{ApiError, ChatAnswer, ChatRequest, StreamHandle};
use reqwest::header::ACCEPT;

use crate::FolioClient;
use crate::error::{map_http_status, map_reqwest_error};
use crate::mapping::to_chat_body;
use crate::streaming::stream_answer;

impl FolioClient {
    /// Ask a question about a document and stream the answer.
    ///
    /// Returns a [`StreamHandle`] whose event stream yields answer fragments
    /// in wire order, then exactly one terminal event. An `Err` from this
    /// call means the stream never opened — no session, connect failure, or
    /// a non-2xx status — and the caller may fall back to [`chat`], which
    /// returns the whole answer in one response:
    ///
    /// ```no_run
    /// # use folio_client::FolioClient;
    /// # use folio_types::ChatRequest;
    /// # async fn run(client: FolioClient, request: ChatRequest) -> Result<(), folio_client::ApiError> {
    /// let answer = match client.chat_stream(&request).await {
    ///     Ok(handle) => consume(handle).await,
    ///     Err(_) => client.chat(&request).await?.response,
    /// };
    /// # Ok(()) }
    /// # async fn consume(handle: folio_types::StreamHandle) -> String { String::new() }
    /// ```
    ///
    /// Mid-stream failures do not come back here; they arrive as a single
    /// terminal [`StreamEvent::Error`](folio_types::StreamEvent::Error) on
    /// the handle's event stream.
    ///
    /// [`chat`]: Self::chat
    pub async fn chat_stream(&self, request: &ChatRequest) -> Result<StreamHandle, ApiError> {
        let token = self.bearer()?;
        if request.query.trim().is_empty() {
            return Err(ApiError::InvalidRequest("query must not be empty".into()));
        }

        let url = self.url(&format!("/api/pdfs/{}/chat", request.document_id));
        let body = to_chat_body(request);

        tracing::debug!(url = %url, document = %request.document_id, "opening chat stream");

        let response = self
            .http
            .post(&url)
            .bearer_auth(token)
            .header(ACCEPT, "text/event-stream")
            .json(&body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.map_err(map_reqwest_error)?;
            return Err(map_http_status(status, &text));
        }

        Ok(stream_answer(response))
    }

    /// Ask a question about a document and wait for the full answer.
    ///
    /// The non-streaming path: same endpoint and body as
    /// [`chat_stream`](Self::chat_stream), plain JSON response.
    pub async fn chat(&self, request: &ChatRequest) -> Result<ChatAnswer, ApiError> {
        let token = self.bearer()?;
        if request.query.trim().is_empty() {
            return Err(ApiError::InvalidRequest("query must not be empty".into()));
        }

        let url = self.url(&format!("/api/pdfs/{}/chat", request.document_id));
        let body = to_chat_body(request);

        tracing::debug!(url = %url, document = %request.document_id, "sending chat request");

        self.send_json(self.http.post(&url).bearer_auth(token).json(&body))
            .await
    }
}
