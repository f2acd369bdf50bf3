//! Core request, document, and annotation types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The role of a message participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// A human user.
    User,
    /// The assistant.
    Assistant,
}

/// One turn of conversation history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Who produced this turn.
    pub role: Role,
    /// The turn's text.
    pub content: String,
}

impl ChatMessage {
    /// A user turn.
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    /// An assistant turn.
    #[must_use]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// A chat request against one document.
///
/// Immutable once constructed; build with [`ChatRequest::new`] and the
/// `with_*` methods.
///
/// # Example
///
/// ```
/// use folio_types::ChatRequest;
///
/// let request = ChatRequest::new("a1b2c", "Summarize page 3")
///     .with_current_page(3)
///     .with_selected_context("The mitochondria is...");
/// ```
#[derive(Debug, Clone)]
pub struct ChatRequest {
    /// Backend identifier of the document the question is about.
    pub document_id: String,
    /// The user's question. Must be non-empty; content validation beyond
    /// shape is the backend's job.
    pub query: String,
    /// Prior turns, oldest first.
    pub history: Vec<ChatMessage>,
    /// Text the user selected in the document, if any.
    pub selected_context: Option<String>,
    /// Whether the backend may run retrieval tools while answering.
    pub use_tools: bool,
    /// Whether the backend should produce a long-form answer.
    pub detailed_response: bool,
    /// The page the user is currently viewing.
    pub current_page: Option<u32>,
}

impl ChatRequest {
    /// Create a request with defaults: no history, no selection, tools on,
    /// concise answer.
    #[must_use]
    pub fn new(document_id: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            document_id: document_id.into(),
            query: query.into(),
            history: Vec::new(),
            selected_context: None,
            use_tools: true,
            detailed_response: false,
            current_page: None,
        }
    }

    /// Attach prior conversation turns.
    #[must_use]
    pub fn with_history(mut self, history: Vec<ChatMessage>) -> Self {
        self.history = history;
        self
    }

    /// Attach the user's current text selection.
    #[must_use]
    pub fn with_selected_context(mut self, context: impl Into<String>) -> Self {
        self.selected_context = Some(context.into());
        self
    }

    /// Allow or forbid backend tool use.
    #[must_use]
    pub fn with_tools(mut self, use_tools: bool) -> Self {
        self.use_tools = use_tools;
        self
    }

    /// Ask for a long-form answer.
    #[must_use]
    pub fn with_detailed_response(mut self, detailed: bool) -> Self {
        self.detailed_response = detailed;
        self
    }

    /// Record the page the user is viewing.
    #[must_use]
    pub fn with_current_page(mut self, page: u32) -> Self {
        self.current_page = Some(page);
        self
    }
}

/// The full answer returned by the non-streaming chat endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatAnswer {
    /// The complete answer text.
    pub response: String,
}

/// An authenticated user, as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Backend user id.
    pub id: i64,
    /// Login email.
    pub email: String,
    /// Display name.
    pub username: String,
}

/// Per-user preference map. Keys are backend-defined.
pub type Preferences = serde_json::Map<String, serde_json::Value>;

/// An authenticated session.
///
/// Created by login or registration and handed to the client explicitly;
/// the client never stores tokens ambiently. Read-only while a stream is
/// live — replacing the session does not affect streams already started.
#[derive(Debug, Clone)]
pub struct Session {
    token: String,
    user: UserProfile,
}

impl Session {
    /// Build a session from a bearer token and the user it belongs to.
    #[must_use]
    pub fn new(token: impl Into<String>, user: UserProfile) -> Self {
        Self {
            token: token.into(),
            user,
        }
    }

    /// The bearer token, without the `Bearer ` prefix.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// The user this session belongs to.
    #[must_use]
    pub fn user(&self) -> &UserProfile {
        &self.user
    }
}

/// Where a document is in the backend's indexing pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessingStatus {
    /// Uploaded, not yet picked up.
    Pending,
    /// Being split and embedded.
    Processing,
    /// Ready for chat.
    Processed,
    /// Indexing failed; the document can still be read.
    Failed,
}

/// A stored PDF document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Backend identifier, used in every per-document route.
    pub id: String,
    /// User-visible title.
    pub title: String,
    /// Original filename at upload time.
    pub filename: String,
    /// Size in bytes.
    pub file_size: Option<u64>,
    /// Page count, known once the backend has opened the file.
    pub total_pages: Option<u32>,
    /// Optional user-supplied description.
    pub description: Option<String>,
    /// Indexing state.
    pub processing_status: ProcessingStatus,
    /// Upload timestamp.
    pub uploaded_at: DateTime<Utc>,
}

/// A positioned note on a document page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    /// Backend note id.
    pub id: i64,
    /// The document this note belongs to.
    pub document_id: String,
    /// Note text.
    pub content: String,
    /// 1-based page number.
    pub page_number: u32,
    /// Horizontal anchor within the page, if placed.
    pub x_position: Option<f64>,
    /// Vertical anchor within the page, if placed.
    pub y_position: Option<f64>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Payload for creating or replacing a note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewNote {
    /// Note text.
    pub content: String,
    /// 1-based page number.
    pub page_number: u32,
    /// Horizontal anchor within the page.
    pub x_position: Option<f64>,
    /// Vertical anchor within the page.
    pub y_position: Option<f64>,
}

/// A text highlight on a document page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Highlight {
    /// Backend highlight id.
    pub id: i64,
    /// The document this highlight belongs to.
    pub document_id: String,
    /// The highlighted text.
    pub content: String,
    /// 1-based page number.
    pub page_number: u32,
    /// Highlight color name.
    pub color: String,
    /// Optional note attached to the highlight.
    pub note: Option<String>,
    /// Selection rectangle start, page coordinates.
    pub x_start: Option<f64>,
    /// Selection rectangle start, page coordinates.
    pub y_start: Option<f64>,
    /// Selection rectangle end, page coordinates.
    pub x_end: Option<f64>,
    /// Selection rectangle end, page coordinates.
    pub y_end: Option<f64>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Payload for creating or replacing a highlight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewHighlight {
    /// The highlighted text.
    pub content: String,
    /// 1-based page number.
    pub page_number: u32,
    /// Highlight color name.
    pub color: String,
    /// Optional note attached to the highlight.
    pub note: Option<String>,
    /// Selection rectangle start, page coordinates.
    pub x_start: Option<f64>,
    /// Selection rectangle start, page coordinates.
    pub y_start: Option<f64>,
    /// Selection rectangle end, page coordinates.
    pub x_end: Option<f64>,
    /// Selection rectangle end, page coordinates.
    pub y_end: Option<f64>,
}

impl NewHighlight {
    /// A yellow highlight with no note and no geometry.
    #[must_use]
    pub fn text_only(content: impl Into<String>, page_number: u32) -> Self {
        Self {
            content: content.into(),
            page_number,
            color: "yellow".into(),
            note: None,
            x_start: None,
            y_start: None,
            x_end: None,
            y_end: None,
        }
    }
}
