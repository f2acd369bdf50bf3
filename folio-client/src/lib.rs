#![doc = include_str!("../README.md")]

pub mod client;
pub(crate) mod error;
pub mod mapping;
pub(crate) mod streaming;

mod annotations;
mod auth;
mod chat;
mod documents;
mod users;

pub use client::FolioClient;

// Re-export folio-types for convenience
pub use folio_types::{ApiError, ChatRequest, Session, StreamEvent, StreamHandle};
