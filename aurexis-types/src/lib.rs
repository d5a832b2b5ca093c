//! Core type definitions for the Aurexis content layer.
//!
//! This crate defines the small, content-agnostic types shared by the model
//! and sync crates:
//! - Document identifiers (store-assigned or process-local)
//! - Document paths (`collection/id`) used to address the remote store
//! - Wall-clock timestamps serialized as RFC 3339 strings
//!
//! Content shapes (services, pricing pages, blog posts, ...) live in
//! `aurexis-model`, not here.

mod ids;
mod timestamp;

pub use ids::{DocumentId, DocumentPath};
pub use timestamp::Timestamp;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid document path: {0}")]
    InvalidPath(String),

    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),
}
