//! Error types for the sync layer.

use thiserror::Error;

/// Result type for sync operations.
pub type SyncResult<T> = Result<T, SyncError>;

/// Errors that can occur while talking to the remote store or local state.
#[derive(Debug, Error)]
pub enum SyncError {
    /// The remote store is not configured or could not be reached at all.
    #[error("remote store unavailable: {0}")]
    StoreUnavailable(String),

    /// The store rejected the caller's credentials or access rules.
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// Transport failure talking to the store.
    #[error("network error: {0}")]
    Network(String),

    /// Document or collection not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Local state file I/O.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration could not be used.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A spawned write task panicked or was aborted.
    #[error("write task failed: {0}")]
    WriteTask(String),

    /// Any other backend-reported failure.
    #[error("backend error: {0}")]
    Backend(String),
}

impl SyncError {
    /// Whether retrying the same operation later could succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Network(_) | Self::StoreUnavailable(_))
    }
}

impl From<tokio::task::JoinError> for SyncError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::WriteTask(err.to_string())
    }
}
