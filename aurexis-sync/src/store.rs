//! Remote document store abstraction.
//!
//! The sync layer talks to exactly one store through [`RemoteStore`]. A
//! store pushes snapshots to registered listeners and accepts merge-upserts
//! and deletes addressed by [`DocumentPath`]. When no store is configured
//! the layer holds a [`StoreHandle::Absent`] instead, and every caller checks
//! the handle rather than a nullable reference.

use crate::config::SyncConfig;
use crate::error::{SyncError, SyncResult};
use async_trait::async_trait;
use aurexis_model::Fields;
use aurexis_types::{DocumentId, DocumentPath};
use std::fmt;
use std::sync::Arc;
use tracing::{error, info, warn};

/// A single document as delivered by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteDocument {
    pub id: DocumentId,
    pub fields: Fields,
}

impl RemoteDocument {
    pub fn new(id: impl Into<DocumentId>, fields: Fields) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }
}

/// Full contents of a collection at one point in time.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionSnapshot {
    pub collection: String,
    pub documents: Vec<RemoteDocument>,
}

/// State of a single document at one point in time. `fields` is `None`
/// when the document does not exist.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentSnapshot {
    pub path: DocumentPath,
    pub fields: Option<Fields>,
}

impl DocumentSnapshot {
    pub fn exists(&self) -> bool {
        self.fields.is_some()
    }
}

/// Receives every snapshot of a subscribed collection.
pub type CollectionListener = Box<dyn Fn(CollectionSnapshot) + Send + Sync>;
/// Receives every snapshot of a subscribed document.
pub type DocumentListener = Box<dyn Fn(DocumentSnapshot) + Send + Sync>;
/// Receives subscription errors. The subscription may stay open afterwards.
pub type ErrorListener = Box<dyn Fn(SyncError) + Send + Sync>;

/// An open live subscription.
///
/// Dropping or calling [`Subscription::unsubscribe`] runs the store's
/// disposer exactly once.
pub struct Subscription {
    target: String,
    disposer: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    /// Wraps a disposer that closes the subscription on `target`.
    pub fn new(target: impl Into<String>, disposer: impl FnOnce() + Send + 'static) -> Self {
        Self {
            target: target.into(),
            disposer: Some(Box::new(disposer)),
        }
    }

    /// A subscription with nothing to release.
    pub fn inert(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            disposer: None,
        }
    }

    /// Collection name or document path this subscription listens to.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Closes the subscription now.
    pub fn unsubscribe(mut self) {
        self.dispose();
    }

    fn dispose(&mut self) {
        if let Some(disposer) = self.disposer.take() {
            disposer();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("target", &self.target)
            .field("open", &self.disposer.is_some())
            .finish()
    }
}

/// Abstract remote document store.
#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// Returns the name of the store provider.
    fn provider_name(&self) -> &'static str;

    /// Subscribes to every snapshot of `collection`.
    fn subscribe_collection(
        &self,
        collection: &str,
        on_snapshot: CollectionListener,
        on_error: ErrorListener,
    ) -> Subscription;

    /// Subscribes to every snapshot of the document at `path`.
    fn subscribe_document(
        &self,
        path: &DocumentPath,
        on_snapshot: DocumentListener,
        on_error: ErrorListener,
    ) -> Subscription;

    /// Allocates an id for a new document in `collection` without writing.
    fn new_document_id(&self, _collection: &str) -> DocumentId {
        DocumentId::generate()
    }

    /// Establishes the write session (e.g. anonymous sign-in). Called once
    /// before the first write.
    async fn ensure_session(&self) -> SyncResult<()> {
        Ok(())
    }

    /// Merges `data` into the document at `path`, creating it if needed.
    async fn upsert(&self, path: &DocumentPath, data: Fields) -> SyncResult<()>;

    /// Deletes the document at `path`.
    async fn delete(&self, path: &DocumentPath) -> SyncResult<()>;
}

/// The store the layer was initialized with, or its absence.
#[derive(Clone, Default)]
pub enum StoreHandle {
    Connected(Arc<dyn RemoteStore>),
    #[default]
    Absent,
}

impl StoreHandle {
    pub fn connected(store: Arc<dyn RemoteStore>) -> Self {
        Self::Connected(store)
    }

    /// Connects using `factory` when `config` carries usable credentials.
    ///
    /// Missing credentials and factory failures both yield
    /// [`StoreHandle::Absent`]; neither is fatal.
    pub fn connect<F>(config: &SyncConfig, factory: F) -> Self
    where
        F: FnOnce(&SyncConfig) -> anyhow::Result<Arc<dyn RemoteStore>>,
    {
        if !config.credentials.is_configured() {
            warn!("remote store credentials missing; content stays local-only");
            return Self::Absent;
        }
        match factory(config) {
            Ok(store) => {
                info!(
                    provider = store.provider_name(),
                    persistence = config.enable_persistence,
                    "connected to remote store"
                );
                Self::Connected(store)
            }
            Err(e) => {
                error!(error = %e, "failed to initialize remote store; content stays local-only");
                Self::Absent
            }
        }
    }

    pub fn is_connected(&self) -> bool {
        matches!(self, Self::Connected(_))
    }

    pub fn store(&self) -> Option<&Arc<dyn RemoteStore>> {
        match self {
            Self::Connected(store) => Some(store),
            Self::Absent => None,
        }
    }
}

impl fmt::Debug for StoreHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Connected(store) => f
                .debug_tuple("Connected")
                .field(&store.provider_name())
                .finish(),
            Self::Absent => f.write_str("Absent"),
        }
    }
}
