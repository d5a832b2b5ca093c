//! Live synchronization and optimistic mutations for Aurexis site content.
//!
//! This crate keeps an in-memory [`ContentModel`] in step with a remote
//! document store and routes every edit through it:
//! - [`SyncEngine`] subscribes to each collection and settings document and
//!   folds snapshots into the model
//! - [`ContentGateway`] applies mutations locally first, then writes them
//!   remotely according to each entity group's [`WritePolicy`]
//! - [`StoreHandle`] is either a connected [`RemoteStore`] or absent, in
//!   which case the layer runs on compiled defaults plus local edits
//!
//! [`ContentSession`] wires all three together.

pub mod collections;
mod config;
mod content;
mod engine;
mod error;
mod gateway;
pub mod local_state;
mod memory;
mod policy;
mod session;
mod store;

pub use config::{
    ENV_API_KEY, ENV_AUTH_DOMAIN, ENV_ENABLE_PERSISTENCE, ENV_LOCAL_STATE_PATH, ENV_PROJECT_ID,
    PLACEHOLDER_API_KEY, StoreCredentials, SyncConfig,
};
pub use content::{ContentModel, ContentStore};
pub use engine::SyncEngine;
pub use error::{SyncError, SyncResult};
pub use gateway::{ContentGateway, WriteHandle};
pub use local_state::{
    CaptureStatus, EmailCaptureMarker, FileStateStore, LocalStateStore, MemoryStateStore,
};
pub use memory::{MemoryStore, WriteRecord};
pub use policy::{EntityGroup, FailurePolicy, Persistence, WritePolicies, WritePolicy};
pub use session::ContentSession;
pub use store::{
    CollectionListener, CollectionSnapshot, DocumentListener, DocumentSnapshot, ErrorListener,
    RemoteDocument, RemoteStore, StoreHandle, Subscription,
};

use std::sync::{Mutex, MutexGuard, PoisonError};

/// Locks `mutex`, recovering the data if a previous holder panicked.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
