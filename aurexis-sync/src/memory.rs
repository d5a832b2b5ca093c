//! In-process [`RemoteStore`] implementation.
//!
//! Behaves like a live document store: listeners get an initial snapshot on
//! subscribe and a fresh one after every committed write. Tests and
//! local-first deployments use it directly; the fault hooks let callers
//! reject subscriptions, fail writes, or hold writes in flight.
//!
//! Every change bumps a store-wide version stamped on the snapshots it
//! produces. Each listener has its own delivery gate, held while the
//! listener runs, that drops any snapshot older than the last one it saw.
//! Concurrent writers therefore never leave a listener on a stale view.
//! Listeners must not write to the store synchronously.

use crate::error::{SyncError, SyncResult};
use crate::lock;
use crate::store::{
    CollectionListener, CollectionSnapshot, DocumentListener, DocumentSnapshot, ErrorListener,
    RemoteDocument, RemoteStore, Subscription,
};
use async_trait::async_trait;
use aurexis_model::Fields;
use aurexis_types::{DocumentId, DocumentPath};
use serde_json::Value;
use std::collections::{BTreeMap, HashSet};
use std::sync::{Arc, Mutex, Weak};
use tokio::sync::watch;
use tracing::debug;

type SnapshotFn = Arc<dyn Fn(CollectionSnapshot) + Send + Sync>;
type DocumentFn = Arc<dyn Fn(DocumentSnapshot) + Send + Sync>;
type ErrorFn = Arc<dyn Fn(SyncError) + Send + Sync>;

/// Version of the last snapshot handed to one listener.
type DeliveryGate = Arc<Mutex<Option<u64>>>;

/// A write the store committed.
#[derive(Debug, Clone, PartialEq)]
pub enum WriteRecord {
    Upsert { path: DocumentPath, data: Fields },
    Delete { path: DocumentPath },
}

impl WriteRecord {
    pub fn path(&self) -> &DocumentPath {
        match self {
            Self::Upsert { path, .. } | Self::Delete { path } => path,
        }
    }
}

struct CollectionWatch {
    collection: String,
    on_snapshot: SnapshotFn,
    on_error: ErrorFn,
    gate: DeliveryGate,
}

struct DocumentWatch {
    path: DocumentPath,
    on_snapshot: DocumentFn,
    on_error: ErrorFn,
    gate: DeliveryGate,
}

/// Merges `patch` into `target`, descending into nested objects so sibling
/// fields written earlier survive. Any other value replaces the old one.
fn merge_fields(target: &mut Fields, patch: &Fields) {
    for (key, value) in patch {
        match (target.get_mut(key), value) {
            (Some(Value::Object(existing)), Value::Object(nested)) => {
                merge_fields(existing, nested);
            }
            _ => {
                target.insert(key.clone(), value.clone());
            }
        }
    }
}

#[derive(Default)]
struct Inner {
    collections: BTreeMap<String, BTreeMap<DocumentId, Fields>>,
    collection_watches: BTreeMap<u64, CollectionWatch>,
    document_watches: BTreeMap<u64, DocumentWatch>,
    next_watch: u64,
    version: u64,
    failing_targets: HashSet<String>,
    write_failure: Option<String>,
    session_failure: Option<String>,
    sessions: usize,
    writes: Vec<WriteRecord>,
}

impl Inner {
    fn collection_snapshot(&self, collection: &str) -> CollectionSnapshot {
        let documents = self
            .collections
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .map(|(id, fields)| RemoteDocument::new(id.clone(), fields.clone()))
                    .collect()
            })
            .unwrap_or_default();
        CollectionSnapshot {
            collection: collection.to_string(),
            documents,
        }
    }

    fn document_snapshot(&self, path: &DocumentPath) -> DocumentSnapshot {
        DocumentSnapshot {
            path: path.clone(),
            fields: self
                .collections
                .get(path.collection())
                .and_then(|docs| docs.get(path.id()))
                .cloned(),
        }
    }

    /// Bumps the version and collects the deliveries a change to `path`
    /// triggers.
    fn changed(&mut self, path: &DocumentPath) -> Deliveries {
        self.version += 1;
        let mut deliveries = Deliveries {
            version: self.version,
            ..Deliveries::default()
        };
        let collection_listeners: Vec<(SnapshotFn, DeliveryGate)> = self
            .collection_watches
            .values()
            .filter(|w| w.collection == path.collection())
            .map(|w| (w.on_snapshot.clone(), w.gate.clone()))
            .collect();
        if !collection_listeners.is_empty() {
            let snapshot = self.collection_snapshot(path.collection());
            deliveries.collections = collection_listeners
                .into_iter()
                .map(|(listener, gate)| (listener, gate, snapshot.clone()))
                .collect();
        }
        deliveries.documents = self
            .document_watches
            .values()
            .filter(|w| &w.path == path)
            .map(|w| (w.on_snapshot.clone(), w.gate.clone(), self.document_snapshot(path)))
            .collect();
        deliveries
    }

    fn commit(&mut self, record: WriteRecord) -> Deliveries {
        match &record {
            WriteRecord::Upsert { path, data } => {
                let doc = self
                    .collections
                    .entry(path.collection().to_string())
                    .or_default()
                    .entry(path.id().clone())
                    .or_default();
                merge_fields(doc, data);
            }
            WriteRecord::Delete { path } => {
                if let Some(docs) = self.collections.get_mut(path.collection()) {
                    docs.remove(path.id());
                }
            }
        }
        let deliveries = self.changed(record.path());
        self.writes.push(record);
        deliveries
    }

    fn next_watch_id(&mut self) -> u64 {
        let id = self.next_watch;
        self.next_watch += 1;
        id
    }
}

/// Runs `listener` through `gate` unless the listener already saw a newer
/// snapshot. The gate stays locked while the listener runs.
fn deliver_through(gate: &DeliveryGate, version: u64, listener: impl FnOnce()) {
    let mut last = lock(gate);
    if (*last).is_none_or(|seen| version > seen) {
        *last = Some(version);
        listener();
    } else {
        debug!(version, "memory store: stale snapshot dropped");
    }
}

/// Listener invocations gathered under the lock and run after releasing it.
#[derive(Default)]
struct Deliveries {
    version: u64,
    collections: Vec<(SnapshotFn, DeliveryGate, CollectionSnapshot)>,
    documents: Vec<(DocumentFn, DeliveryGate, DocumentSnapshot)>,
}

impl Deliveries {
    fn run(self) {
        let version = self.version;
        for (listener, gate, snapshot) in self.collections {
            deliver_through(&gate, version, || listener(snapshot));
        }
        for (listener, gate, snapshot) in self.documents {
            deliver_through(&gate, version, || listener(snapshot));
        }
    }
}

/// In-memory document store.
pub struct MemoryStore {
    inner: Arc<Mutex<Inner>>,
    writes_held: watch::Sender<bool>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        let (writes_held, _) = watch::channel(false);
        Self {
            inner: Arc::new(Mutex::new(Inner::default())),
            writes_held,
        }
    }

    /// Replaces the document at `path` and notifies listeners, bypassing
    /// write faults. Models an edit made by another client.
    pub fn put_document(&self, path: &DocumentPath, fields: Fields) {
        let deliveries = {
            let mut inner = lock(&self.inner);
            inner
                .collections
                .entry(path.collection().to_string())
                .or_default()
                .insert(path.id().clone(), fields);
            inner.changed(path)
        };
        deliveries.run();
    }

    /// Removes the document at `path` and notifies listeners.
    pub fn remove_document(&self, path: &DocumentPath) {
        let deliveries = {
            let mut inner = lock(&self.inner);
            if let Some(docs) = inner.collections.get_mut(path.collection()) {
                docs.remove(path.id());
            }
            inner.changed(path)
        };
        deliveries.run();
    }

    /// Current contents of the document at `path`.
    pub fn document(&self, path: &DocumentPath) -> Option<Fields> {
        lock(&self.inner).document_snapshot(path).fields
    }

    /// Number of documents in `collection`.
    pub fn document_count(&self, collection: &str) -> usize {
        lock(&self.inner)
            .collections
            .get(collection)
            .map_or(0, BTreeMap::len)
    }

    /// Makes future subscriptions to `target` (a collection name or a
    /// `collection/id` path) fail with a permission error.
    pub fn fail_subscriptions_to(&self, target: impl Into<String>) {
        lock(&self.inner).failing_targets.insert(target.into());
    }

    /// Sends an error to every open listener on `target`.
    pub fn emit_error(&self, target: &str, message: &str) {
        let listeners: Vec<ErrorFn> = {
            let inner = lock(&self.inner);
            inner
                .collection_watches
                .values()
                .filter(|w| w.collection == target)
                .map(|w| w.on_error.clone())
                .chain(
                    inner
                        .document_watches
                        .values()
                        .filter(|w| w.path.to_string() == target)
                        .map(|w| w.on_error.clone()),
                )
                .collect()
        };
        for listener in listeners {
            listener(SyncError::Network(message.to_string()));
        }
    }

    /// Rejects every write with a permission error until cleared.
    pub fn fail_writes(&self, message: impl Into<String>) {
        lock(&self.inner).write_failure = Some(message.into());
    }

    pub fn clear_write_failure(&self) {
        lock(&self.inner).write_failure = None;
    }

    /// Rejects session establishment until cleared.
    pub fn fail_sessions(&self, message: impl Into<String>) {
        lock(&self.inner).session_failure = Some(message.into());
    }

    /// Parks every write until [`MemoryStore::release_writes`] is called.
    pub fn hold_writes(&self) {
        self.writes_held.send_replace(true);
    }

    pub fn release_writes(&self) {
        self.writes_held.send_replace(false);
    }

    /// Writes committed so far, in commit order.
    pub fn writes(&self) -> Vec<WriteRecord> {
        lock(&self.inner).writes.clone()
    }

    /// Number of successful session establishments.
    pub fn session_count(&self) -> usize {
        lock(&self.inner).sessions
    }

    /// Number of open listeners across collections and documents.
    pub fn listener_count(&self) -> usize {
        let inner = lock(&self.inner);
        inner.collection_watches.len() + inner.document_watches.len()
    }

    fn is_failing(&self, target: &str) -> bool {
        lock(&self.inner).failing_targets.contains(target)
    }

    fn disposer(&self, id: u64) -> impl FnOnce() + Send + 'static {
        let inner: Weak<Mutex<Inner>> = Arc::downgrade(&self.inner);
        move || {
            if let Some(inner) = inner.upgrade() {
                let mut inner = lock(&inner);
                inner.collection_watches.remove(&id);
                inner.document_watches.remove(&id);
            }
        }
    }

    async fn wait_for_release(&self) -> SyncResult<()> {
        let mut held = self.writes_held.subscribe();
        let released = held.wait_for(|held| !*held).await.is_ok();
        if released {
            Ok(())
        } else {
            Err(SyncError::StoreUnavailable("store shut down".into()))
        }
    }

    async fn commit(&self, record: WriteRecord) -> SyncResult<()> {
        self.wait_for_release().await?;
        let deliveries = {
            let mut inner = lock(&self.inner);
            if let Some(message) = &inner.write_failure {
                return Err(SyncError::PermissionDenied(message.clone()));
            }
            inner.commit(record)
        };
        deliveries.run();
        Ok(())
    }
}

#[async_trait]
impl RemoteStore for MemoryStore {
    fn provider_name(&self) -> &'static str {
        "memory"
    }

    fn subscribe_collection(
        &self,
        collection: &str,
        on_snapshot: CollectionListener,
        on_error: ErrorListener,
    ) -> Subscription {
        if self.is_failing(collection) {
            on_error(SyncError::PermissionDenied(format!(
                "missing or insufficient permissions for {collection}"
            )));
            return Subscription::inert(collection);
        }
        let on_snapshot: SnapshotFn = Arc::from(on_snapshot);
        let gate = DeliveryGate::default();
        let (id, version, snapshot) = {
            let mut inner = lock(&self.inner);
            let id = inner.next_watch_id();
            inner.collection_watches.insert(
                id,
                CollectionWatch {
                    collection: collection.to_string(),
                    on_snapshot: on_snapshot.clone(),
                    on_error: Arc::from(on_error),
                    gate: gate.clone(),
                },
            );
            (id, inner.version, inner.collection_snapshot(collection))
        };
        debug!(collection, "memory store: collection subscribed");
        deliver_through(&gate, version, || on_snapshot(snapshot));
        Subscription::new(collection, self.disposer(id))
    }

    fn subscribe_document(
        &self,
        path: &DocumentPath,
        on_snapshot: DocumentListener,
        on_error: ErrorListener,
    ) -> Subscription {
        let target = path.to_string();
        if self.is_failing(&target) {
            on_error(SyncError::PermissionDenied(format!(
                "missing or insufficient permissions for {target}"
            )));
            return Subscription::inert(target);
        }
        let on_snapshot: DocumentFn = Arc::from(on_snapshot);
        let gate = DeliveryGate::default();
        let (id, version, snapshot) = {
            let mut inner = lock(&self.inner);
            let id = inner.next_watch_id();
            inner.document_watches.insert(
                id,
                DocumentWatch {
                    path: path.clone(),
                    on_snapshot: on_snapshot.clone(),
                    on_error: Arc::from(on_error),
                    gate: gate.clone(),
                },
            );
            (id, inner.version, inner.document_snapshot(path))
        };
        debug!(path = %target, "memory store: document subscribed");
        deliver_through(&gate, version, || on_snapshot(snapshot));
        Subscription::new(target, self.disposer(id))
    }

    async fn ensure_session(&self) -> SyncResult<()> {
        let mut inner = lock(&self.inner);
        if let Some(message) = &inner.session_failure {
            return Err(SyncError::PermissionDenied(message.clone()));
        }
        inner.sessions += 1;
        Ok(())
    }

    async fn upsert(&self, path: &DocumentPath, data: Fields) -> SyncResult<()> {
        self.commit(WriteRecord::Upsert {
            path: path.clone(),
            data,
        })
        .await
    }

    async fn delete(&self, path: &DocumentPath) -> SyncResult<()> {
        self.commit(WriteRecord::Delete { path: path.clone() }).await
    }
}
