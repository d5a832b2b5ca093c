//! A content session: one model, one engine, one gateway.

use crate::config::SyncConfig;
use crate::content::{ContentModel, ContentStore};
use crate::engine::SyncEngine;
use crate::error::SyncResult;
use crate::gateway::ContentGateway;
use crate::local_state::{
    self, CaptureStatus, EmailCaptureMarker, FileStateStore, LocalStateStore, MemoryStateStore,
};
use crate::store::StoreHandle;
use std::sync::Arc;
use tracing::info;

/// Wires the content model to a store for the lifetime of the session.
///
/// The engine is activated on construction and deactivated when the
/// session is shut down or dropped.
pub struct ContentSession {
    content: ContentStore,
    engine: SyncEngine,
    gateway: ContentGateway,
    local_state: Arc<dyn LocalStateStore>,
}

impl ContentSession {
    /// Starts a session. Local state goes to `config.local_state_path` when
    /// set, otherwise it lives in memory.
    pub fn start(config: &SyncConfig, store: StoreHandle) -> Self {
        let local_state: Arc<dyn LocalStateStore> = match &config.local_state_path {
            Some(path) => Arc::new(FileStateStore::new(path.clone())),
            None => Arc::new(MemoryStateStore::new()),
        };
        Self::with_local_state(config, store, local_state)
    }

    pub fn with_local_state(
        config: &SyncConfig,
        store: StoreHandle,
        local_state: Arc<dyn LocalStateStore>,
    ) -> Self {
        let content = ContentStore::new();
        let engine = SyncEngine::new(store.clone(), content.clone());
        let gateway = ContentGateway::new(store, content.clone(), config.policies.clone());
        engine.activate();
        Self {
            content,
            engine,
            gateway,
            local_state,
        }
    }

    pub fn content(&self) -> &ContentStore {
        &self.content
    }

    /// Clones the current model.
    pub fn model(&self) -> ContentModel {
        self.content.snapshot()
    }

    pub fn gateway(&self) -> &ContentGateway {
        &self.gateway
    }

    pub fn engine(&self) -> &SyncEngine {
        &self.engine
    }

    pub fn local_state(&self) -> &dyn LocalStateStore {
        self.local_state.as_ref()
    }

    /// Restores the compiled catalog and clears local-only state.
    pub fn reset(&self) -> SyncResult<()> {
        self.content.reset();
        info!("content reset to compiled defaults");
        self.local_state.clear()
    }

    pub fn record_email_capture(&self, status: CaptureStatus) -> SyncResult<EmailCaptureMarker> {
        local_state::record_email_capture(self.local_state.as_ref(), status)
    }

    pub fn should_offer_email_capture(&self) -> bool {
        local_state::should_offer_email_capture(self.local_state.as_ref())
    }

    /// Closes every subscription. Returns how many were open.
    pub fn shutdown(self) -> usize {
        self.engine.deactivate()
    }
}
