//! Local-only state that survives restarts but never leaves the machine.
//!
//! Holds small JSON values keyed by name, such as the email-capture marker
//! that records whether a visitor already dismissed or answered the lead
//! prompt. A full content reset clears it.

use crate::error::SyncResult;
use crate::lock;
use aurexis_types::Timestamp;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, warn};

/// Key under which the email-capture marker is stored.
pub const EMAIL_CAPTURE_KEY: &str = "aurexis-email-capture";

/// Key-value store for local-only state.
pub trait LocalStateStore: Send + Sync {
    fn get(&self, key: &str) -> SyncResult<Option<Value>>;

    fn set(&self, key: &str, value: Value) -> SyncResult<()>;

    fn remove(&self, key: &str) -> SyncResult<()>;

    /// Removes every key.
    fn clear(&self) -> SyncResult<()>;
}

/// Local state held in process memory.
#[derive(Debug, Default)]
pub struct MemoryStateStore {
    entries: Mutex<BTreeMap<String, Value>>,
}

impl MemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LocalStateStore for MemoryStateStore {
    fn get(&self, key: &str) -> SyncResult<Option<Value>> {
        Ok(lock(&self.entries).get(key).cloned())
    }

    fn set(&self, key: &str, value: Value) -> SyncResult<()> {
        lock(&self.entries).insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&self, key: &str) -> SyncResult<()> {
        lock(&self.entries).remove(key);
        Ok(())
    }

    fn clear(&self) -> SyncResult<()> {
        lock(&self.entries).clear();
        Ok(())
    }
}

/// Local state persisted as one JSON object in a file.
///
/// The file is read on every access and rewritten on every change; a
/// missing file reads as empty.
#[derive(Debug)]
pub struct FileStateStore {
    path: PathBuf,
    guard: Mutex<()>,
}

impl FileStateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            guard: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> SyncResult<Map<String, Value>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(e.into()),
        };
        if raw.trim().is_empty() {
            return Ok(Map::new());
        }
        match serde_json::from_str::<Value>(&raw)? {
            Value::Object(entries) => Ok(entries),
            _ => {
                warn!(path = %self.path.display(), "local state file is not an object; starting empty");
                Ok(Map::new())
            }
        }
    }

    fn save(&self, entries: &Map<String, Value>) -> SyncResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }

    fn modify(&self, f: impl FnOnce(&mut Map<String, Value>)) -> SyncResult<()> {
        let _guard = lock(&self.guard);
        let mut entries = self.load()?;
        f(&mut entries);
        self.save(&entries)
    }
}

impl LocalStateStore for FileStateStore {
    fn get(&self, key: &str) -> SyncResult<Option<Value>> {
        let _guard = lock(&self.guard);
        Ok(self.load()?.remove(key))
    }

    fn set(&self, key: &str, value: Value) -> SyncResult<()> {
        self.modify(|entries| {
            entries.insert(key.to_string(), value);
        })
    }

    fn remove(&self, key: &str) -> SyncResult<()> {
        self.modify(|entries| {
            entries.remove(key);
        })
    }

    fn clear(&self) -> SyncResult<()> {
        let _guard = lock(&self.guard);
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!(path = %self.path.display(), "local state cleared");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// How a visitor answered the email-capture prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaptureStatus {
    Dismissed,
    Subscribed,
}

/// Marker recorded once the prompt has been answered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailCaptureMarker {
    pub status: CaptureStatus,
    pub timestamp: Timestamp,
}

/// Records the visitor's answer, replacing any earlier marker.
pub fn record_email_capture(
    state: &dyn LocalStateStore,
    status: CaptureStatus,
) -> SyncResult<EmailCaptureMarker> {
    let marker = EmailCaptureMarker {
        status,
        timestamp: Timestamp::now(),
    };
    state.set(EMAIL_CAPTURE_KEY, serde_json::to_value(&marker)?)?;
    Ok(marker)
}

/// Reads the stored marker. A marker that no longer parses reads as `None`.
pub fn email_capture_marker(state: &dyn LocalStateStore) -> SyncResult<Option<EmailCaptureMarker>> {
    Ok(state
        .get(EMAIL_CAPTURE_KEY)?
        .and_then(|value| serde_json::from_value(value).ok()))
}

/// Whether the email-capture prompt should be offered. Any stored value
/// counts as answered; an unreadable store offers the prompt.
pub fn should_offer_email_capture(state: &dyn LocalStateStore) -> bool {
    match state.get(EMAIL_CAPTURE_KEY) {
        Ok(stored) => stored.is_none(),
        Err(e) => {
            warn!(error = %e, "could not read local state; offering email capture");
            true
        }
    }
}
