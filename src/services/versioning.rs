//! Change-version recording
//!
//! Reference implementation of the version recorder port: every save
//! produces a [`VersionEntry`] carrying a full serialized snapshot of the
//! record. Immediate mode commits entries as they come; deferred mode
//! buffers them until an explicit flush, which job finalization forces at
//! the latest.

use crate::core::models::ProductRecord;
use crate::core::traits::{CacheLifecycleHook, VersionRecorder};
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use parking_lot::{Mutex, RwLock};
use serde::Serialize;
use tracing::debug;

/// One recorded change version
#[derive(Debug, Clone, Serialize)]
pub struct VersionEntry {
    /// Identifier of the changed resource
    pub resource: String,
    /// Author of the change
    pub author: String,
    /// Version number, increasing per resource
    pub version: u64,
    /// Serialized snapshot of the record at save time
    pub snapshot: serde_json::Value,
    /// Whether the entry is still buffered, awaiting flush
    pub pending: bool,
    /// Recording timestamp
    pub logged_at: DateTime<Utc>,
}

/// Version recorder with immediate and deferred modes
pub struct ChangeLog {
    real_time: std::sync::atomic::AtomicBool,
    versions: DashMap<String, u64>,
    committed: RwLock<Vec<VersionEntry>>,
    buffer: Mutex<Vec<VersionEntry>>,
}

impl ChangeLog {
    /// Create a change log in immediate mode
    pub fn new() -> Self {
        Self {
            real_time: std::sync::atomic::AtomicBool::new(true),
            versions: DashMap::new(),
            committed: RwLock::new(Vec::new()),
            buffer: Mutex::new(Vec::new()),
        }
    }

    /// All committed entries, in commit order
    pub fn committed(&self) -> Vec<VersionEntry> {
        self.committed.read().clone()
    }

    /// Latest version number recorded for a resource
    pub fn version_of(&self, resource: &str) -> u64 {
        self.versions.get(resource).map(|v| *v).unwrap_or(0)
    }

    fn next_version(&self, resource: &str) -> u64 {
        let mut entry = self.versions.entry(resource.to_string()).or_insert(0);
        *entry += 1;
        *entry
    }
}

impl Default for ChangeLog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VersionRecorder for ChangeLog {
    fn set_real_time(&self, real_time: bool) {
        self.real_time
            .store(real_time, std::sync::atomic::Ordering::SeqCst);
    }

    fn is_real_time(&self) -> bool {
        self.real_time.load(std::sync::atomic::Ordering::SeqCst)
    }

    async fn record(&self, record: &ProductRecord, author: &str) -> Result<()> {
        let snapshot = serde_json::to_value(record)?;
        let version = self.next_version(&record.identifier);
        let real_time = self.is_real_time();
        let entry = VersionEntry {
            resource: record.identifier.clone(),
            author: author.to_string(),
            version,
            snapshot,
            pending: !real_time,
            logged_at: Utc::now(),
        };

        if real_time {
            self.committed.write().push(entry);
        } else {
            self.buffer.lock().push(entry);
        }
        Ok(())
    }

    async fn flush(&self) -> Result<()> {
        let drained: Vec<VersionEntry> = {
            let mut buffer = self.buffer.lock();
            buffer.drain(..).collect()
        };
        if drained.is_empty() {
            return Ok(());
        }

        let count = drained.len();
        let mut committed = self.committed.write();
        for mut entry in drained {
            entry.pending = false;
            committed.push(entry);
        }
        debug!(entries = count, "version buffer flushed");
        Ok(())
    }

    fn pending(&self) -> usize {
        self.buffer.lock().len()
    }
}

#[async_trait]
impl CacheLifecycleHook for ChangeLog {
    async fn on_full_clear(&self) -> Result<()> {
        self.flush().await
    }
}
