//! Catalog store implementation

use crate::core::models::{ProductRecord, RecordId};
use crate::core::traits::{
    BulkSaver, CacheClearer, CacheLifecycleHook, ObjectDetacher, SaveOptions, VersionRecorder,
};
use crate::utils::error::{PipelineError, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use parking_lot::RwLock;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, trace};

/// A persisted catalog row
#[derive(Debug, Clone)]
pub struct StoredProduct {
    /// Assigned identity
    pub id: RecordId,
    /// Business key
    pub identifier: String,
    /// Snapshot of the record as last saved
    pub record: ProductRecord,
    /// Derived completeness percentage, when it has been computed
    pub completeness: Option<f64>,
    /// Save timestamp
    pub saved_at: DateTime<Utc>,
}

/// In-memory catalog store
///
/// One struct plays three of the stage's ports: [`BulkSaver`],
/// [`CacheClearer`] and [`ObjectDetacher`]. The store keeps three distinct
/// maps:
///
/// - `products`: the durable rows, surviving cache clears;
/// - `tracked`: the identity map of records touched by saves, emptied
///   per record by `detach` and wholesale by a full clear;
/// - `reference_cache`: family/group references resolved during saves,
///   emptied by every (scoped or full) clear.
pub struct CatalogStore {
    products: DashMap<String, StoredProduct>,
    tracked: DashMap<String, RecordId>,
    reference_cache: DashMap<String, u64>,
    families: DashMap<String, Vec<String>>,
    sequence: AtomicU64,
    author: String,
    recorder: Option<Arc<dyn VersionRecorder>>,
    hooks: RwLock<Vec<Arc<dyn CacheLifecycleHook>>>,
}

impl CatalogStore {
    /// Create an empty store
    pub fn new(author: impl Into<String>) -> Self {
        Self {
            products: DashMap::new(),
            tracked: DashMap::new(),
            reference_cache: DashMap::new(),
            families: DashMap::new(),
            sequence: AtomicU64::new(0),
            author: author.into(),
            recorder: None,
            hooks: RwLock::new(Vec::new()),
        }
    }

    /// Record a change version through `recorder` after each save
    pub fn with_recorder(mut self, recorder: Arc<dyn VersionRecorder>) -> Self {
        self.recorder = Some(recorder);
        self
    }

    /// Declare a family and the attribute codes completeness is measured
    /// against
    pub fn register_family(&self, code: impl Into<String>, required: Vec<String>) {
        self.families.insert(code.into(), required);
    }

    /// Register a hook to run on every full cache clear
    pub fn register_hook(&self, hook: Arc<dyn CacheLifecycleHook>) {
        self.hooks.write().push(hook);
    }

    /// Number of persisted rows
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the store holds no rows
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Fetch a persisted row by identifier
    pub fn get(&self, identifier: &str) -> Option<StoredProduct> {
        self.products.get(identifier).map(|p| p.clone())
    }

    /// Whether a record is currently held in the identity map
    pub fn is_tracked(&self, identifier: &str) -> bool {
        self.tracked.contains_key(identifier)
    }

    /// Number of records currently held in the identity map
    pub fn tracked_count(&self) -> usize {
        self.tracked.len()
    }

    /// Number of entries in the scoped reference cache
    pub fn reference_cache_len(&self) -> usize {
        self.reference_cache.len()
    }

    fn cache_references(&self, record: &ProductRecord) {
        if let Some(family) = &record.family {
            *self
                .reference_cache
                .entry(format!("family:{}", family))
                .or_insert(0) += 1;
        }
        for group in &record.groups {
            *self
                .reference_cache
                .entry(format!("group:{}", group))
                .or_insert(0) += 1;
        }
    }

    fn compute_completeness(&self, record: &ProductRecord) -> Option<f64> {
        let family = record.family.as_deref()?;
        let required = self.families.get(family)?;
        if required.is_empty() {
            return Some(100.0);
        }
        let filled = required
            .iter()
            .filter(|attribute| record.value(attribute).is_some())
            .count();
        Some(100.0 * filled as f64 / required.len() as f64)
    }

    fn resolve_identity(&self, record: &ProductRecord) -> Result<RecordId> {
        let existing = self.products.get(&record.identifier).map(|p| p.id);
        match (record.id, existing) {
            // Identity already persisted under this identifier must match.
            (Some(declared), Some(stored)) if declared != stored => {
                Err(PipelineError::persistence(format!(
                    "record '{}' declares identity {} but is stored as {}",
                    record.identifier, declared, stored
                )))
            }
            (Some(declared), _) => {
                // Keep the sequence ahead of explicitly imported identities.
                self.sequence.fetch_max(declared.value(), Ordering::SeqCst);
                Ok(declared)
            }
            (None, Some(stored)) => Ok(stored),
            (None, None) => Ok(RecordId::new(
                self.sequence.fetch_add(1, Ordering::SeqCst) + 1,
            )),
        }
    }
}

#[async_trait]
impl BulkSaver for CatalogStore {
    async fn save_all(&self, records: &mut [ProductRecord], options: SaveOptions) -> Result<()> {
        if records.is_empty() {
            return Ok(());
        }

        for record in records.iter_mut() {
            self.cache_references(record);

            let id = self.resolve_identity(record)?;
            if record.id.is_none() {
                record.assign_id(id)?;
            }

            let completeness = if options.recalculate {
                self.compute_completeness(record)
            } else {
                // Skipped recalculation carries the previously stored value.
                self.products
                    .get(&record.identifier)
                    .and_then(|p| p.completeness)
            };

            self.products.insert(
                record.identifier.clone(),
                StoredProduct {
                    id,
                    identifier: record.identifier.clone(),
                    record: record.clone(),
                    completeness,
                    saved_at: Utc::now(),
                },
            );
            self.tracked.insert(record.identifier.clone(), id);
            trace!(identifier = %record.identifier, id = %id, "record saved");

            if let Some(recorder) = &self.recorder {
                recorder.record(record, &self.author).await?;
            }
        }

        debug!(records = records.len(), "bulk save completed");
        Ok(())
    }
}

#[async_trait]
impl CacheClearer for CatalogStore {
    async fn clear(&self, full: bool) -> Result<()> {
        self.reference_cache.clear();
        if full {
            self.tracked.clear();
            let hooks: Vec<Arc<dyn CacheLifecycleHook>> = self.hooks.read().clone();
            for hook in hooks {
                hook.on_full_clear().await?;
            }
            debug!("full cache clear completed");
        }
        Ok(())
    }
}

impl ObjectDetacher for CatalogStore {
    fn detach(&self, record: &ProductRecord) {
        self.tracked.remove(&record.identifier);
    }
}
