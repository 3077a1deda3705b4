//! # pim-ingest-rs
//!
//! A bulk product ingestion pipeline for product-information-management
//! catalogs: a batch item-writer that persists large streams of product
//! records efficiently while keeping media attachment, change versioning
//! and object-graph memory consistent with the persisted stream.
//!
//! ## Features
//!
//! - **Chunked bulk writes**: one persistence call per chunk, with derived
//!   data recalculation explicitly deferred out of the hot path
//! - **Outcome accounting**: per-record create/update counters, classified
//!   before persistence assigns identities
//! - **Media attachment**: chunk-level resolution of externally-referenced
//!   assets with per-record, non-fatal failure aggregation
//! - **Change versioning**: immediate or deferred version recording, with
//!   deferred buffers flushed at job finalization
//! - **Bounded memory**: scoped cache clears and per-record detaching
//!   after every chunk, so long jobs stay flat
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pim_ingest_rs::core::ingest::ProductWriter;
//! use pim_ingest_rs::core::models::ProductRecord;
//! use pim_ingest_rs::services::versioning::ChangeLog;
//! use pim_ingest_rs::storage::files::{LocalMediaStore, StoreMediaResolver};
//! use pim_ingest_rs::storage::memory::CatalogStore;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let change_log = Arc::new(ChangeLog::new());
//!     let store = Arc::new(
//!         CatalogStore::new("batch").with_recorder(change_log.clone()),
//!     );
//!     store.register_hook(change_log.clone());
//!
//!     let mut writer = ProductWriter::new(
//!         Arc::new(StoreMediaResolver::new(LocalMediaStore::new("./media"))),
//!         store.clone(),
//!         change_log,
//!         store.clone(),
//!         store,
//!     );
//!
//!     writer.write(vec![ProductRecord::new("sku_1")?]).await?;
//!     writer.finalize().await?;
//!     println!("created: {}", writer.report().created());
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

// Public module exports
pub mod config;
pub mod core;
pub mod job;
pub mod services;
pub mod storage;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use utils::error::{PipelineError, Result};

// Export the ingestion stage and its reporting surface
pub use crate::core::ingest::{COUNTER_CREATE, COUNTER_UPDATE, ProductWriter, StepReport};

// Export the domain model
pub use crate::core::models::{
    AttributeValue, GroupAssociation, MediaReference, MediaState, MediaWarning, ProductRecord,
    RecordId, ValueData,
};

// Export the collaborator ports
pub use crate::core::traits::{
    BulkSaver, CacheClearer, CacheLifecycleHook, MediaResolver, ObjectDetacher, SaveOptions,
    VersionRecorder,
};

use crate::job::{JobRunner, JobSummary, ProductReader};
use crate::services::versioning::ChangeLog;
use crate::storage::files::{LocalMediaStore, StoreMediaResolver};
use crate::storage::memory::CatalogStore;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// A fully wired import pipeline
///
/// Composition root over the reference adapters: in-memory catalog store,
/// change log and filesystem media store. Library users wanting different
/// adapters wire [`ProductWriter`] directly.
pub struct Importer {
    config: Config,
    store: Arc<CatalogStore>,
    change_log: Arc<ChangeLog>,
}

impl Importer {
    /// Create an importer from configuration
    pub fn new(config: Config) -> Self {
        info!("Creating importer");
        let change_log = Arc::new(ChangeLog::new());
        let store = Arc::new(
            CatalogStore::new(config.job.author.clone()).with_recorder(change_log.clone()),
        );
        store.register_hook(change_log.clone());

        Self {
            config,
            store,
            change_log,
        }
    }

    /// The catalog store backing this importer
    pub fn store(&self) -> &Arc<CatalogStore> {
        &self.store
    }

    /// The change log backing this importer
    pub fn change_log(&self) -> &Arc<ChangeLog> {
        &self.change_log
    }

    /// Run a full import of the given JSON-lines file
    pub async fn run(&self, input: &Path) -> Result<JobSummary> {
        let media_store = LocalMediaStore::from_config(&self.config.storage);
        let mut writer = ProductWriter::new(
            Arc::new(StoreMediaResolver::new(media_store)),
            self.store.clone(),
            self.change_log.clone(),
            self.store.clone(),
            self.store.clone(),
        );
        writer.set_real_time_versioning(self.config.job.real_time_versioning);

        let records = ProductReader::new(input).read_all().await?;
        let runner = JobRunner::new(self.config.job.chunk_size);
        runner.run(&mut writer, records).await
    }
}
