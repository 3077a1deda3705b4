//! Bulk product writer
//!
//! The ingestion stage: consumes one chunk of product records per `write`
//! call, keeps media, versioning and the identity map consistent with the
//! persisted stream, and accounts per-record outcomes.

use crate::core::ingest::config_fields::{ConfigurationField, FieldKind};
use crate::core::ingest::report::{COUNTER_CREATE, COUNTER_UPDATE, StepReport};
use crate::core::models::ProductRecord;
use crate::core::traits::{
    BulkSaver, CacheClearer, MediaResolver, ObjectDetacher, SaveOptions, VersionRecorder,
};
use crate::utils::error::Result;
use std::sync::Arc;
use tracing::{debug, warn};

/// Bulk ingestion stage for product records
///
/// One instance handles one partition of a job: chunks are written
/// strictly one at a time and the outcome counters are private to the
/// instance. All collaborators are wired at construction, so a writer
/// that exists is a writer that can run.
pub struct ProductWriter {
    media_resolver: Arc<dyn MediaResolver>,
    cache_clearer: Arc<dyn CacheClearer>,
    version_recorder: Arc<dyn VersionRecorder>,
    saver: Arc<dyn BulkSaver>,
    detacher: Arc<dyn ObjectDetacher>,
    real_time_versioning: bool,
    report: StepReport,
}

impl ProductWriter {
    /// Create a writer with all collaborators wired
    pub fn new(
        media_resolver: Arc<dyn MediaResolver>,
        cache_clearer: Arc<dyn CacheClearer>,
        version_recorder: Arc<dyn VersionRecorder>,
        saver: Arc<dyn BulkSaver>,
        detacher: Arc<dyn ObjectDetacher>,
    ) -> Self {
        Self {
            media_resolver,
            cache_clearer,
            version_recorder,
            saver,
            detacher,
            real_time_versioning: true,
            report: StepReport::new(),
        }
    }

    /// Configuration schema consumed by an external job-configuration UI
    pub fn configuration_fields() -> Vec<ConfigurationField> {
        vec![ConfigurationField {
            name: "real_time_versioning",
            kind: FieldKind::Switch,
            label: "Real-time versioning",
            help: "Record change versions synchronously with each save; \
                   turn off for large imports to batch version writes",
        }]
    }

    /// Set the versioning mode applied to subsequent chunks
    ///
    /// Takes effect on the next `write` call only, never retroactively on
    /// an in-flight chunk.
    pub fn set_real_time_versioning(&mut self, real_time: bool) {
        self.real_time_versioning = real_time;
    }

    /// Current versioning-mode flag
    pub fn is_real_time_versioning(&self) -> bool {
        self.real_time_versioning
    }

    /// Outcome counters and warnings accumulated so far
    pub fn report(&self) -> &StepReport {
        &self.report
    }

    /// Consume the writer, yielding its report
    pub fn into_report(self) -> StepReport {
        self.report
    }

    /// Write one chunk of records
    ///
    /// Collaborator errors propagate unmodified; the chunk is the unit of
    /// failure and nothing in it is retried here. Media resolution is the
    /// one non-fatal step: its per-record failures land in the report as
    /// warnings while the chunk still persists.
    pub async fn write(&mut self, mut items: Vec<ProductRecord>) -> Result<()> {
        // Mode must be fixed before the first record of the chunk is saved.
        self.version_recorder
            .set_real_time(self.real_time_versioning);

        // Classify before persistence: the saver assigns identities to new
        // records, which would corrupt the create/update split afterwards.
        for item in &items {
            self.increment_count(item);
        }

        let warnings = self.media_resolver.resolve_all(&mut items).await;
        if !warnings.is_empty() {
            warn!(
                count = warnings.len(),
                "media resolution produced warnings"
            );
        }
        self.report.add_warnings(warnings);

        self.saver
            .save_all(&mut items, SaveOptions::without_recalculation())
            .await?;

        self.cache_clearer.clear(false).await?;
        for item in &items {
            self.detacher.detach(item);
        }

        debug!(records = items.len(), "chunk written");
        Ok(())
    }

    /// Finalize the job after the last chunk
    ///
    /// Performs the full cache clear, which also forces registered
    /// deferred work (buffered version entries) to flush. Safe to call
    /// when no chunk was ever written.
    pub async fn finalize(&mut self) -> Result<()> {
        self.cache_clearer.clear(true).await
    }

    fn increment_count(&mut self, record: &ProductRecord) {
        if record.id.is_some() {
            self.report.increment(COUNTER_UPDATE);
        } else {
            self.report.increment(COUNTER_CREATE);
        }
    }
}
