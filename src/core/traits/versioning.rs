//! Change-version recording port
//!
//! Abstracts "record a change event per item", switchable between immediate
//! (synchronous) and deferred (batched) recording.

use crate::core::models::ProductRecord;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Port for recording change versions of saved records
///
/// `set_real_time(false)` switches to deferred mode for all subsequent
/// recordings until changed again. Deferred entries must not be lost and
/// are flushed at latest when the job finalizes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VersionRecorder: Send + Sync {
    /// Toggle between immediate and deferred recording
    fn set_real_time(&self, real_time: bool);

    /// Current recording mode
    fn is_real_time(&self) -> bool;

    /// Record one change version for a persisted record
    async fn record(&self, record: &ProductRecord, author: &str) -> Result<()>;

    /// Flush any deferred entries
    async fn flush(&self) -> Result<()>;

    /// Number of buffered entries awaiting flush
    fn pending(&self) -> usize;
}
