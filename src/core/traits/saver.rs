//! Bulk persistence port
//!
//! Abstracts "save N records efficiently". Implementations batch writes and
//! may skip derived-data recalculation when asked to.

use crate::core::models::ProductRecord;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Options applied to one bulk save call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveOptions {
    /// Recompute derived/aggregated data (e.g. completeness) per record
    ///
    /// The ingestion stage always disables this; recalculation is deferred
    /// to a dedicated later stage.
    pub recalculate: bool,
}

impl Default for SaveOptions {
    fn default() -> Self {
        Self { recalculate: true }
    }
}

impl SaveOptions {
    /// Options with recalculation disabled, as used during bulk ingestion
    pub fn without_recalculation() -> Self {
        Self { recalculate: false }
    }
}

/// Port for saving many records in one call
///
/// Contract:
/// - an empty slice is a no-op and returns `Ok(())`;
/// - records without an identity get one assigned; an existing identity is
///   never reassigned;
/// - atomicity across the slice is the implementation's own business; the
///   stage assumes none.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BulkSaver: Send + Sync {
    /// Persist all records, in order
    async fn save_all(&self, records: &mut [ProductRecord], options: SaveOptions) -> Result<()>;
}
