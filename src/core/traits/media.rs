//! Media resolution port
//!
//! Chunk-level materialization of externally-referenced media. Resolution
//! is batched because the underlying store has shared setup cost.

use crate::core::models::{MediaWarning, ProductRecord};
use async_trait::async_trait;

/// Port for resolving and attaching media for a whole chunk
///
/// Failures are per-record: one record's missing media must not abort
/// resolution for the rest. The returned warnings are the aggregate of all
/// per-record failures; an empty vector means every reference resolved.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MediaResolver: Send + Sync {
    /// Resolve every pending media reference in place
    async fn resolve_all(&self, records: &mut [ProductRecord]) -> Vec<MediaWarning>;
}
