//! Cache clearing and object detaching ports
//!
//! Memory/identity-map hygiene for long-running batch jobs: the per-chunk
//! clear + detach sequence is what bounds memory growth across the whole
//! job.

use crate::core::models::ProductRecord;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Hook invoked on a full cache clear
///
/// Collaborators owning deferred work (e.g. a buffered version recorder)
/// register one so job finalization forces their flush.
#[async_trait]
pub trait CacheLifecycleHook: Send + Sync {
    /// Called once per full clear
    async fn on_full_clear(&self) -> Result<()>;
}

/// Port for clearing the transaction-scoped cache
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CacheClearer: Send + Sync {
    /// Clear the scoped cache
    ///
    /// `full = false` is the cheap per-chunk clear. `full = true` is the
    /// end-of-job clear: it additionally runs every registered
    /// [`CacheLifecycleHook`].
    async fn clear(&self, full: bool) -> Result<()>;
}

/// Port for removing a single record from in-memory tracking
///
/// Detaching makes the record's object graph eligible for reclamation
/// before the next chunk arrives.
#[cfg_attr(test, mockall::automock)]
pub trait ObjectDetacher: Send + Sync {
    /// Detach one record; a no-op when the record was never tracked
    fn detach(&self, record: &ProductRecord);
}
