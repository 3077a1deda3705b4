//! Step execution report
//!
//! Per-stage accumulator for outcome counters and media warnings. Owned by
//! one writer instance so parallel stage instances stay isolated; there is
//! no process-wide state.

use crate::core::models::MediaWarning;
use serde::Serialize;
use std::collections::BTreeMap;

/// Counter name for records persisted for the first time
pub const COUNTER_CREATE: &str = "create";

/// Counter name for records that already had an identity
pub const COUNTER_UPDATE: &str = "update";

/// Running totals and warnings for one job execution
///
/// Counters are only ever incremented; they are read by job reporting once
/// the job completes.
#[derive(Debug, Clone, Default, Serialize)]
pub struct StepReport {
    counters: BTreeMap<String, u64>,
    warnings: Vec<MediaWarning>,
}

impl StepReport {
    /// Create an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment a named counter by one
    pub fn increment(&mut self, name: &str) {
        *self.counters.entry(name.to_string()).or_insert(0) += 1;
    }

    /// Current value of a named counter
    pub fn counter(&self, name: &str) -> u64 {
        self.counters.get(name).copied().unwrap_or(0)
    }

    /// Records counted as created
    pub fn created(&self) -> u64 {
        self.counter(COUNTER_CREATE)
    }

    /// Records counted as updated
    pub fn updated(&self) -> u64 {
        self.counter(COUNTER_UPDATE)
    }

    /// Sum of all counters
    pub fn total(&self) -> u64 {
        self.counters.values().sum()
    }

    /// Append media warnings collected for a chunk
    pub fn add_warnings(&mut self, warnings: impl IntoIterator<Item = MediaWarning>) {
        self.warnings.extend(warnings);
    }

    /// All media warnings collected so far
    pub fn warnings(&self) -> &[MediaWarning] {
        &self.warnings
    }
}
