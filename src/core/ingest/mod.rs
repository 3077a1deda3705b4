//! Bulk ingestion stage
//!
//! The batch item-writer at the core of the pipeline: per-chunk
//! orchestration of versioning mode, outcome accounting, media resolution,
//! bulk persistence and cache hygiene.

mod config_fields;
mod report;
mod writer;


// Re-export all public types
pub use config_fields::{ConfigurationField, FieldKind};
pub use report::{COUNTER_CREATE, COUNTER_UPDATE, StepReport};
pub use writer::ProductWriter;
