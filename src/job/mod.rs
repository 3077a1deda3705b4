//! Job execution
//!
//! The thin reference driver around the ingestion stage: an input reader
//! and a runner that chunks records and invokes the stage's lifecycle
//! hooks.

pub mod reader;
pub mod runner;

pub use reader::ProductReader;
pub use runner::{JobRunner, JobSummary};
