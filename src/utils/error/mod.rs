//! Error handling module
//!
//! Central error type and result alias for the pipeline.

mod error;

pub use error::{PipelineError, Result};
