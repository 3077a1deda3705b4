//! Configuration data models
//!
//! One file per configuration section, mirrored by the YAML layout.

pub mod job;
pub mod logging;
pub mod storage;

// Re-export all configuration types
pub use job::*;
pub use logging::*;
pub use storage::*;
