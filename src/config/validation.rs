//! Configuration validation
//!
//! Per-section validation logic for the configuration structures.

use super::models::{JobConfig, LoggingConfig, StorageConfig};

/// Validation contract implemented by every configuration section
pub trait Validate {
    /// Check the section for invalid or contradictory settings
    fn validate(&self) -> Result<(), String>;
}

impl Validate for JobConfig {
    fn validate(&self) -> Result<(), String> {
        if self.chunk_size == 0 {
            return Err("chunk_size must be greater than zero".to_string());
        }
        if self.author.trim().is_empty() {
            return Err("author must not be blank".to_string());
        }
        Ok(())
    }
}

impl Validate for StorageConfig {
    fn validate(&self) -> Result<(), String> {
        if self.media_root.as_os_str().is_empty() {
            return Err("media_root must not be empty".to_string());
        }
        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        match self.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            other => Err(format!("unknown log level '{}'", other)),
        }
    }
}
