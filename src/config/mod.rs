//! Configuration management for the ingestion pipeline
//!
//! This module handles loading and validation of all importer configuration.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{PipelineError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct for the importer
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct Config {
    /// Job execution configuration
    #[serde(default)]
    pub job: JobConfig,
    /// Media storage configuration
    #[serde(default)]
    pub storage: StorageConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| PipelineError::Config(format!("Failed to read config file: {}", e)))?;

        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| PipelineError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables
    ///
    /// Recognized variables: `PIM_CHUNK_SIZE`, `PIM_AUTHOR`,
    /// `PIM_REAL_TIME_VERSIONING`, `PIM_MEDIA_ROOT`, `PIM_LOG_LEVEL`.
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let mut config = Config::default();

        if let Ok(size) = std::env::var("PIM_CHUNK_SIZE") {
            config.job.chunk_size = size
                .parse()
                .map_err(|e| PipelineError::Config(format!("Invalid PIM_CHUNK_SIZE: {}", e)))?;
        }
        if let Ok(author) = std::env::var("PIM_AUTHOR") {
            config.job.author = author;
        }
        if let Ok(real_time) = std::env::var("PIM_REAL_TIME_VERSIONING") {
            config.job.real_time_versioning = real_time.parse().map_err(|e| {
                PipelineError::Config(format!("Invalid PIM_REAL_TIME_VERSIONING: {}", e))
            })?;
        }
        if let Ok(root) = std::env::var("PIM_MEDIA_ROOT") {
            config.storage.media_root = root.into();
        }
        if let Ok(level) = std::env::var("PIM_LOG_LEVEL") {
            config.logging.level = level;
        }

        config.validate()?;
        Ok(config)
    }

    /// Get job configuration
    pub fn job(&self) -> &JobConfig {
        &self.job
    }

    /// Get storage configuration
    pub fn storage(&self) -> &StorageConfig {
        &self.storage
    }

    /// Get logging configuration
    pub fn logging(&self) -> &LoggingConfig {
        &self.logging
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.job
            .validate()
            .map_err(|e| PipelineError::Config(format!("Job config error: {}", e)))?;

        self.storage
            .validate()
            .map_err(|e| PipelineError::Config(format!("Storage config error: {}", e)))?;

        self.logging
            .validate()
            .map_err(|e| PipelineError::Config(format!("Logging config error: {}", e)))?;

        debug!("Configuration validation completed");
        Ok(())
    }
}
