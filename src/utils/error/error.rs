//! Error handling for the ingestion pipeline
//!
//! This module defines all error types used throughout the pipeline.

use thiserror::Error;

/// Result type alias for the pipeline
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Main error type for the pipeline
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Persistence errors raised by a bulk saver
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// Change-versioning errors
    #[error("Versioning error: {0}")]
    Versioning(String),

    /// Media storage errors
    #[error("Media error: {0}")]
    Media(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Input reader errors, tied to a 1-based line number
    #[error("Invalid record at line {line}: {message}")]
    Reader {
        /// 1-based line number in the input file
        line: usize,
        /// Parse failure description
        message: String,
    },

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Not found errors
    #[error("Not found: {0}")]
    NotFound(String),

    /// Internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl PipelineError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a persistence error
    pub fn persistence(msg: impl Into<String>) -> Self {
        Self::Persistence(msg.into())
    }

    /// Create a versioning error
    pub fn versioning(msg: impl Into<String>) -> Self {
        Self::Versioning(msg.into())
    }

    /// Create a media error
    pub fn media(msg: impl Into<String>) -> Self {
        Self::Media(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a reader error for the given input line
    pub fn reader(line: usize, message: impl Into<String>) -> Self {
        Self::Reader {
            line,
            message: message.into(),
        }
    }

    /// Whether the error aborts the current chunk
    ///
    /// Every variant except media resolution is fatal to the chunk; media
    /// failures are aggregated as warnings by the resolver and only reach
    /// this type when the media store itself is unusable.
    pub fn is_chunk_fatal(&self) -> bool {
        !matches!(self, Self::Media(_))
    }
}
