//! Media references and resolution warnings

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Resolution state of a media reference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum MediaState {
    /// Externally referenced, not yet materialized
    Pending {
        /// Source location of the asset
        source_path: PathBuf,
    },
    /// Materialized into the media store
    Stored {
        /// Store key (content-addressed)
        key: String,
        /// Original file name, kept for exports
        original_filename: String,
        /// Hex-encoded SHA-256 of the content
        hash: String,
        /// Content size in bytes
        size: u64,
    },
}

/// A media attachment declared by a product record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaReference {
    /// Attribute code the media belongs to
    pub attribute: String,
    /// Resolution state
    #[serde(flatten)]
    pub state: MediaState,
}

impl MediaReference {
    /// Create a pending reference to an external asset
    pub fn pending(attribute: impl Into<String>, source_path: impl Into<PathBuf>) -> Self {
        Self {
            attribute: attribute.into(),
            state: MediaState::Pending {
                source_path: source_path.into(),
            },
        }
    }

    /// Whether the reference has been materialized
    pub fn is_resolved(&self) -> bool {
        matches!(self.state, MediaState::Stored { .. })
    }
}

/// Non-fatal, per-record media resolution failure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaWarning {
    /// Identifier of the record whose media failed to resolve
    pub identifier: String,
    /// Attribute code of the failed reference
    pub attribute: String,
    /// Failure description
    pub reason: String,
}

impl std::fmt::Display for MediaWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "media for '{}' attribute '{}' could not be resolved: {}",
            self.identifier, self.attribute, self.reason
        )
    }
}
