//! Local filesystem media store

use crate::config::StorageConfig;
use crate::utils::error::{PipelineError, Result};
use bytes::Bytes;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use tracing::trace;

/// Result of materializing one media asset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredMedia {
    /// Content-addressed store key
    pub key: String,
    /// Original file name of the source asset
    pub original_filename: String,
    /// Hex-encoded SHA-256 of the content
    pub hash: String,
    /// Content size in bytes
    pub size: u64,
}

/// Filesystem-backed media store
///
/// Assets land under `root` at `{hash[..2]}/{hash}{ext}`. Storing the same
/// content twice yields the same key, so re-imports do not duplicate files.
#[derive(Debug, Clone)]
pub struct LocalMediaStore {
    root: PathBuf,
}

impl LocalMediaStore {
    /// Create a store rooted at the given directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Create a store from the storage configuration
    pub fn from_config(config: &StorageConfig) -> Self {
        Self::new(config.media_root.clone())
    }

    /// Root directory of the store
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Materialize a source file into the store
    pub async fn store(&self, source: &Path) -> Result<StoredMedia> {
        let data = tokio::fs::read(source).await.map_err(|e| {
            PipelineError::media(format!("cannot read '{}': {}", source.display(), e))
        })?;
        let original_filename = source
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| {
                PipelineError::media(format!("'{}' has no file name", source.display()))
            })?;
        self.store_bytes(&original_filename, Bytes::from(data)).await
    }

    /// Materialize in-memory content into the store
    pub async fn store_bytes(&self, original_filename: &str, data: Bytes) -> Result<StoredMedia> {
        let hash = hex::encode(Sha256::digest(&data));
        let extension = Path::new(original_filename)
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy()))
            .unwrap_or_default();
        let key = format!("{}/{}{}", &hash[..2], hash, extension);

        let target = self.root.join(&key);
        if let Some(parent) = target.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                PipelineError::media(format!("cannot create '{}': {}", parent.display(), e))
            })?;
        }
        if tokio::fs::try_exists(&target).await.unwrap_or(false) {
            trace!(key = %key, "media already stored");
        } else {
            tokio::fs::write(&target, &data).await.map_err(|e| {
                PipelineError::media(format!("cannot write '{}': {}", target.display(), e))
            })?;
        }

        Ok(StoredMedia {
            key,
            original_filename: original_filename.to_string(),
            hash,
            size: data.len() as u64,
        })
    }
}
