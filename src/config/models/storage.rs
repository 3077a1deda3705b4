//! Media storage configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Media storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Root directory for materialized media files
    #[serde(default = "default_media_root")]
    pub media_root: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            media_root: default_media_root(),
        }
    }
}

fn default_media_root() -> PathBuf {
    PathBuf::from("./media")
}
