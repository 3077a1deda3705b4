//! Job execution configuration

use serde::{Deserialize, Serialize};

/// Job execution configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobConfig {
    /// Number of records handed to the writer per chunk
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
    /// Author recorded on every version entry written by the job
    #[serde(default = "default_author")]
    pub author: String,
    /// Record change versions synchronously with each save
    ///
    /// When false, version entries are buffered and flushed at the end of
    /// the job. Large imports turn this off to keep per-chunk work flat.
    #[serde(default = "default_real_time_versioning")]
    pub real_time_versioning: bool,
}

impl Default for JobConfig {
    fn default() -> Self {
        Self {
            chunk_size: default_chunk_size(),
            author: default_author(),
            real_time_versioning: default_real_time_versioning(),
        }
    }
}

fn default_chunk_size() -> usize {
    100
}

fn default_author() -> String {
    "batch".to_string()
}

fn default_real_time_versioning() -> bool {
    true
}
