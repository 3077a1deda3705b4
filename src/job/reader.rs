//! Product input reader
//!
//! Reads product records from a JSON-lines file, one record per line.
//! Parse failures carry the 1-based line number so a broken import file
//! can be fixed without guessing.

use crate::core::models::{ProductRecord, is_valid_code};
use crate::utils::error::{PipelineError, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// JSON-lines reader for product records
pub struct ProductReader {
    path: PathBuf,
}

impl ProductReader {
    /// Create a reader for the given file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Input file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and validate every record in the file
    ///
    /// Blank lines are skipped. The first malformed line aborts the read.
    pub async fn read_all(&self) -> Result<Vec<ProductRecord>> {
        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            PipelineError::Config(format!(
                "cannot read input file '{}': {}",
                self.path.display(),
                e
            ))
        })?;

        let mut records = Vec::new();
        for (index, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let record: ProductRecord = serde_json::from_str(line)
                .map_err(|e| PipelineError::reader(index + 1, e.to_string()))?;
            if !is_valid_code(&record.identifier) {
                return Err(PipelineError::reader(
                    index + 1,
                    format!("invalid product identifier '{}'", record.identifier),
                ));
            }
            records.push(record);
        }

        debug!(records = records.len(), path = %self.path.display(), "input file read");
        Ok(records)
    }
}
