//! Job runner
//!
//! Chunks a record stream and drives the ingestion stage through its two
//! lifecycle hooks: per-chunk `write` and end-of-job `finalize`. This is
//! the reference implementation of the orchestration boundary; a real
//! scheduler would replace it wholesale.

use crate::core::ingest::{ProductWriter, StepReport};
use crate::core::models::ProductRecord;
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

/// Outcome of one job execution
#[derive(Debug, Clone, Serialize)]
pub struct JobSummary {
    /// Unique execution id
    pub execution_id: Uuid,
    /// Number of records handed to the writer
    pub total_records: usize,
    /// Number of chunks written
    pub chunks: usize,
    /// Start timestamp
    pub started_at: DateTime<Utc>,
    /// Finish timestamp
    pub finished_at: DateTime<Utc>,
    /// Outcome counters and warnings
    pub report: StepReport,
}

/// Drives a writer over a full record stream
pub struct JobRunner {
    chunk_size: usize,
}

impl JobRunner {
    /// Create a runner with the given chunk size
    ///
    /// A zero chunk size is lifted to one; config validation rejects it
    /// earlier for configured jobs.
    pub fn new(chunk_size: usize) -> Self {
        Self {
            chunk_size: chunk_size.max(1),
        }
    }

    /// Configured chunk size
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Run the whole job: write every chunk, then finalize
    pub async fn run(
        &self,
        writer: &mut ProductWriter,
        records: Vec<ProductRecord>,
    ) -> Result<JobSummary> {
        let execution_id = Uuid::new_v4();
        let started_at = Utc::now();
        let total_records = records.len();
        info!(%execution_id, records = total_records, chunk_size = self.chunk_size, "job started");

        let mut chunks = 0;
        let mut remaining = records;
        while !remaining.is_empty() {
            let tail = remaining.split_off(remaining.len().min(self.chunk_size));
            let chunk = std::mem::replace(&mut remaining, tail);
            writer.write(chunk).await?;
            chunks += 1;
            info!(%execution_id, chunk = chunks, "chunk completed");
        }

        writer.finalize().await?;
        let finished_at = Utc::now();
        info!(%execution_id, chunks, "job finished");

        Ok(JobSummary {
            execution_id,
            total_records,
            chunks,
            started_at,
            finished_at,
            report: writer.report().clone(),
        })
    }
}
