//! Reader, runner and importer end to end

use crate::common::fixtures::{new_record, wired_pipeline};
use pim_ingest_rs::core::traits::VersionRecorder;
use pim_ingest_rs::job::{JobRunner, ProductReader};
use pim_ingest_rs::{Config, Importer};

// ==================== Runner ====================

#[tokio::test]
async fn test_runner_chunks_by_configured_size() {
    let dir = tempfile::tempdir().unwrap();
    let mut pipeline = wired_pipeline(dir.path());

    let records = (0..5).map(|i| new_record(&format!("sku_{}", i))).collect();
    let summary = JobRunner::new(2)
        .run(&mut pipeline.writer, records)
        .await
        .unwrap();

    // 5 records at chunk size 2 -> chunks of 2, 2 and 1.
    assert_eq!(summary.chunks, 3);
    assert_eq!(summary.total_records, 5);
    assert_eq!(summary.report.created(), 5);
    assert_eq!(pipeline.store.len(), 5);
    assert!(summary.finished_at >= summary.started_at);
}

#[tokio::test]
async fn test_runner_finalizes_after_last_chunk() {
    let dir = tempfile::tempdir().unwrap();
    let mut pipeline = wired_pipeline(dir.path());
    pipeline.writer.set_real_time_versioning(false);

    let records = (0..4).map(|i| new_record(&format!("sku_{}", i))).collect();
    JobRunner::new(2)
        .run(&mut pipeline.writer, records)
        .await
        .unwrap();

    // The runner's finalize forced the deferred buffer to flush.
    assert_eq!(pipeline.change_log.pending(), 0);
    assert_eq!(pipeline.change_log.committed().len(), 4);
}

#[tokio::test]
async fn test_runner_with_no_records() {
    let dir = tempfile::tempdir().unwrap();
    let mut pipeline = wired_pipeline(dir.path());

    let summary = JobRunner::new(10)
        .run(&mut pipeline.writer, Vec::new())
        .await
        .unwrap();

    assert_eq!(summary.chunks, 0);
    assert_eq!(summary.report.total(), 0);
}

// ==================== Reader ====================

#[tokio::test]
async fn test_reader_feeds_runner() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("products.jsonl");
    tokio::fs::write(
        &input,
        concat!(
            "{\"identifier\": \"sku_1\", \"family\": \"shirts\"}\n",
            "{\"identifier\": \"sku_2\", \"id\": 42}\n",
        ),
    )
    .await
    .unwrap();

    let records = ProductReader::new(&input).read_all().await.unwrap();
    let mut pipeline = wired_pipeline(dir.path());
    let summary = JobRunner::new(100)
        .run(&mut pipeline.writer, records)
        .await
        .unwrap();

    assert_eq!(summary.report.created(), 1);
    assert_eq!(summary.report.updated(), 1);
}

// ==================== Importer ====================

#[tokio::test]
async fn test_importer_runs_from_config_file() {
    let dir = tempfile::tempdir().unwrap();

    let config_path = dir.path().join("importer.yaml");
    let media_root = dir.path().join("media");
    tokio::fs::write(
        &config_path,
        format!(
            "job:\n  chunk_size: 2\n  author: import_bot\n  real_time_versioning: false\nstorage:\n  media_root: {}\n",
            media_root.display()
        ),
    )
    .await
    .unwrap();

    let input = dir.path().join("products.jsonl");
    let mut lines = String::new();
    for i in 0..5 {
        lines.push_str(&format!("{{\"identifier\": \"sku_{}\"}}\n", i));
    }
    tokio::fs::write(&input, lines).await.unwrap();

    let config = Config::from_file(&config_path).await.unwrap();
    let importer = Importer::new(config);
    let summary = importer.run(&input).await.unwrap();

    assert_eq!(summary.chunks, 3);
    assert_eq!(summary.report.created(), 5);
    assert_eq!(importer.store().len(), 5);
    // Deferred versioning was configured; finalize flushed everything.
    assert_eq!(importer.change_log().pending(), 0);
    assert_eq!(importer.change_log().committed().len(), 5);
    assert_eq!(importer.change_log().committed()[0].author, "import_bot");
}

#[tokio::test]
async fn test_importer_surfaces_reader_errors() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("products.jsonl");
    tokio::fs::write(&input, "{broken\n").await.unwrap();

    let importer = Importer::new(Config::default());
    let err = importer.run(&input).await.unwrap_err();
    assert!(err.to_string().contains("line 1"));
}
