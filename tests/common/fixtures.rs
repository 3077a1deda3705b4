//! Record fixtures and pipeline builders shared across integration tests

use pim_ingest_rs::core::ingest::ProductWriter;
use pim_ingest_rs::core::models::{AttributeValue, ProductRecord, RecordId, ValueData};
use pim_ingest_rs::services::versioning::ChangeLog;
use pim_ingest_rs::storage::files::{LocalMediaStore, StoreMediaResolver};
use pim_ingest_rs::storage::memory::CatalogStore;
use std::path::Path;
use std::sync::Arc;

/// A new record with the given identifier
pub fn new_record(identifier: &str) -> ProductRecord {
    ProductRecord::new(identifier).expect("valid identifier")
}

/// A record that already carries a persisted identity
pub fn existing_record(identifier: &str, id: u64) -> ProductRecord {
    let mut record = new_record(identifier);
    record.assign_id(RecordId::new(id)).expect("fresh record");
    record
}

/// A record with one text attribute value
pub fn named_record(identifier: &str, name: &str) -> ProductRecord {
    let mut record = new_record(identifier);
    record.values.push(AttributeValue::new(
        "name",
        ValueData::Text {
            text: name.to_string(),
        },
    ));
    record
}

/// A fully wired pipeline over the reference adapters
pub struct Pipeline {
    pub writer: ProductWriter,
    pub store: Arc<CatalogStore>,
    pub change_log: Arc<ChangeLog>,
}

/// Build a pipeline whose media store lives under `media_root`
pub fn wired_pipeline(media_root: &Path) -> Pipeline {
    let change_log = Arc::new(ChangeLog::new());
    let store = Arc::new(CatalogStore::new("tester").with_recorder(change_log.clone()));
    store.register_hook(change_log.clone());

    let writer = ProductWriter::new(
        Arc::new(StoreMediaResolver::new(LocalMediaStore::new(media_root))),
        store.clone(),
        change_log.clone(),
        store.clone(),
        store.clone(),
    );

    Pipeline {
        writer,
        store,
        change_log,
    }
}
