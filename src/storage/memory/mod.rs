//! In-memory catalog store
//!
//! Reference implementation of the bulk persistence port with the
//! identity-map and cache-lifecycle behavior the ingestion stage relies on.

mod store;

pub use store::{CatalogStore, StoredProduct};
