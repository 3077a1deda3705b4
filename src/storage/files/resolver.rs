//! Chunk-level media resolver backed by the local media store

use crate::core::models::{MediaState, MediaWarning, ProductRecord};
use crate::core::traits::MediaResolver;
use crate::storage::files::store::LocalMediaStore;
use async_trait::async_trait;
use tracing::trace;

/// Media resolver that materializes pending references through a
/// [`LocalMediaStore`]
///
/// Failures stay per-record: a missing asset produces one warning and the
/// rest of the chunk keeps resolving.
pub struct StoreMediaResolver {
    store: LocalMediaStore,
}

impl StoreMediaResolver {
    /// Create a resolver over the given store
    pub fn new(store: LocalMediaStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl MediaResolver for StoreMediaResolver {
    async fn resolve_all(&self, records: &mut [ProductRecord]) -> Vec<MediaWarning> {
        let mut warnings = Vec::new();

        for record in records.iter_mut() {
            let identifier = record.identifier.clone();
            for media in record.media.iter_mut() {
                let MediaState::Pending { source_path } = &media.state else {
                    continue;
                };
                match self.store.store(source_path).await {
                    Ok(stored) => {
                        trace!(identifier = %identifier, key = %stored.key, "media resolved");
                        media.state = MediaState::Stored {
                            key: stored.key,
                            original_filename: stored.original_filename,
                            hash: stored.hash,
                            size: stored.size,
                        };
                    }
                    Err(e) => warnings.push(MediaWarning {
                        identifier: identifier.clone(),
                        attribute: media.attribute.clone(),
                        reason: e.to_string(),
                    }),
                }
            }
        }

        warnings
    }
}
