//! Domain models for the ingestion pipeline

pub mod association;
pub mod media;
pub mod record;
pub mod value;

pub use association::GroupAssociation;
pub use media::{MediaReference, MediaState, MediaWarning};
pub use record::{ProductRecord, RecordId, is_valid_code};
pub use value::{AttributeValue, ValueData};
