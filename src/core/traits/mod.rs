//! Core traits module
//!
//! Contains the collaborator port contracts of the ingestion stage.

pub mod cache;
pub mod media;
pub mod saver;
pub mod versioning;

pub use cache::*;
pub use media::*;
pub use saver::*;
pub use versioning::*;
