//! Service implementations layered on the core ports

pub mod versioning;

pub use versioning::{ChangeLog, VersionEntry};
