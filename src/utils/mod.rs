//! Utility modules for the ingestion pipeline
//!
//! Contains error handling and logging infrastructure shared by every layer.

pub mod error;
pub mod logging;
