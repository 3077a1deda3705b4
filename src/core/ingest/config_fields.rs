//! Configuration schema of the ingestion stage
//!
//! Typed field descriptors consumed by an external job-configuration UI.
//! The stage itself only reads the flag values; rendering is someone
//! else's job.

use serde::Serialize;

/// Widget kind of a configuration field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Boolean on/off switch
    Switch,
}

/// One entry of a stage's configuration schema
#[derive(Debug, Clone, Serialize)]
pub struct ConfigurationField {
    /// Field name, matching the stage's setter
    pub name: &'static str,
    /// Widget kind
    pub kind: FieldKind,
    /// Human-readable label
    pub label: &'static str,
    /// Human-readable help text
    pub help: &'static str,
}
