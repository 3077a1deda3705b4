//! Product record model
//!
//! A [`ProductRecord`] is the unit of work flowing through the pipeline: a
//! product-like entity with an optional persisted identity, attribute
//! values, media references and group associations.

use crate::core::models::association::GroupAssociation;
use crate::core::models::media::MediaReference;
use crate::core::models::value::AttributeValue;
use crate::utils::error::{PipelineError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Grammar accepted for identifiers, attribute codes and group codes
static CODE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9_]+$").expect("code pattern is valid"));

/// Check a code against the catalog code grammar
pub fn is_valid_code(code: &str) -> bool {
    CODE_PATTERN.is_match(code)
}

/// Opaque persisted identity of a record
///
/// Assigned by the persistence port on first save and immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(u64);

impl RecordId {
    /// Wrap a raw identity value
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Raw identity value
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for RecordId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// A product record ready for bulk persistence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Persisted identity; `None` until the record is first saved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    /// Business key (SKU)
    pub identifier: String,
    /// Whether the product is enabled in the catalog
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Family code, when the product belongs to one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    /// Group codes the product belongs to
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<String>,
    /// Attribute values
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<AttributeValue>,
    /// Media references
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub media: Vec<MediaReference>,
    /// Associations to product groups
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub associations: Vec<GroupAssociation>,
}

fn default_enabled() -> bool {
    true
}

impl ProductRecord {
    /// Create a new, not-yet-persisted record
    ///
    /// Fails when the identifier does not match the code grammar.
    pub fn new(identifier: impl Into<String>) -> Result<Self> {
        let identifier = identifier.into();
        if !is_valid_code(&identifier) {
            return Err(PipelineError::validation(format!(
                "invalid product identifier '{}'",
                identifier
            )));
        }
        Ok(Self {
            id: None,
            identifier,
            enabled: true,
            family: None,
            groups: Vec::new(),
            values: Vec::new(),
            media: Vec::new(),
            associations: Vec::new(),
        })
    }

    /// Whether this record has never been persisted
    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    /// Assign the persisted identity
    ///
    /// Errors when an identity is already present: identities are immutable
    /// once assigned.
    pub fn assign_id(&mut self, id: RecordId) -> Result<()> {
        if let Some(existing) = self.id {
            return Err(PipelineError::persistence(format!(
                "record '{}' already has identity {}",
                self.identifier, existing
            )));
        }
        self.id = Some(id);
        Ok(())
    }

    /// Look up a value by attribute code, ignoring locale and scope
    pub fn value(&self, attribute: &str) -> Option<&AttributeValue> {
        self.values.iter().find(|v| v.attribute == attribute)
    }

    /// Attribute codes that currently carry a value
    pub fn filled_attributes(&self) -> Vec<&str> {
        self.values.iter().map(|v| v.attribute.as_str()).collect()
    }

    /// Media references still waiting to be materialized
    pub fn pending_media(&self) -> impl Iterator<Item = &MediaReference> {
        self.media.iter().filter(|m| !m.is_resolved())
    }
}
