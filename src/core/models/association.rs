//! Group associations
//!
//! An immutable value object linking a product record to a product group
//! with a quantity and an association-type tag. Owned by the record that
//! declares it; carries no back-reference.

use crate::core::models::record::is_valid_code;
use crate::utils::error::{PipelineError, Result};
use serde::{Deserialize, Serialize};

/// Association between a product record and a group
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupAssociation {
    group_code: String,
    quantity: u32,
    association_type: String,
}

impl GroupAssociation {
    /// Create an association
    ///
    /// Both codes must match the catalog code grammar.
    pub fn new(
        group_code: impl Into<String>,
        quantity: u32,
        association_type: impl Into<String>,
    ) -> Result<Self> {
        let group_code = group_code.into();
        let association_type = association_type.into();
        if !is_valid_code(&group_code) {
            return Err(PipelineError::validation(format!(
                "invalid group code '{}'",
                group_code
            )));
        }
        if !is_valid_code(&association_type) {
            return Err(PipelineError::validation(format!(
                "invalid association type '{}'",
                association_type
            )));
        }
        Ok(Self {
            group_code,
            quantity,
            association_type,
        })
    }

    /// Target group code
    pub fn group_code(&self) -> &str {
        &self.group_code
    }

    /// Associated quantity
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Association-type tag (e.g. "pack", "substitution")
    pub fn association_type(&self) -> &str {
        &self.association_type
    }
}

impl std::fmt::Display for GroupAssociation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}_{}", self.group_code, self.quantity)
    }
}
