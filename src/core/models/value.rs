//! Attribute values
//!
//! An attribute value pairs an attribute code with typed data, optionally
//! qualified by locale and channel scope.

use serde::{Deserialize, Serialize};

/// Typed payload of an attribute value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ValueData {
    /// Free text
    Text {
        /// Text content
        text: String,
    },
    /// Numeric value
    Number {
        /// Numeric content
        number: f64,
    },
    /// Boolean flag
    Boolean {
        /// Flag content
        flag: bool,
    },
    /// Reference to a select-attribute option
    OptionCode {
        /// Option code
        code: String,
    },
    /// Measured amount with a unit
    Metric {
        /// Amount
        amount: f64,
        /// Unit code (e.g. "GRAM", "CENTIMETER")
        unit: String,
    },
}

/// One attribute value of a product record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeValue {
    /// Attribute code
    pub attribute: String,
    /// Locale qualifier for localizable attributes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// Channel scope qualifier for scopable attributes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    /// Typed payload
    pub data: ValueData,
}

impl AttributeValue {
    /// Create an unqualified value
    pub fn new(attribute: impl Into<String>, data: ValueData) -> Self {
        Self {
            attribute: attribute.into(),
            locale: None,
            scope: None,
            data,
        }
    }

    /// Qualify the value with a locale
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Qualify the value with a channel scope
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Composite key identifying this value slot within a record
    ///
    /// Two values with the same key describe the same attribute slot and the
    /// later one wins on merge.
    pub fn key(&self) -> String {
        format!(
            "{}-{}-{}",
            self.attribute,
            self.locale.as_deref().unwrap_or("<all>"),
            self.scope.as_deref().unwrap_or("<all>")
        )
    }
}
