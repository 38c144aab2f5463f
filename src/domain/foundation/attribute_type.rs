//! AttributeType enum representing the four scored dimensions of an option.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// The four dimensions every option is rated on.
///
/// Declaration order is the canonical order used wherever iteration order
/// matters (scoring, matrix rendering, strength/weakness lists).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeType {
    CostModel,
    Scalability,
    Complexity,
    Maintenance,
}

impl AttributeType {
    /// Returns all attribute types in canonical order.
    pub fn all() -> &'static [AttributeType] {
        &[
            AttributeType::CostModel,
            AttributeType::Scalability,
            AttributeType::Complexity,
            AttributeType::Maintenance,
        ]
    }

    /// Returns the snake_case identifier used in storage and on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            AttributeType::CostModel => "cost_model",
            AttributeType::Scalability => "scalability",
            AttributeType::Complexity => "complexity",
            AttributeType::Maintenance => "maintenance",
        }
    }
}

impl FromStr for AttributeType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AttributeType::all()
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| {
                ValidationError::invalid_format("attribute_type", format!("unknown type '{}'", s))
            })
    }
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
