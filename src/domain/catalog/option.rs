//! TechOption - a named technical choice available for comparison.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::OptionId;

/// A technical option (a database, a compute platform, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechOption {
    pub id: OptionId,
    pub name: String,
    pub description: String,
    /// Grouping used to offer like-for-like comparisons ("database", "compute").
    pub category: String,
}

impl TechOption {
    /// Creates a new option.
    pub fn new(
        id: OptionId,
        name: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            category: category.into(),
        }
    }
}
