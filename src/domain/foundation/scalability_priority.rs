//! How much the user cares about growth capacity.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// User-declared scalability priority; selects the weight modifier column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalabilityPriority {
    Low,
    #[default]
    Medium,
    High,
}

impl ScalabilityPriority {
    /// Returns the lowercase identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScalabilityPriority::Low => "low",
            ScalabilityPriority::Medium => "medium",
            ScalabilityPriority::High => "high",
        }
    }
}

impl FromStr for ScalabilityPriority {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(ScalabilityPriority::Low),
            "medium" => Ok(ScalabilityPriority::Medium),
            "high" => Ok(ScalabilityPriority::High),
            other => Err(ValidationError::invalid_format(
                "scalabilityPriority",
                format!("expected low, medium or high, got '{}'", other),
            )),
        }
    }
}

impl fmt::Display for ScalabilityPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
