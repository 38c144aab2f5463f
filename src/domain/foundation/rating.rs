//! Rating value object for option attributes (low / medium / high).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Qualitative rating of an option on one attribute.
///
/// Higher is always better for the option: a `High` complexity rating means
/// the option handles complexity well, not that it is complex.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rating {
    Low,
    #[default]
    Medium,
    High,
}

impl Rating {
    /// Returns the numeric score used by weighted scoring (1..=3).
    pub fn score(&self) -> u8 {
        match self {
            Rating::Low => 1,
            Rating::Medium => 2,
            Rating::High => 3,
        }
    }

    /// Highest score any rating can take.
    pub const MAX_SCORE: u8 = 3;

    /// Ordinal rank for head-to-head comparisons. Same scale as [`Rating::score`].
    pub fn rank(&self) -> u8 {
        self.score()
    }

    /// Returns the lowercase identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::Low => "low",
            Rating::Medium => "medium",
            Rating::High => "high",
        }
    }
}

impl FromStr for Rating {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Rating::Low),
            "medium" => Ok(Rating::Medium),
            "high" => Ok(Rating::High),
            other => Err(ValidationError::invalid_format(
                "rating",
                format!("expected low, medium or high, got '{}'", other),
            )),
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
