//! Derived, per-request comparison artifacts.
//!
//! Nothing here is persisted; every value is rebuilt on each comparison.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::{AttributeType, OptionId, Percentage, Rating};

use super::vocabulary;

/// Display form of one attribute of one option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeValue {
    pub value: String,
    pub rating: Rating,
    pub icon: String,
}

impl AttributeValue {
    pub fn new(attribute_type: AttributeType, value: impl Into<String>, rating: Rating) -> Self {
        Self {
            value: value.into(),
            rating,
            icon: vocabulary::icon(attribute_type).to_string(),
        }
    }

    /// Stand-in for an attribute the catalog has no row for.
    pub fn placeholder(attribute_type: AttributeType) -> Self {
        Self::new(attribute_type, vocabulary::NOT_AVAILABLE, Rating::Medium)
    }
}

/// The four attributes of an option, always fully populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionAttributes {
    pub cost_model: AttributeValue,
    pub scalability: AttributeValue,
    pub complexity: AttributeValue,
    pub maintenance: AttributeValue,
}

impl OptionAttributes {
    /// Returns the value for an attribute type.
    pub fn get(&self, attribute_type: AttributeType) -> &AttributeValue {
        match attribute_type {
            AttributeType::CostModel => &self.cost_model,
            AttributeType::Scalability => &self.scalability,
            AttributeType::Complexity => &self.complexity,
            AttributeType::Maintenance => &self.maintenance,
        }
    }

    /// Returns the rating for an attribute type.
    pub fn rating(&self, attribute_type: AttributeType) -> Rating {
        self.get(attribute_type).rating
    }
}

/// One surviving option with its computed fit score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionComparison {
    pub id: OptionId,
    pub name: String,
    pub description: String,
    pub attributes: OptionAttributes,
    pub score: Percentage,
}

/// attribute type → option id → value. Absent combinations are omitted.
pub type AttributeMatrix = BTreeMap<AttributeType, BTreeMap<OptionId, AttributeValue>>;

/// Output of the scoring engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// Options that survived integration filtering, in input order.
    pub options: Vec<OptionComparison>,
    pub matrix: AttributeMatrix,
}

impl ComparisonResult {
    /// Minimum number of surviving options for a meaningful comparison.
    pub const REQUIRED_OPTIONS: usize = 2;

    /// Returns true when at least two options survived filtering.
    pub fn has_enough_options(&self) -> bool {
        self.options.len() >= Self::REQUIRED_OPTIONS
    }

    /// Looks up a surviving option by id.
    pub fn option(&self, id: &OptionId) -> Option<&OptionComparison> {
        self.options.iter().find(|o| &o.id == id)
    }
}

/// Strengths, weaknesses and fit narrative for one option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionAnalysis {
    pub id: OptionId,
    pub name: String,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub fit_score: Percentage,
    pub fit_reason: String,
}

/// Natural-language explanation of a comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeOffExplanation {
    pub summary: String,
    pub option_analysis: Vec<OptionAnalysis>,
    pub constraint_impact: Vec<String>,
}

/// Conditional recommendation: which option to pick depending on which
/// factor matters more.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PivotResult {
    pub statement: String,
    /// Attribute type identifier of the deciding factor, or "N/A".
    pub primary_factor: String,
    pub secondary_factor: String,
    /// Option recommended if the primary factor matters more.
    pub option_a: String,
    /// Option recommended otherwise.
    pub option_b: String,
}

impl PivotResult {
    /// Result used when fewer than two options are available.
    pub fn unavailable() -> Self {
        let na = vocabulary::NOT_AVAILABLE.to_string();
        Self {
            statement: vocabulary::PIVOT_UNAVAILABLE.to_string(),
            primary_factor: na.clone(),
            secondary_factor: na.clone(),
            option_a: na.clone(),
            option_b: na,
        }
    }

    /// Returns true when this is the "unable to generate" result.
    pub fn is_unavailable(&self) -> bool {
        self.statement == vocabulary::PIVOT_UNAVAILABLE
    }
}
