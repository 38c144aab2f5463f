//! Fixed wording and icons used when rendering comparisons.
//!
//! Every table is an exhaustive `match` over a closed enum, so adding an
//! attribute type or priority fails to compile until its wording exists.

use crate::domain::foundation::{AttributeType, ScalabilityPriority};

/// Human-readable name used in pivot statements.
pub fn display_name(attribute_type: AttributeType) -> &'static str {
    match attribute_type {
        AttributeType::CostModel => "cost efficiency",
        AttributeType::Scalability => "scalability",
        AttributeType::Complexity => "implementation simplicity",
        AttributeType::Maintenance => "ease of maintenance",
    }
}

/// Icon shown next to an attribute value.
pub fn icon(attribute_type: AttributeType) -> &'static str {
    match attribute_type {
        AttributeType::CostModel => "💰",
        AttributeType::Scalability => "📈",
        AttributeType::Complexity => "🧩",
        AttributeType::Maintenance => "🔧",
    }
}

/// Phrase listed as a strength when the attribute is rated high.
pub fn strength_phrase(attribute_type: AttributeType) -> &'static str {
    match attribute_type {
        AttributeType::CostModel => "favorable cost model",
        AttributeType::Scalability => "excellent scalability characteristics",
        AttributeType::Complexity => "straightforward implementation",
        AttributeType::Maintenance => "low maintenance overhead",
    }
}

/// Phrase listed as a weakness when the attribute is rated low.
pub fn weakness_phrase(attribute_type: AttributeType) -> &'static str {
    match attribute_type {
        AttributeType::CostModel => "potentially higher costs",
        AttributeType::Scalability => "limited scalability",
        AttributeType::Complexity => "higher implementation complexity",
        AttributeType::Maintenance => "significant maintenance requirements",
    }
}

pub const NO_STRENGTHS: &str = "balanced performance across attributes";
pub const NO_WEAKNESSES: &str = "no significant weaknesses identified";

pub const FIT_SCALABILITY: &str =
    "Strong fit for your high scalability requirements, with room to grow as demand increases";
pub const FIT_COST: &str =
    "Cost-effective choice that aligns with a budget-conscious, low-scalability priority";
pub const FIT_GOOD: &str = "Good overall fit for your stated constraints";
pub const FIT_MODERATE: &str =
    "Moderate fit for your constraints, with trade-offs worth weighing against your priorities";
pub const FIT_CAREFUL: &str = "Requires careful consideration against your requirements";

pub const INSUFFICIENT_OPTIONS: &str =
    "Insufficient options to compare: at least two options must satisfy your constraints.";

pub const PIVOT_UNAVAILABLE: &str =
    "Unable to generate pivot recommendation: at least two options are required";

pub const NOT_AVAILABLE: &str = "N/A";

/// Constraint-impact line for the declared scalability priority.
pub fn priority_impact(priority: ScalabilityPriority) -> &'static str {
    match priority {
        ScalabilityPriority::Low => {
            "Low scalability priority shifts emphasis toward cost efficiency and simplicity"
        }
        ScalabilityPriority::Medium => {
            "Medium scalability priority keeps growth capacity balanced against the other attributes"
        }
        ScalabilityPriority::High => {
            "High scalability priority increases the weight of scalability relative to cost"
        }
    }
}
