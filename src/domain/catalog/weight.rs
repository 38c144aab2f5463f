//! Weight - base importance of an attribute type plus scalability modifiers.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AttributeType, ScalabilityPriority, ValidationError};

/// Importance of one attribute type.
///
/// `default_weight` values conventionally sum to about 1.0 across all types.
/// The modifier matching the user's scalability priority is applied
/// multiplicatively. All four numbers are finite and non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "WeightRecord", into = "WeightRecord")]
pub struct Weight {
    attribute_type: AttributeType,
    default_weight: f64,
    low_modifier: f64,
    medium_modifier: f64,
    high_modifier: f64,
}

impl Weight {
    /// Creates a weight, rejecting negative or non-finite numbers.
    pub fn new(
        attribute_type: AttributeType,
        default_weight: f64,
        low_modifier: f64,
        medium_modifier: f64,
        high_modifier: f64,
    ) -> Result<Self, ValidationError> {
        check_non_negative("default_weight", default_weight)?;
        check_non_negative("low_modifier", low_modifier)?;
        check_non_negative("medium_modifier", medium_modifier)?;
        check_non_negative("high_modifier", high_modifier)?;

        Ok(Self {
            attribute_type,
            default_weight,
            low_modifier,
            medium_modifier,
            high_modifier,
        })
    }

    /// Creates a weight whose modifiers are all 1.0.
    pub fn flat(attribute_type: AttributeType, default_weight: f64) -> Result<Self, ValidationError> {
        Self::new(attribute_type, default_weight, 1.0, 1.0, 1.0)
    }

    pub fn attribute_type(&self) -> AttributeType {
        self.attribute_type
    }

    pub fn default_weight(&self) -> f64 {
        self.default_weight
    }

    /// Returns the modifier column selected by the given priority.
    pub fn modifier_for(&self, priority: ScalabilityPriority) -> f64 {
        match priority {
            ScalabilityPriority::Low => self.low_modifier,
            ScalabilityPriority::Medium => self.medium_modifier,
            ScalabilityPriority::High => self.high_modifier,
        }
    }
}

fn check_non_negative(field: &str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::invalid_format(field, "must be a finite number"));
    }
    if value < 0.0 {
        return Err(ValidationError::out_of_range(field, 0.0, f64::MAX, value));
    }
    Ok(())
}

/// Unvalidated wire form of [`Weight`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct WeightRecord {
    attribute_type: AttributeType,
    default_weight: f64,
    #[serde(default = "unit_modifier")]
    low_modifier: f64,
    #[serde(default = "unit_modifier")]
    medium_modifier: f64,
    #[serde(default = "unit_modifier")]
    high_modifier: f64,
}

fn unit_modifier() -> f64 {
    1.0
}

impl TryFrom<WeightRecord> for Weight {
    type Error = ValidationError;

    fn try_from(r: WeightRecord) -> Result<Self, Self::Error> {
        Weight::new(
            r.attribute_type,
            r.default_weight,
            r.low_modifier,
            r.medium_modifier,
            r.high_modifier,
        )
    }
}

impl From<Weight> for WeightRecord {
    fn from(w: Weight) -> Self {
        Self {
            attribute_type: w.attribute_type,
            default_weight: w.default_weight,
            low_modifier: w.low_modifier,
            medium_modifier: w.medium_modifier,
            high_modifier: w.high_modifier,
        }
    }
}
