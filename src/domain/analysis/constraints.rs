//! Constraints - user-supplied parameters shaping a comparison.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::domain::foundation::{IntegrationId, ScalabilityPriority, ValidationError};

/// Budget range, scalability priority and required integrations.
///
/// Invariant: `budget_max >= budget_min`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ConstraintsRecord", into = "ConstraintsRecord")]
pub struct Constraints {
    budget_min: u64,
    budget_max: u64,
    scalability_priority: ScalabilityPriority,
    required_integrations: BTreeSet<IntegrationId>,
}

impl Constraints {
    /// Creates validated constraints.
    pub fn new(
        budget_min: u64,
        budget_max: u64,
        scalability_priority: ScalabilityPriority,
        required_integrations: impl IntoIterator<Item = IntegrationId>,
    ) -> Result<Self, ValidationError> {
        if budget_max < budget_min {
            return Err(ValidationError::out_of_range(
                "budgetMax",
                budget_min as f64,
                f64::MAX,
                budget_max as f64,
            ));
        }

        Ok(Self {
            budget_min,
            budget_max,
            scalability_priority,
            required_integrations: required_integrations.into_iter().collect(),
        })
    }

    pub fn budget_min(&self) -> u64 {
        self.budget_min
    }

    pub fn budget_max(&self) -> u64 {
        self.budget_max
    }

    pub fn scalability_priority(&self) -> ScalabilityPriority {
        self.scalability_priority
    }

    pub fn required_integrations(&self) -> &BTreeSet<IntegrationId> {
        &self.required_integrations
    }

    /// Returns a copy with a different scalability priority.
    pub fn with_scalability_priority(mut self, priority: ScalabilityPriority) -> Self {
        self.scalability_priority = priority;
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConstraintsRecord {
    budget_min: u64,
    budget_max: u64,
    scalability_priority: ScalabilityPriority,
    #[serde(default)]
    required_integrations: Vec<IntegrationId>,
}

impl TryFrom<ConstraintsRecord> for Constraints {
    type Error = ValidationError;

    fn try_from(r: ConstraintsRecord) -> Result<Self, Self::Error> {
        Constraints::new(
            r.budget_min,
            r.budget_max,
            r.scalability_priority,
            r.required_integrations,
        )
    }
}

impl From<Constraints> for ConstraintsRecord {
    fn from(c: Constraints) -> Self {
        Self {
            budget_min: c.budget_min,
            budget_max: c.budget_max,
            scalability_priority: c.scalability_priority,
            required_integrations: c.required_integrations.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn integration(s: &str) -> IntegrationId {
        IntegrationId::new(s).unwrap()
    }

    #[test]
    fn new_accepts_equal_budget_bounds() {
        let c = Constraints::new(500, 500, ScalabilityPriority::Medium, vec![]).unwrap();
        assert_eq!(c.budget_min(), 500);
        assert_eq!(c.budget_max(), 500);
    }

    #[test]
    fn new_rejects_inverted_budget() {
        let err = Constraints::new(1000, 100, ScalabilityPriority::Low, vec![]).unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { ref field, .. } if field == "budgetMax"));
    }

    #[test]
    fn required_integrations_are_a_set() {
        let c = Constraints::new(
            0,
            10,
            ScalabilityPriority::High,
            vec![integration("stripe"), integration("kafka"), integration("stripe")],
        )
        .unwrap();

        let ids: Vec<&str> = c.required_integrations().iter().map(|i| i.as_str()).collect();
        assert_eq!(ids, vec!["kafka", "stripe"]);
    }

    #[test]
    fn deserializes_camel_case_json() {
        let json = r#"{
            "budgetMin": 100,
            "budgetMax": 2000,
            "scalabilityPriority": "high",
            "requiredIntegrations": ["kafka"]
        }"#;

        let c: Constraints = serde_json::from_str(json).unwrap();
        assert_eq!(c.scalability_priority(), ScalabilityPriority::High);
        assert!(c.required_integrations().contains(&integration("kafka")));
    }

    #[test]
    fn deserialization_rejects_inverted_budget() {
        let json = r#"{"budgetMin": 900, "budgetMax": 100, "scalabilityPriority": "low"}"#;
        let result: Result<Constraints, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn deserialization_rejects_unknown_priority() {
        let json = r#"{"budgetMin": 0, "budgetMax": 100, "scalabilityPriority": "urgent"}"#;
        let result: Result<Constraints, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn with_scalability_priority_keeps_other_fields() {
        let c = Constraints::new(1, 2, ScalabilityPriority::Low, vec![integration("s3")])
            .unwrap()
            .with_scalability_priority(ScalabilityPriority::High);

        assert_eq!(c.scalability_priority(), ScalabilityPriority::High);
        assert_eq!(c.budget_max(), 2);
        assert_eq!(c.required_integrations().len(), 1);
    }
}
