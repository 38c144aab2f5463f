//! Attribute - one rated dimension of a single option.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AttributeType, OptionId, Rating};

/// How an option fares on one attribute type.
///
/// A catalog holds at most one attribute per (option, type) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub option_id: OptionId,
    pub attribute_type: AttributeType,
    /// Human-readable value, e.g. "Pay-per-request" or "Horizontal sharding".
    pub value: String,
    pub rating: Rating,
    #[serde(default)]
    pub description: Option<String>,
}

impl Attribute {
    /// Creates an attribute without descriptive text.
    pub fn new(
        option_id: OptionId,
        attribute_type: AttributeType,
        value: impl Into<String>,
        rating: Rating,
    ) -> Self {
        Self {
            option_id,
            attribute_type,
            value: value.into(),
            rating,
            description: None,
        }
    }

    /// Adds descriptive text.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Finds the attribute row for an (option, type) pair. First row wins.
pub fn find_attribute<'a>(
    attributes: &'a [Attribute],
    option_id: &OptionId,
    attribute_type: AttributeType,
) -> Option<&'a Attribute> {
    attributes
        .iter()
        .find(|a| &a.option_id == option_id && a.attribute_type == attribute_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> OptionId {
        OptionId::new(s).unwrap()
    }

    #[test]
    fn find_attribute_matches_option_and_type() {
        let attrs = vec![
            Attribute::new(id("a"), AttributeType::CostModel, "Free tier", Rating::High),
            Attribute::new(id("b"), AttributeType::CostModel, "Licensed", Rating::Low),
        ];

        let found = find_attribute(&attrs, &id("b"), AttributeType::CostModel).unwrap();
        assert_eq!(found.rating, Rating::Low);
        assert!(find_attribute(&attrs, &id("a"), AttributeType::Scalability).is_none());
    }

    #[test]
    fn find_attribute_first_row_wins() {
        let attrs = vec![
            Attribute::new(id("a"), AttributeType::Complexity, "Simple", Rating::High),
            Attribute::new(id("a"), AttributeType::Complexity, "Duplicate", Rating::Low),
        ];

        let found = find_attribute(&attrs, &id("a"), AttributeType::Complexity).unwrap();
        assert_eq!(found.value, "Simple");
    }

    #[test]
    fn attribute_deserializes_without_description() {
        let json = r#"{
            "option_id": "a",
            "attribute_type": "maintenance",
            "value": "Managed",
            "rating": "high"
        }"#;
        let attr: Attribute = serde_json::from_str(json).unwrap();
        assert_eq!(attr.attribute_type, AttributeType::Maintenance);
        assert!(attr.description.is_none());
    }
}
