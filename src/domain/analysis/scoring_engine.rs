//! Scoring Engine - Integration filtering, weighted fit scores, attribute matrix.

use std::collections::{BTreeMap, HashSet};

use crate::domain::catalog::{find_attribute, Attribute, IntegrationSupport, TechOption, Weight};
use crate::domain::foundation::{AttributeType, IntegrationId, OptionId, Percentage, Rating};

use super::{
    AttributeMatrix, AttributeValue, ComparisonResult, Constraints, EffectiveWeights,
    OptionAttributes, OptionComparison, WeightResolver,
};

/// Combines ratings with effective weights into comparable fit scores.
pub struct ScoringEngine;

impl ScoringEngine {
    /// Filters, scores and tabulates the given options.
    ///
    /// Never fails: missing data degrades to omission (matrix, scoring) or
    /// placeholders (per-option display record). Callers detect the
    /// "fewer than two survivors" case with
    /// [`ComparisonResult::has_enough_options`].
    pub fn compare(
        options: &[TechOption],
        attributes: &[Attribute],
        weights: &[Weight],
        integration_support: &[IntegrationSupport],
        constraints: &Constraints,
    ) -> ComparisonResult {
        let effective = WeightResolver::resolve(weights, constraints);

        let survivors: Vec<&TechOption> = options
            .iter()
            .filter(|option| {
                Self::supports_required_integrations(
                    &option.id,
                    integration_support,
                    constraints.required_integrations(),
                )
            })
            .collect();

        let comparisons = survivors
            .iter()
            .map(|option| OptionComparison {
                id: option.id.clone(),
                name: option.name.clone(),
                description: option.description.clone(),
                attributes: Self::display_attributes(&option.id, attributes),
                score: Self::score_option(&option.id, attributes, &effective),
            })
            .collect();

        ComparisonResult {
            options: comparisons,
            matrix: Self::build_matrix(&survivors, attributes),
        }
    }

    /// Decides whether an option passes the required-integrations filter.
    ///
    /// An option with no support rows at all has not been mapped yet and is
    /// treated as compatible with everything. This is intentional: unmapped
    /// options must stay comparable until someone classifies them.
    pub fn supports_required_integrations<'a>(
        option_id: &OptionId,
        integration_support: &[IntegrationSupport],
        required: impl IntoIterator<Item = &'a IntegrationId>,
    ) -> bool {
        let supported: HashSet<&IntegrationId> = integration_support
            .iter()
            .filter(|row| &row.option_id == option_id)
            .map(|row| &row.integration_id)
            .collect();

        if supported.is_empty() {
            return true;
        }

        required.into_iter().all(|id| supported.contains(id))
    }

    /// Computes the normalized 0-100 fit score for one option.
    ///
    /// # Algorithm
    /// score = round(100 × Σ(rating × weight) / (Σ(weight) × 3))
    ///
    /// # Edge Cases
    /// - Attribute missing for the option: type skipped in both sums
    /// - No weight row for the type: type skipped in both sums
    /// - Total weight of zero: score is 0
    pub fn score_option(
        option_id: &OptionId,
        attributes: &[Attribute],
        effective: &EffectiveWeights,
    ) -> Percentage {
        let mut weighted_sum = 0.0;
        let mut total_weight = 0.0;

        for attribute_type in AttributeType::all() {
            let Some(attribute) = find_attribute(attributes, option_id, *attribute_type) else {
                continue;
            };
            let Some(weight) = effective.get(*attribute_type) else {
                continue;
            };

            weighted_sum += f64::from(attribute.rating.score()) * weight;
            total_weight += weight;
        }

        if total_weight <= 0.0 {
            return Percentage::ZERO;
        }

        Percentage::from_points(100.0 * weighted_sum / (total_weight * f64::from(Rating::MAX_SCORE)))
    }

    /// Builds the always-populated display record, using placeholders for gaps.
    fn display_attributes(option_id: &OptionId, attributes: &[Attribute]) -> OptionAttributes {
        let value_for = |attribute_type: AttributeType| {
            find_attribute(attributes, option_id, attribute_type)
                .map(|a| AttributeValue::new(attribute_type, a.value.clone(), a.rating))
                .unwrap_or_else(|| AttributeValue::placeholder(attribute_type))
        };

        OptionAttributes {
            cost_model: value_for(AttributeType::CostModel),
            scalability: value_for(AttributeType::Scalability),
            complexity: value_for(AttributeType::Complexity),
            maintenance: value_for(AttributeType::Maintenance),
        }
    }

    /// Builds the attribute matrix; every type has a row, gaps are omitted.
    fn build_matrix(survivors: &[&TechOption], attributes: &[Attribute]) -> AttributeMatrix {
        let mut matrix = AttributeMatrix::new();

        for attribute_type in AttributeType::all() {
            let mut row = BTreeMap::new();
            for option in survivors {
                if let Some(a) = find_attribute(attributes, &option.id, *attribute_type) {
                    row.insert(
                        option.id.clone(),
                        AttributeValue::new(*attribute_type, a.value.clone(), a.rating),
                    );
                }
            }
            matrix.insert(*attribute_type, row);
        }

        matrix
    }
}
