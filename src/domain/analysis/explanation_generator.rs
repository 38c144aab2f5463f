//! Explanation Generator - Trade-off narratives and the pivot statement.
//!
//! Both contracts are deterministic template expansions over a
//! [`ComparisonResult`]. Wording is conditional throughout: no output names
//! an option as better without tying it to a priority.

use crate::domain::catalog::Weight;
use crate::domain::foundation::{AttributeType, Rating, ScalabilityPriority};

use super::vocabulary;
use super::{
    ComparisonResult, Constraints, OptionAnalysis, OptionComparison, PivotResult,
    TradeOffExplanation, WeightResolver,
};

/// Score gap (in percentage points) below which two options read as closely matched.
const CLOSE_MATCH_GAP: u8 = 10;

const GOOD_FIT_THRESHOLD: u8 = 70;
const MODERATE_FIT_THRESHOLD: u8 = 50;

/// Primary factor used when no weight rows exist.
const DEFAULT_PRIMARY: AttributeType = AttributeType::Scalability;

/// Seed candidate for the secondary factor.
const DEFAULT_SECONDARY: AttributeType = AttributeType::CostModel;

/// Turns scored comparisons into explanations and pivot recommendations.
pub struct ExplanationGenerator;

impl ExplanationGenerator {
    /// Builds the summary, per-option analysis and constraint-impact list.
    pub fn generate(result: &ComparisonResult, constraints: &Constraints) -> TradeOffExplanation {
        TradeOffExplanation {
            summary: Self::summary(result),
            option_analysis: result
                .options
                .iter()
                .map(|option| Self::analyze_option(option, constraints))
                .collect(),
            constraint_impact: Self::constraint_impact(constraints),
        }
    }

    /// Builds the "if X matters more than Y, choose A; otherwise choose B" statement.
    ///
    /// # Algorithm
    /// 1. Primary factor: highest effective weight (first seen on ties)
    /// 2. Secondary factor: highest effective weight among the other types,
    ///    seeded with cost_model at 0.0
    /// 3. Primary pick: higher primary rank, then higher secondary rank,
    ///    then the first option
    /// 4. Secondary pick: higher secondary rank, else the option not picked
    ///    for primary
    /// 5. If both picks name the same option, the secondary pick is flipped
    ///
    /// # Edge Cases
    /// - Fewer than two options: [`PivotResult::unavailable`]
    /// - No weight rows: primary factor is scalability
    /// - Only the first two options take part
    pub fn generate_pivot(
        result: &ComparisonResult,
        constraints: &Constraints,
        weights: &[Weight],
    ) -> PivotResult {
        let [first, second, ..] = result.options.as_slice() else {
            return PivotResult::unavailable();
        };

        let primary = WeightResolver::primary_attribute(weights, constraints).unwrap_or(DEFAULT_PRIMARY);
        let secondary = Self::secondary_attribute(weights, constraints, primary);

        let primary_cmp = Self::rank(first, primary).cmp(&Self::rank(second, primary));
        let secondary_cmp = Self::rank(first, secondary).cmp(&Self::rank(second, secondary));

        let for_primary = if primary_cmp.then(secondary_cmp).is_lt() {
            second
        } else {
            first
        };

        let mut for_secondary = if secondary_cmp.is_gt() {
            first
        } else if secondary_cmp.is_lt() {
            second
        } else {
            Self::other(for_primary, first, second)
        };

        // Both recommendations must name different options.
        if for_secondary.id == for_primary.id {
            for_secondary = Self::other(for_primary, first, second);
        }

        PivotResult {
            statement: format!(
                "If {} matters more than {}, choose {}; otherwise choose {}",
                vocabulary::display_name(primary),
                vocabulary::display_name(secondary),
                for_primary.name,
                for_secondary.name,
            ),
            primary_factor: primary.as_str().to_string(),
            secondary_factor: secondary.as_str().to_string(),
            option_a: for_primary.name.clone(),
            option_b: for_secondary.name.clone(),
        }
    }

    /// Highest-weighted type other than `primary`, strictly greater wins.
    fn secondary_attribute(
        weights: &[Weight],
        constraints: &Constraints,
        primary: AttributeType,
    ) -> AttributeType {
        let mut candidate = DEFAULT_SECONDARY;
        let mut max_weight = 0.0;

        for (attribute_type, weight) in WeightResolver::resolve(weights, constraints).iter() {
            if attribute_type != primary && weight > max_weight {
                candidate = attribute_type;
                max_weight = weight;
            }
        }

        candidate
    }

    fn rank(option: &OptionComparison, attribute_type: AttributeType) -> u8 {
        option.attributes.rating(attribute_type).rank()
    }

    fn other<'a>(
        chosen: &OptionComparison,
        first: &'a OptionComparison,
        second: &'a OptionComparison,
    ) -> &'a OptionComparison {
        if chosen.id == first.id {
            second
        } else {
            first
        }
    }

    fn summary(result: &ComparisonResult) -> String {
        let [first, second, ..] = result.options.as_slice() else {
            return vocabulary::INSUFFICIENT_OPTIONS.to_string();
        };

        if first.score.distance(&second.score) < CLOSE_MATCH_GAP {
            return format!(
                "{} and {} are closely matched ({} vs {}); the right choice depends on \
                 which attributes matter most to you.",
                first.name, second.name, first.score, second.score
            );
        }

        let (higher, lower) = if second.score > first.score {
            (second, first)
        } else {
            (first, second)
        };

        format!(
            "{} scores higher against your current constraints ({} vs {}), though {} \
             may be preferable for certain attributes depending on your priorities.",
            higher.name, higher.score, lower.score, lower.name
        )
    }

    fn analyze_option(option: &OptionComparison, constraints: &Constraints) -> OptionAnalysis {
        OptionAnalysis {
            id: option.id.clone(),
            name: option.name.clone(),
            strengths: Self::phrases_for(option, Rating::High, vocabulary::strength_phrase, vocabulary::NO_STRENGTHS),
            weaknesses: Self::phrases_for(option, Rating::Low, vocabulary::weakness_phrase, vocabulary::NO_WEAKNESSES),
            fit_score: option.score,
            fit_reason: Self::fit_reason(option, constraints.scalability_priority()).to_string(),
        }
    }

    /// Collects one phrase per attribute rated `rating`, in canonical type order.
    fn phrases_for(
        option: &OptionComparison,
        rating: Rating,
        phrase: fn(AttributeType) -> &'static str,
        fallback: &str,
    ) -> Vec<String> {
        let phrases: Vec<String> = AttributeType::all()
            .iter()
            .filter(|t| option.attributes.rating(**t) == rating)
            .map(|t| phrase(*t).to_string())
            .collect();

        if phrases.is_empty() {
            vec![fallback.to_string()]
        } else {
            phrases
        }
    }

    fn fit_reason(option: &OptionComparison, priority: ScalabilityPriority) -> &'static str {
        let rating = |t| option.attributes.rating(t);

        match priority {
            ScalabilityPriority::High if rating(AttributeType::Scalability) == Rating::High => {
                return vocabulary::FIT_SCALABILITY;
            }
            ScalabilityPriority::Low if rating(AttributeType::CostModel) == Rating::High => {
                return vocabulary::FIT_COST;
            }
            _ => {}
        }

        match option.score.value() {
            s if s >= GOOD_FIT_THRESHOLD => vocabulary::FIT_GOOD,
            s if s >= MODERATE_FIT_THRESHOLD => vocabulary::FIT_MODERATE,
            _ => vocabulary::FIT_CAREFUL,
        }
    }

    fn constraint_impact(constraints: &Constraints) -> Vec<String> {
        let mut impact = vec![
            format!(
                "Budget range of ${} to ${} shapes how heavily cost efficiency is weighted",
                constraints.budget_min(),
                constraints.budget_max()
            ),
            vocabulary::priority_impact(constraints.scalability_priority()).to_string(),
        ];

        let required = constraints.required_integrations().len();
        if required > 0 {
            impact.push(format!(
                "{} required integration(s) must be supported by each option",
                required
            ));
        }

        impact
    }
}
