//! Weight Resolver - Constraint-adjusted ("effective") attribute weights.

use crate::domain::catalog::Weight;
use crate::domain::foundation::AttributeType;

use super::Constraints;

/// Effective weights in the order the weight rows were supplied.
///
/// Kept as an ordered sequence so tie-breaks ("first seen wins") are
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EffectiveWeights {
    entries: Vec<(AttributeType, f64)>,
}

impl EffectiveWeights {
    /// Returns the effective weight for a type, if a weight row exists for it.
    pub fn get(&self, attribute_type: AttributeType) -> Option<f64> {
        self.entries
            .iter()
            .find(|(t, _)| *t == attribute_type)
            .map(|(_, w)| *w)
    }

    /// Iterates (type, effective weight) pairs in input order.
    pub fn iter(&self) -> impl Iterator<Item = (AttributeType, f64)> + '_ {
        self.entries.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Converts base weights into effective weights for a set of constraints.
pub struct WeightResolver;

impl WeightResolver {
    /// Applies the scalability-priority modifier to every weight row.
    ///
    /// effective = default_weight × modifier[priority]
    pub fn resolve(weights: &[Weight], constraints: &Constraints) -> EffectiveWeights {
        let priority = constraints.scalability_priority();

        EffectiveWeights {
            entries: weights
                .iter()
                .map(|w| (w.attribute_type(), w.default_weight() * w.modifier_for(priority)))
                .collect(),
        }
    }

    /// Finds the attribute type with the strictly highest effective weight.
    ///
    /// Ties keep the first type seen in input order. Returns `None` only when
    /// there are no weight rows.
    pub fn primary_attribute(weights: &[Weight], constraints: &Constraints) -> Option<AttributeType> {
        let effective = Self::resolve(weights, constraints);
        let mut best: Option<(AttributeType, f64)> = None;

        for (attribute_type, weight) in effective.iter() {
            match best {
                Some((_, best_weight)) if weight <= best_weight => {}
                _ => best = Some((attribute_type, weight)),
            }
        }

        best.map(|(t, _)| t)
    }
}
