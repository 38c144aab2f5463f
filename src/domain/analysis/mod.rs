//! Analysis Module - The deterministic comparison pipeline.
//!
//! Turns catalog rows plus user constraints into a scored, explainable
//! comparison of two options.
//!
//! # Components
//!
//! - `Constraints` - Budget range, scalability priority, required integrations
//! - `WeightResolver` - Constraint-adjusted attribute weights, primary attribute
//! - `ScoringEngine` - Integration filtering, fit scores, attribute matrix
//! - `ExplanationGenerator` - Strengths/weaknesses, summary, pivot statement
//!
//! # Design Philosophy
//!
//! All functions are pure (no side effects) and stateless. Data flows one
//! way: constraints and catalog rows → weights → scores → explanation.
//! Missing data degrades to placeholders or omissions, never to errors.

mod constraints;
mod explanation_generator;
mod results;
mod scoring_engine;
pub mod vocabulary;
mod weight_resolver;

pub use constraints::Constraints;
pub use explanation_generator::ExplanationGenerator;
pub use results::{
    AttributeMatrix, AttributeValue, ComparisonResult, OptionAnalysis, OptionAttributes,
    OptionComparison, PivotResult, TradeOffExplanation,
};
pub use scoring_engine::ScoringEngine;
pub use weight_resolver::{EffectiveWeights, WeightResolver};
