//! Domain layer containing comparison logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors)
//! - `catalog` - Reference data: options, attributes, weights, integration support
//! - `analysis` - Pure comparison pipeline (weights, scoring, explanations)

pub mod analysis;
pub mod catalog;
pub mod foundation;
