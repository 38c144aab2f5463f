//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod comparison;

pub use comparison::{
    CompareOptionsCommand, CompareOptionsHandler, ComparisonError, ComparisonReport,
    ListOptionsHandler, ListOptionsQuery, OptionGroup,
};
