//! Comparison handlers.
//!
//! Compare two catalog options, or browse the catalog to pick them.

mod compare_options;
mod list_options;

pub use compare_options::{
    CompareOptionsCommand, CompareOptionsHandler, ComparisonError, ComparisonReport,
    OPTIONS_PER_COMPARISON,
};
pub use list_options::{ListOptionsHandler, ListOptionsQuery, OptionGroup};
