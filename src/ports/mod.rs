//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `OptionCatalog` - Read access to options, attributes, weights and integration support
//! - `ComparisonEnhancer` - Optional narrative enrichment of a finished comparison

mod comparison_enhancer;
mod option_catalog;

pub use comparison_enhancer::{
    AiAnalysis, ComparisonEnhancer, EnhancedContent, EnhancementError, EnhancementRequest,
    OptionInsight, OptionNarrative,
};
pub use option_catalog::{CatalogError, OptionCatalog};
