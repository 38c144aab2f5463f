//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `catalog` - Option catalog sources (in-memory, JSON file)
//! - `enhancement` - Comparison enhancers (mock)

pub mod catalog;
pub mod enhancement;

pub use catalog::{InMemoryOptionCatalog, JsonFileOptionCatalog};
pub use enhancement::{MockComparisonEnhancer, MockEnhancement, MockEnhancementError};
