//! Catalog Module - Immutable reference data the comparison runs over.
//!
//! # Components
//!
//! - `TechOption` - A named technical choice
//! - `Attribute` - An option's rating on one attribute type
//! - `Weight` - Base importance per attribute type plus scalability modifiers
//! - `IntegrationSupport` - Option/integration support rows used for filtering
//! - `CatalogSnapshot` - All of the above bundled together (seed file format)

mod attribute;
mod integration;
mod option;
mod weight;

pub use attribute::{find_attribute, Attribute};
pub use integration::IntegrationSupport;
pub use option::TechOption;
pub use weight::Weight;

use serde::{Deserialize, Serialize};

/// Every catalog row kind in one bundle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    #[serde(default)]
    pub options: Vec<TechOption>,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    #[serde(default)]
    pub weights: Vec<Weight>,
    #[serde(default)]
    pub integration_support: Vec<IntegrationSupport>,
}
