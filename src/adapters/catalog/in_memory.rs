//! In-Memory Option Catalog Adapter
//!
//! Holds a catalog snapshot in memory. Used by the demo binary (built-in
//! seed), by the JSON file adapter after loading, and by tests.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::catalog::{Attribute, CatalogSnapshot, IntegrationSupport, TechOption, Weight};
use crate::domain::foundation::OptionId;
use crate::ports::{CatalogError, OptionCatalog};

use super::parse_snapshot;

const DEFAULT_SEED: &str = include_str!("default_seed.json");

/// In-memory catalog of options and their reference rows
#[derive(Debug, Clone, Default)]
pub struct InMemoryOptionCatalog {
    snapshot: Arc<RwLock<CatalogSnapshot>>,
}

impl InMemoryOptionCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog holding the given snapshot
    pub fn from_snapshot(snapshot: CatalogSnapshot) -> Self {
        Self {
            snapshot: Arc::new(RwLock::new(snapshot)),
        }
    }

    /// Create a catalog with the built-in database and compute options
    pub fn with_default_seed() -> Result<Self, CatalogError> {
        Ok(Self::from_snapshot(parse_snapshot(DEFAULT_SEED)?))
    }

    /// Replace the whole catalog
    pub async fn replace(&self, snapshot: CatalogSnapshot) {
        *self.snapshot.write().await = snapshot;
    }

    pub async fn add_option(&self, option: TechOption) {
        self.snapshot.write().await.options.push(option);
    }

    pub async fn add_attribute(&self, attribute: Attribute) {
        self.snapshot.write().await.attributes.push(attribute);
    }

    pub async fn add_weight(&self, weight: Weight) {
        self.snapshot.write().await.weights.push(weight);
    }

    pub async fn add_integration_support(&self, support: IntegrationSupport) {
        self.snapshot.write().await.integration_support.push(support);
    }

    /// Get the number of options
    pub async fn option_count(&self) -> usize {
        self.snapshot.read().await.options.len()
    }
}

#[async_trait]
impl OptionCatalog for InMemoryOptionCatalog {
    async fn list_options(&self) -> Result<Vec<TechOption>, CatalogError> {
        Ok(self.snapshot.read().await.options.clone())
    }

    async fn find_options(&self, ids: &[OptionId]) -> Result<Vec<TechOption>, CatalogError> {
        let snapshot = self.snapshot.read().await;
        Ok(ids
            .iter()
            .filter_map(|id| snapshot.options.iter().find(|o| &o.id == id))
            .cloned()
            .collect())
    }

    async fn attributes_for(&self, ids: &[OptionId]) -> Result<Vec<Attribute>, CatalogError> {
        let snapshot = self.snapshot.read().await;
        Ok(snapshot
            .attributes
            .iter()
            .filter(|a| ids.contains(&a.option_id))
            .cloned()
            .collect())
    }

    async fn weights(&self) -> Result<Vec<Weight>, CatalogError> {
        Ok(self.snapshot.read().await.weights.clone())
    }

    async fn integration_support_for(
        &self,
        ids: &[OptionId],
    ) -> Result<Vec<IntegrationSupport>, CatalogError> {
        let snapshot = self.snapshot.read().await;
        Ok(snapshot
            .integration_support
            .iter()
            .filter(|s| ids.contains(&s.option_id))
            .cloned()
            .collect())
    }
}
