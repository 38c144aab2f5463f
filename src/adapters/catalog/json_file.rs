//! JSON File Option Catalog Adapter
//!
//! Loads a catalog snapshot from a JSON seed file on disk and serves it
//! from memory. The file is read once at load time and again on `reload`.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

use crate::domain::catalog::{Attribute, IntegrationSupport, TechOption, Weight};
use crate::domain::foundation::OptionId;
use crate::ports::{CatalogError, OptionCatalog};

use super::{parse_snapshot, InMemoryOptionCatalog};

/// File-backed catalog
#[derive(Debug, Clone)]
pub struct JsonFileOptionCatalog {
    path: PathBuf,
    inner: InMemoryOptionCatalog,
}

impl JsonFileOptionCatalog {
    /// Load a catalog from a JSON seed file
    ///
    /// # Errors
    /// - `CatalogError::Unavailable` if the file cannot be read
    /// - `CatalogError::Corrupt` if the content is not a valid snapshot
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref().to_path_buf();
        let snapshot = parse_snapshot(&fs::read_to_string(&path).await?)?;

        info!(
            path = %path.display(),
            options = snapshot.options.len(),
            "Loaded option catalog"
        );

        Ok(Self {
            path,
            inner: InMemoryOptionCatalog::from_snapshot(snapshot),
        })
    }

    /// Re-read the seed file. On error the current data is kept.
    pub async fn reload(&self) -> Result<(), CatalogError> {
        let snapshot = parse_snapshot(&fs::read_to_string(&self.path).await?)?;
        self.inner.replace(snapshot).await;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl OptionCatalog for JsonFileOptionCatalog {
    async fn list_options(&self) -> Result<Vec<TechOption>, CatalogError> {
        self.inner.list_options().await
    }

    async fn find_options(&self, ids: &[OptionId]) -> Result<Vec<TechOption>, CatalogError> {
        self.inner.find_options(ids).await
    }

    async fn attributes_for(&self, ids: &[OptionId]) -> Result<Vec<Attribute>, CatalogError> {
        self.inner.attributes_for(ids).await
    }

    async fn weights(&self) -> Result<Vec<Weight>, CatalogError> {
        self.inner.weights().await
    }

    async fn integration_support_for(
        &self,
        ids: &[OptionId],
    ) -> Result<Vec<IntegrationSupport>, CatalogError> {
        self.inner.integration_support_for(ids).await
    }
}
