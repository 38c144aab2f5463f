use async_trait::async_trait;

use crate::domain::catalog::{Attribute, IntegrationSupport, TechOption, Weight};
use crate::domain::foundation::OptionId;

/// Read-only port for catalog reference data
///
/// Implementations return rows only; they never score or filter by
/// constraints. Unknown ids are silently absent from the results.
#[async_trait]
pub trait OptionCatalog: Send + Sync {
    /// Lists every option in the catalog
    async fn list_options(&self) -> Result<Vec<TechOption>, CatalogError>;

    /// Gets options by id, in the order the ids were given
    async fn find_options(&self, ids: &[OptionId]) -> Result<Vec<TechOption>, CatalogError>;

    /// Gets all attribute rows for the given options
    async fn attributes_for(&self, ids: &[OptionId]) -> Result<Vec<Attribute>, CatalogError>;

    /// Gets the weight table
    async fn weights(&self) -> Result<Vec<Weight>, CatalogError>;

    /// Gets integration support rows for the given options
    async fn integration_support_for(
        &self,
        ids: &[OptionId],
    ) -> Result<Vec<IntegrationSupport>, CatalogError>;
}

/// Errors that can occur while reading the catalog
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    #[error("Catalog unavailable: {0}")]
    Unavailable(String),

    #[error("Catalog data is corrupt: {0}")]
    Corrupt(String),
}

impl CatalogError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }

    pub fn corrupt(message: impl Into<String>) -> Self {
        Self::Corrupt(message.into())
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        CatalogError::Unavailable(err.to_string())
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Corrupt(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_map_to_unavailable() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        assert!(matches!(CatalogError::from(io), CatalogError::Unavailable(_)));
    }

    #[test]
    fn json_errors_map_to_corrupt() {
        let json = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        assert!(matches!(CatalogError::from(json), CatalogError::Corrupt(_)));
    }

    #[test]
    fn error_messages_include_detail() {
        assert_eq!(
            CatalogError::unavailable("disk offline").to_string(),
            "Catalog unavailable: disk offline"
        );
    }
}
