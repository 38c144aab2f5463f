//! Option catalog configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where option data comes from
#[derive(Debug, Clone, Deserialize, Default)]
pub struct CatalogConfig {
    /// JSON seed file; the built-in seed is used when absent
    pub seed_path: Option<PathBuf>,
}

impl CatalogConfig {
    /// Validate catalog configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self
            .seed_path
            .as_ref()
            .is_some_and(|p| p.as_os_str().is_empty())
        {
            return Err(ValidationError::EmptySeedPath);
        }
        Ok(())
    }
}
