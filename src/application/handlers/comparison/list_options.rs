//! ListOptionsHandler - Query handler for browsing the catalog by category.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::catalog::TechOption;
use crate::ports::{CatalogError, OptionCatalog};

/// Query to list catalog options.
#[derive(Debug, Clone, Default)]
pub struct ListOptionsQuery {
    /// Restrict to a single category.
    pub category: Option<String>,
}

/// Options sharing a category, sorted by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionGroup {
    pub category: String,
    pub options: Vec<TechOption>,
}

/// Handler for listing options grouped by category.
pub struct ListOptionsHandler {
    catalog: Arc<dyn OptionCatalog>,
}

impl ListOptionsHandler {
    pub fn new(catalog: Arc<dyn OptionCatalog>) -> Self {
        Self { catalog }
    }

    /// Returns groups sorted by category, each sorted by option name.
    pub async fn handle(&self, query: ListOptionsQuery) -> Result<Vec<OptionGroup>, CatalogError> {
        let mut groups: BTreeMap<String, Vec<TechOption>> = BTreeMap::new();

        for option in self.catalog.list_options().await? {
            if query.category.as_ref().is_some_and(|c| c != &option.category) {
                continue;
            }
            groups.entry(option.category.clone()).or_default().push(option);
        }

        Ok(groups
            .into_iter()
            .map(|(category, mut options)| {
                options.sort_by(|a, b| a.name.cmp(&b.name));
                OptionGroup { category, options }
            })
            .collect())
    }
}
