//! Option catalog adapters.
//!
//! - `InMemoryOptionCatalog` - Snapshot held in memory (built-in seed, tests)
//! - `JsonFileOptionCatalog` - Snapshot loaded from a JSON seed file

mod in_memory;
mod json_file;

pub use in_memory::InMemoryOptionCatalog;
pub use json_file::JsonFileOptionCatalog;

use std::collections::HashSet;

use crate::domain::catalog::CatalogSnapshot;
use crate::ports::CatalogError;

/// Parses and checks a JSON catalog snapshot.
///
/// Weight rows are validated during deserialization. Option ids, option
/// names and weight attribute types must each be unique.
pub(crate) fn parse_snapshot(json: &str) -> Result<CatalogSnapshot, CatalogError> {
    let snapshot: CatalogSnapshot = serde_json::from_str(json)?;

    let mut option_ids = HashSet::new();
    if let Some(dup) = snapshot.options.iter().find(|o| !option_ids.insert(&o.id)) {
        return Err(CatalogError::corrupt(format!("duplicate option id: {}", dup.id)));
    }

    // Pivot statements name options by display name.
    let mut option_names = HashSet::new();
    if let Some(dup) = snapshot.options.iter().find(|o| !option_names.insert(&o.name)) {
        return Err(CatalogError::corrupt(format!("duplicate option name: {}", dup.name)));
    }

    let mut weight_types = HashSet::new();
    if let Some(dup) = snapshot
        .weights
        .iter()
        .find(|w| !weight_types.insert(w.attribute_type()))
    {
        return Err(CatalogError::corrupt(format!(
            "duplicate weight for attribute type: {}",
            dup.attribute_type()
        )));
    }

    Ok(snapshot)
}
