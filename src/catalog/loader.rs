use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::catalog::types::CatalogEntry;

/// The catalog shipped with the binary, used when no path is configured.
const DEFAULT_CATALOG: &str = include_str!("../../data/desserts.json");

/// Errors that can occur when loading the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Catalog validation failed: {message}")]
    ValidationError { message: String },
}

/// Loads the embedded default catalog.
pub fn load_default() -> Result<Vec<CatalogEntry>, CatalogError> {
    parse(DEFAULT_CATALOG, Path::new("<embedded>"))
}

/// Loads a catalog from a JSON file.
pub fn load_from(path: &Path) -> Result<Vec<CatalogEntry>, CatalogError> {
    let content = fs::read_to_string(path).map_err(|e| CatalogError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse(&content, path)
}

fn parse(content: &str, path: &Path) -> Result<Vec<CatalogEntry>, CatalogError> {
    let entries: Vec<CatalogEntry> =
        serde_json::from_str(content).map_err(|e| CatalogError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

    validate(&entries)?;
    Ok(entries)
}

/// Validates a parsed catalog.
///
/// Checks:
/// - Every entry has a non-empty id
/// - Ids are unique across the catalog
/// - Prices are non-negative and finite
fn validate(entries: &[CatalogEntry]) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();

    for entry in entries {
        if entry.id.is_empty() {
            return Err(CatalogError::ValidationError {
                message: format!("Entry '{}' has an empty id", entry.name),
            });
        }
        if !seen.insert(entry.id.as_str()) {
            return Err(CatalogError::ValidationError {
                message: format!("Duplicate catalog id '{}'", entry.id),
            });
        }
        if !entry.price.is_finite() || entry.price < 0.0 {
            return Err(CatalogError::ValidationError {
                message: format!("Entry '{}' has an invalid price {}", entry.id, entry.price),
            });
        }
    }

    Ok(())
}
