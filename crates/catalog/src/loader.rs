//! Loader for catalog JSON files.
//!
//! A catalog file is a JSON array of item records. Records are validated
//! individually: a record that fails to deserialize, has a blank id, or
//! carries an out-of-range rating is skipped with a warning. Only the file
//! itself failing to read or parse is an error.

use crate::error::{CatalogError, Result};
use crate::types::{Catalog, ContentItem};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Load a catalog snapshot from a JSON file.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let raw = fs::read_to_string(path)?;
    let items = parse_items(&raw, &path.display().to_string())?;
    debug!(path = %path.display(), count = items.len(), "loaded catalog");
    Ok(Catalog::new(items))
}

/// Parse a JSON document into validated items.
///
/// `label` names the source in errors and warnings (usually the file path).
pub fn parse_items(raw: &str, label: &str) -> Result<Vec<ContentItem>> {
    let document: Value = serde_json::from_str(raw).map_err(|source| CatalogError::ParseError {
        path: label.to_string(),
        source,
    })?;

    let records = match document {
        Value::Array(records) => records,
        _ => {
            return Err(CatalogError::NotAnArray {
                path: label.to_string(),
            })
        }
    };

    let mut items = Vec::with_capacity(records.len());
    for (position, record) in records.into_iter().enumerate() {
        match validate_record(record) {
            Ok(item) => items.push(item),
            Err(reason) => {
                warn!(%label, position, %reason, "skipping malformed catalog record");
            }
        }
    }
    Ok(items)
}

/// Check one record against the catalog's structural rules.
fn validate_record(record: Value) -> std::result::Result<ContentItem, String> {
    let item: ContentItem =
        serde_json::from_value(record).map_err(|e| format!("not a content item: {e}"))?;

    if !item.is_well_formed() {
        return Err("blank id".to_string());
    }
    if let Some(rating) = item.rating {
        if !(0.0..=5.0).contains(&rating) {
            return Err(format!("rating {rating} outside [0, 5]"));
        }
    }
    Ok(item)
}
