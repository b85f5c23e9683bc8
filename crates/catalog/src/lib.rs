//! # Catalog Crate
//!
//! This crate holds the domain model for the cultural content platform and
//! the loader that turns a JSON export into an in-memory snapshot.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (ContentItem, Category, Catalog)
//! - **loader**: Parse catalog JSON files with per-record validation
//! - **error**: Error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::load_catalog;
//! use std::path::Path;
//!
//! let catalog = load_catalog(Path::new("data/catalog.json"))?;
//!
//! let item = catalog.get("conte-042").unwrap();
//! println!("{} items, first origin: {:?}", catalog.len(), item.origin);
//! ```

// Public modules
pub mod error;
pub mod loader;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use loader::{load_catalog, parse_items};
pub use types::{Catalog, Category, ContentItem, ItemId};

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use std::collections::BTreeSet;

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::default();
        assert!(catalog.is_empty());
        assert!(catalog.get("anything").is_none());
    }

    #[test]
    fn test_item_round_trip() {
        let item = ContentItem {
            id: "chant-7".to_string(),
            category: Category::Chant,
            origin: Some("Atlas".to_string()),
            artist: Some("Groupe Tilelli".to_string()),
            tags: BTreeSet::from(["fete".to_string(), "danse".to_string()]),
            likes: 12,
            views: 340,
            rating: Some(4.5),
            created_at: Utc.with_ymd_and_hms(2024, 3, 15, 9, 30, 0).unwrap(),
        };

        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"createdAt\""));
        assert!(json.contains("\"chant\""));

        let back: ContentItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, item.id);
        assert_eq!(back.tags, item.tags);
        assert_eq!(back.created_at, item.created_at);
    }
}
