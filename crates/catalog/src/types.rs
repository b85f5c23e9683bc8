//! Core domain types for the cultural content catalog.
//!
//! This module defines the fundamental data structures used throughout the
//! system:
//! - Type alias for item identifiers (ItemId)
//! - ContentItem: one cultural artifact (tale, proverb, song, craftwork, riddle)
//! - Category enum for the fixed set of artifact kinds
//! - Catalog: an in-memory, id-indexed snapshot of items

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use tracing::warn;

/// Unique, opaque, stable identifier for a content item.
pub type ItemId = String;

/// The fixed set of artifact categories on the platform.
///
/// Serialized with the lowercase French tags used by the platform's data
/// ("conte", "proverbe", ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Conte,
    Proverbe,
    Chant,
    Artisanat,
    Devinette,
}

/// Represents one cultural artifact in the catalog.
///
/// The same type doubles as an interaction-history entry: a history is just
/// a list of items the user previously viewed or liked.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    pub id: ItemId,
    pub category: Category,
    /// Free-text cultural/geographic provenance label.
    #[serde(default)]
    pub origin: Option<String>,
    /// Free-text creator/performer label.
    #[serde(default)]
    pub artist: Option<String>,
    /// Free-text labels. A set: order is irrelevant and duplicates collapse.
    #[serde(default)]
    pub tags: BTreeSet<String>,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub views: u64,
    /// Optional editorial rating in [0, 5].
    #[serde(default)]
    pub rating: Option<f64>,
    /// Publication instant, parsed from ISO 8601.
    pub created_at: DateTime<Utc>,
}

impl ContentItem {
    /// Whether this item carries the fields ranking requires.
    ///
    /// `category` and `created_at` are enforced by the type; the only thing
    /// that can still be structurally wrong after deserialization is a blank id.
    pub fn is_well_formed(&self) -> bool {
        !self.id.trim().is_empty()
    }
}

/// An in-memory catalog snapshot with an id index for O(1) lookups.
///
/// Construction enforces the snapshot invariant that ids are unique: later
/// duplicates are dropped with a warning rather than failing the whole load.
/// Items keep their original order, which is also the tie-break order used
/// by the ranking engine.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<ContentItem>,
    index: HashMap<ItemId, usize>,
}

impl Catalog {
    /// Build a catalog from items, dropping duplicate ids.
    pub fn new(items: Vec<ContentItem>) -> Self {
        let mut catalog = Self {
            items: Vec::with_capacity(items.len()),
            index: HashMap::with_capacity(items.len()),
        };
        for item in items {
            if catalog.index.contains_key(&item.id) {
                warn!(id = %item.id, "dropping catalog item with duplicate id");
                continue;
            }
            catalog.index.insert(item.id.clone(), catalog.items.len());
            catalog.items.push(item);
        }
        catalog
    }

    /// All items in original load order.
    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    /// Look up an item by id.
    pub fn get(&self, id: &str) -> Option<&ContentItem> {
        self.index.get(id).map(|&i| &self.items[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn item(id: &str) -> ContentItem {
        ContentItem {
            id: id.to_string(),
            category: Category::Conte,
            origin: None,
            artist: None,
            tags: BTreeSet::new(),
            likes: 0,
            views: 0,
            rating: None,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_duplicate_ids_keep_first() {
        let mut second = item("a");
        second.likes = 99;

        let catalog = Catalog::new(vec![item("a"), second, item("b")]);

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("a").unwrap().likes, 0);
        assert!(catalog.contains("b"));
    }

    #[test]
    fn test_lookup_preserves_order() {
        let catalog = Catalog::new(vec![item("x"), item("y"), item("z")]);

        assert_eq!(catalog.items()[1].id, "y");
        assert_eq!(catalog.get("z").unwrap().id, "z");
        assert!(catalog.get("missing").is_none());
    }

    #[test]
    fn test_blank_id_is_malformed() {
        assert!(!item("  ").is_well_formed());
        assert!(item("ok").is_well_formed());
    }
}
