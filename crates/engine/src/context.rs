//! Viewing context supplied by the caller with each ranking request.

use catalog::ContentItem;
use std::collections::HashSet;

/// What the engine knows about the requesting user at call time.
///
/// Both fields are optional. `Strategy::Similar` needs `current_item` and
/// `Strategy::Personalized` needs `history`; when the required field is
/// missing the engine falls back to `Strategy::Popular` rather than failing.
#[derive(Debug, Clone, Default)]
pub struct ViewingContext {
    /// The item the user is currently looking at, if any.
    pub current_item: Option<ContentItem>,
    /// Items the user previously viewed or liked. Order is not significant.
    pub history: Vec<ContentItem>,
}

impl ViewingContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the currently viewed item (builder pattern).
    pub fn with_current_item(mut self, item: ContentItem) -> Self {
        self.current_item = Some(item);
        self
    }

    /// Set the interaction history (builder pattern).
    pub fn with_history(mut self, history: Vec<ContentItem>) -> Self {
        self.history = history;
        self
    }

    /// Ids of all history items, for O(1) already-seen checks.
    pub fn history_ids(&self) -> HashSet<&str> {
        self.history.iter().map(|item| item.id.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::Category;
    use chrono::{TimeZone, Utc};
    use std::collections::BTreeSet;

    fn item(id: &str) -> ContentItem {
        ContentItem {
            id: id.to_string(),
            category: Category::Devinette,
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
    fn test_history_ids() {
        let ctx = ViewingContext::new().with_history(vec![item("a"), item("b"), item("a")]);
        let ids = ctx.history_ids();

        assert_eq!(ids.len(), 2);
        assert!(ids.contains("a"));
        assert!(ids.contains("b"));
    }

    #[test]
    fn test_default_is_empty() {
        let ctx = ViewingContext::new();
        assert!(ctx.current_item.is_none());
        assert!(ctx.history.is_empty());
    }
}
