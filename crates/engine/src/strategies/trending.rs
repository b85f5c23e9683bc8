//! Trending scoring: recency decay blended with interaction volume.
//!
//! The recency factor decays linearly from 1 at publication to 0 at 30 days
//! and floors there; items older than the window compete on interactions
//! alone. The factor is deliberately not capped above 1, so an item with a
//! future `created_at` scores slightly above the fresh baseline.

use catalog::ContentItem;
use chrono::{DateTime, Utc};

pub const RECENCY_WEIGHT: f64 = 0.6;
pub const INTERACTION_WEIGHT: f64 = 0.4;
/// Days until the recency factor decays to zero.
pub const RECENCY_WINDOW_DAYS: f64 = 30.0;
/// How much one view counts relative to one like in the interaction factor.
pub const VIEW_FACTOR: f64 = 0.1;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

pub fn score(item: &ContentItem, now: DateTime<Utc>) -> f64 {
    let age_days = (now - item.created_at).num_milliseconds() as f64 / MILLIS_PER_DAY;
    let recency_factor = (1.0 - age_days / RECENCY_WINDOW_DAYS).max(0.0);
    let interaction_factor = item.likes as f64 + item.views as f64 * VIEW_FACTOR;
    recency_factor * RECENCY_WEIGHT + interaction_factor * INTERACTION_WEIGHT
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::Category;
    use chrono::{Duration, TimeZone};
    use std::collections::BTreeSet;

    fn item_at(created_at: DateTime<Utc>, likes: u64, views: u64) -> ContentItem {
        ContentItem {
            id: "x".to_string(),
            category: Category::Artisanat,
            origin: None,
            artist: None,
            tags: BTreeSet::new(),
            likes,
            views,
            rating: None,
            created_at,
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_brand_new_item_without_interactions() {
        // recency factor 1, interaction factor 0
        let item = item_at(now(), 0, 0);
        assert_eq!(score(&item, now()), RECENCY_WEIGHT);
    }

    #[test]
    fn test_recency_floors_at_zero_past_the_window() {
        // 40 days old: only the interaction term remains
        let item = item_at(now() - Duration::days(40), 5, 20);
        let interaction_factor = 5.0 + 20.0 * VIEW_FACTOR;
        assert_eq!(score(&item, now()), interaction_factor * INTERACTION_WEIGHT);
    }

    #[test]
    fn test_mid_window_decay() {
        // 15 days old: recency factor is exactly one half
        let item = item_at(now() - Duration::days(15), 0, 0);
        assert_eq!(score(&item, now()), 0.5 * RECENCY_WEIGHT);
    }

    #[test]
    fn test_future_item_is_not_clamped() {
        let item = item_at(now() + Duration::days(3), 0, 0);
        assert!(score(&item, now()) > RECENCY_WEIGHT);
    }
}
