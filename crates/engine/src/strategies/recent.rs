//! Recency ordering: newest publication instant first.
//!
//! The score is the item's Unix time in fractional seconds, so sorting by
//! score descending is exactly sorting by `created_at` descending down to
//! millisecond precision. Likes, views, and tags play no part.

use catalog::ContentItem;

pub fn score(item: &ContentItem) -> f64 {
    item.created_at.timestamp_millis() as f64 / 1_000.0
}
