//! Popularity scoring: a weighted sum of likes and views.
//!
//! Runs over the full catalog with no exclusions; it is also the fallback
//! whenever `personalized` or `similar` lack their required context.

use catalog::ContentItem;

pub const LIKES_WEIGHT: f64 = 0.4;
pub const VIEWS_WEIGHT: f64 = 0.6;

pub fn score(item: &ContentItem) -> f64 {
    item.likes as f64 * LIKES_WEIGHT + item.views as f64 * VIEWS_WEIGHT
}
