//! Similarity scoring against the currently viewed item.
//!
//! Category and origin matches score fixed bonuses; tag similarity scores a
//! Jaccard fraction of its weight. Origin matching on two absent origins is
//! configurable: the platform's original equality check counted two items
//! without provenance data as matching, which the strict default here does
//! not reproduce.

use catalog::ContentItem;
use std::collections::BTreeSet;

pub const CATEGORY_WEIGHT: f64 = 0.40;
pub const ORIGIN_WEIGHT: f64 = 0.30;
pub const TAG_WEIGHT: f64 = 0.30;

pub fn score(item: &ContentItem, current: &ContentItem, null_origin_matches: bool) -> f64 {
    let mut score = 0.0;

    if item.category == current.category {
        score += CATEGORY_WEIGHT;
    }

    let origins_match = match (&item.origin, &current.origin) {
        (Some(a), Some(b)) => a == b,
        (None, None) => null_origin_matches,
        _ => false,
    };
    if origins_match {
        score += ORIGIN_WEIGHT;
    }

    score + TAG_WEIGHT * jaccard(&item.tags, &current.tags)
}

/// |a ∩ b| / |a ∪ b|, with the empty-union case defined as 0.
fn jaccard(a: &BTreeSet<String>, b: &BTreeSet<String>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    let intersection = a.intersection(b).count();
    intersection as f64 / union as f64
}
