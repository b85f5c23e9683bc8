//! Personalized scoring against a preference profile.
//!
//! Each signal contributes a normalized fraction of its weight: categories
//! and origins by share of the user's interactions, tags by the fraction of
//! the item's own tags the user has encountered, artists by interaction
//! share. Signals the item lacks simply contribute nothing.

use crate::profile::PreferenceProfile;
use catalog::ContentItem;

pub const CATEGORY_WEIGHT: f64 = 0.40;
pub const ORIGIN_WEIGHT: f64 = 0.20;
pub const TAG_WEIGHT: f64 = 0.25;
pub const ARTIST_WEIGHT: f64 = 0.15;

pub fn score(item: &ContentItem, profile: &PreferenceProfile) -> f64 {
    // The engine falls back to popular before building an empty profile,
    // but guard the division anyway.
    if profile.total_interactions == 0 {
        return 0.0;
    }
    let total = f64::from(profile.total_interactions);

    let category_count = profile
        .category_counts
        .get(&item.category)
        .copied()
        .unwrap_or(0);
    let mut score = f64::from(category_count) / total * CATEGORY_WEIGHT;

    if let Some(origin) = &item.origin {
        if let Some(&count) = profile.origin_counts.get(origin) {
            score += f64::from(count) / total * ORIGIN_WEIGHT;
        }
    }

    if !item.tags.is_empty() {
        let matched = item
            .tags
            .iter()
            .filter(|tag| profile.tag_counts.contains_key(tag.as_str()))
            .count();
        score += matched as f64 / item.tags.len() as f64 * TAG_WEIGHT;
    }

    if let Some(artist) = &item.artist {
        if let Some(&count) = profile.artist_counts.get(artist) {
            score += f64::from(count) / total * ARTIST_WEIGHT;
        }
    }

    score
}
