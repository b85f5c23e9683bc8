//! Preference-profile extraction from an interaction history.
//!
//! The profile is ephemeral: `personalized` builds it fresh from the supplied
//! history on every call and discards it when the call returns. Nothing is
//! cached across invocations.

use catalog::{Category, ContentItem};
use std::collections::HashMap;

/// Aggregated occurrence counts over a user's interaction history.
#[derive(Debug, Clone, Default)]
pub struct PreferenceProfile {
    pub category_counts: HashMap<Category, u32>,
    pub origin_counts: HashMap<String, u32>,
    pub tag_counts: HashMap<String, u32>,
    pub artist_counts: HashMap<String, u32>,
    /// Number of history entries the counts were drawn from.
    pub total_interactions: u32,
}

/// Count category, origin, tag, and artist occurrences across a history.
pub fn build_profile(history: &[ContentItem]) -> PreferenceProfile {
    let mut profile = PreferenceProfile {
        total_interactions: history.len() as u32,
        ..PreferenceProfile::default()
    };

    for entry in history {
        *profile.category_counts.entry(entry.category).or_insert(0) += 1;

        if let Some(origin) = &entry.origin {
            *profile.origin_counts.entry(origin.clone()).or_insert(0) += 1;
        }
        for tag in &entry.tags {
            *profile.tag_counts.entry(tag.clone()).or_insert(0) += 1;
        }
        if let Some(artist) = &entry.artist {
            *profile.artist_counts.entry(artist.clone()).or_insert(0) += 1;
        }
    }

    profile
}
