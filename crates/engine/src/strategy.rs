//! The enumerated set of ranking strategies.
//!
//! The platform this engine was extracted from dispatched on a string-keyed
//! lookup table, which silently produced nothing on a typo. Here the set is
//! a plain enum: dispatch is exhaustively matched, and an unknown name fails
//! at parse time with an explicit error.

use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Selects how catalog items are scored and ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Weighted likes/views score over the whole catalog.
    Popular,
    /// Newest items first.
    Recent,
    /// Linear 30-day recency decay combined with interaction volume.
    Trending,
    /// Preference profile built from the user's history; seen items excluded.
    Personalized,
    /// Similarity to the currently viewed item.
    Similar,
}

impl Strategy {
    /// All strategies, in the order they are documented and listed.
    pub const ALL: [Strategy; 5] = [
        Strategy::Popular,
        Strategy::Recent,
        Strategy::Trending,
        Strategy::Personalized,
        Strategy::Similar,
    ];

    /// Canonical lowercase name, as accepted by `FromStr`.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Popular => "popular",
            Strategy::Recent => "recent",
            Strategy::Trending => "trending",
            Strategy::Personalized => "personalized",
            Strategy::Similar => "similar",
        }
    }

    /// One-line description for CLI listings.
    pub fn description(&self) -> &'static str {
        match self {
            Strategy::Popular => "most liked and viewed items across the catalog",
            Strategy::Recent => "most recently published items",
            Strategy::Trending => "fresh items with strong interaction volume",
            Strategy::Personalized => "matches the user's viewing history, seen items excluded",
            Strategy::Similar => "items resembling the currently viewed one",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "popular" => Ok(Strategy::Popular),
            "recent" => Ok(Strategy::Recent),
            "trending" => Ok(Strategy::Trending),
            "personalized" => Ok(Strategy::Personalized),
            "similar" => Ok(Strategy::Similar),
            other => Err(EngineError::UnknownStrategy(other.to_string())),
        }
    }
}
