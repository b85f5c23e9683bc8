//! The ranking engine: pool selection, scoring, ordering, truncation.
//!
//! `rank` is a pure function of the catalog snapshot, the strategy, the
//! viewing context, and (for `trending`) wall-clock time. The engine holds
//! no state beyond its configuration, so one instance can serve any number
//! of concurrent callers.

use crate::context::ViewingContext;
use crate::error::{EngineError, Result};
use crate::profile::build_profile;
use crate::strategies::{personalized, popular, recent, similar, trending};
use crate::strategy::Strategy;
use catalog::{Catalog, ContentItem};
use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::Serialize;
use std::cmp::Ordering;
use tracing::{debug, instrument, warn};

/// How many items a ranking returns at most, unless configured otherwise.
pub const DEFAULT_LIMIT: usize = 6;

/// Tunable engine settings. The defaults match the platform's behavior
/// except for origin matching, where the strict interpretation wins.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Maximum number of ranked items returned per call.
    pub limit: usize,
    /// Whether two items that both lack an origin count as origin-matched
    /// in `similar`. The platform's loose equality check behaved as if this
    /// were true; off by default.
    pub null_origin_matches: bool,
    /// Defensive bound on catalog size. `None` accepts any catalog.
    pub max_catalog_len: Option<usize>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            null_origin_matches: false,
            max_catalog_len: None,
        }
    }
}

/// A content item paired with the score and strategy that ranked it.
#[derive(Debug, Clone, Serialize)]
pub struct RankedItem {
    pub item: ContentItem,
    /// Strategy-dependent relevance value, meaningful for display and
    /// ordering only.
    pub score: f64,
    /// The strategy that actually scored this item. Differs from the
    /// requested one when a missing context triggered the popular fallback.
    pub strategy: Strategy,
}

/// Stateless ranking engine over caller-supplied catalog snapshots.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    /// Create an engine with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with explicit configuration.
    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Rank the catalog for the given strategy and context.
    ///
    /// Returns at most `config.limit` items, best first. An empty catalog
    /// yields an empty list. Only a configured catalog bound can fail this.
    #[instrument(skip(self, catalog, ctx), fields(strategy = %strategy, catalog_len = catalog.len()))]
    pub fn rank(
        &self,
        catalog: &Catalog,
        strategy: Strategy,
        ctx: &ViewingContext,
    ) -> Result<Vec<RankedItem>> {
        self.rank_at(catalog, strategy, ctx, Utc::now())
    }

    /// Like [`rank`](Self::rank), with an explicit clock for the
    /// time-dependent strategies. This is what tests call.
    pub fn rank_at(
        &self,
        catalog: &Catalog,
        strategy: Strategy,
        ctx: &ViewingContext,
        now: DateTime<Utc>,
    ) -> Result<Vec<RankedItem>> {
        if let Some(max) = self.config.max_catalog_len {
            if catalog.len() > max {
                return Err(EngineError::CatalogTooLarge {
                    len: catalog.len(),
                    max,
                });
            }
        }

        let candidates: Vec<&ContentItem> = catalog
            .items()
            .iter()
            .filter(|item| {
                if item.is_well_formed() {
                    true
                } else {
                    warn!("skipping catalog item with blank id");
                    false
                }
            })
            .collect();

        let ranked = match strategy {
            Strategy::Popular => self.score_pool(&candidates, Strategy::Popular, popular::score),
            Strategy::Recent => self.score_pool(&candidates, Strategy::Recent, recent::score),
            Strategy::Trending => {
                self.score_pool(&candidates, Strategy::Trending, |item| {
                    trending::score(item, now)
                })
            }
            Strategy::Personalized => {
                if ctx.history.is_empty() {
                    debug!("no history supplied, falling back to popular");
                    self.score_pool(&candidates, Strategy::Popular, popular::score)
                } else {
                    let profile = build_profile(&ctx.history);
                    let seen = ctx.history_ids();
                    let pool: Vec<&ContentItem> = candidates
                        .iter()
                        .copied()
                        .filter(|item| !seen.contains(item.id.as_str()))
                        .collect();
                    debug!(
                        pool = pool.len(),
                        already_seen = candidates.len() - pool.len(),
                        "built personalized candidate pool"
                    );
                    self.score_pool(&pool, Strategy::Personalized, |item| {
                        personalized::score(item, &profile)
                    })
                }
            }
            Strategy::Similar => match &ctx.current_item {
                None => {
                    debug!("no current item supplied, falling back to popular");
                    self.score_pool(&candidates, Strategy::Popular, popular::score)
                }
                Some(current) => {
                    let pool: Vec<&ContentItem> = candidates
                        .iter()
                        .copied()
                        .filter(|item| item.id != current.id)
                        .collect();
                    let null_origin_matches = self.config.null_origin_matches;
                    self.score_pool(&pool, Strategy::Similar, |item| {
                        similar::score(item, current, null_origin_matches)
                    })
                }
            },
        };

        debug!(returned = ranked.len(), "ranking complete");
        Ok(ranked)
    }

    /// Score a candidate pool in parallel, then order and truncate.
    ///
    /// The sort is stable and keys on score alone, so equal scores keep
    /// their catalog order and results are deterministic.
    fn score_pool<F>(&self, pool: &[&ContentItem], strategy: Strategy, score_fn: F) -> Vec<RankedItem>
    where
        F: Fn(&ContentItem) -> f64 + Sync,
    {
        let mut ranked: Vec<RankedItem> = pool
            .par_iter()
            .map(|&item| RankedItem {
                item: item.clone(),
                score: score_fn(item),
                strategy,
            })
            .collect();

        ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        ranked.truncate(self.config.limit);
        ranked
    }
}
