//! Scoring functions, one module per strategy.
//!
//! Each module exposes its weight constants and a pure `score` function
//! mapping one item (plus whatever context the strategy needs) to a score.
//! The engine handles pool selection, sorting, and truncation; nothing here
//! mutates anything.
//!
//! The weight values are the tunable surface of the scoring model and are
//! kept exactly as the platform shipped them.

pub mod personalized;
pub mod popular;
pub mod recent;
pub mod similar;
pub mod trending;
