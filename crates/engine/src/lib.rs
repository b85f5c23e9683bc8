//! # Engine Crate
//!
//! Ranking engine for the cultural content catalog. Given a catalog
//! snapshot, a strategy, and a viewing context, it returns a ranked,
//! size-bounded list of items.
//!
//! ## Components
//!
//! - **strategy**: the enumerated strategy set with parse/display support
//! - **context**: per-call viewing context (current item, history)
//! - **profile**: preference-profile extraction from history
//! - **strategies**: one scoring module per strategy, weights included
//! - **engine**: pool selection, parallel scoring, stable ordering, truncation
//!
//! ## Example Usage
//!
//! ```ignore
//! use engine::{Engine, Strategy, ViewingContext};
//!
//! let engine = Engine::new();
//! let ctx = ViewingContext::new().with_history(history_items);
//!
//! let ranked = engine.rank(&catalog, Strategy::Personalized, &ctx)?;
//! for r in &ranked {
//!     println!("{} {:.3}", r.item.id, r.score);
//! }
//! ```
//!
//! The engine is stateless: every call works purely on its inputs (plus the
//! wall clock for `trending`), so calls are independent and safe to issue
//! concurrently against different snapshots.

// Public modules
pub mod context;
pub mod engine;
pub mod error;
pub mod profile;
pub mod strategies;
pub mod strategy;

// Re-export commonly used types
pub use context::ViewingContext;
pub use engine::{Engine, EngineConfig, RankedItem, DEFAULT_LIMIT};
pub use error::{EngineError, Result};
pub use profile::{build_profile, PreferenceProfile};
pub use strategy::Strategy;
