//! Error types for the ranking engine.

use thiserror::Error;

/// Errors a ranking call (or strategy lookup) can surface.
///
/// Missing context is never an error: `personalized` without history and
/// `similar` without a current item fall back to `popular` by contract.
/// Malformed catalog items are skipped with a warning, not failed on.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Caller asked for a strategy name outside the enumerated set
    #[error("unknown strategy \"{0}\" (expected one of: popular, recent, trending, personalized, similar)")]
    UnknownStrategy(String),

    /// The configured defensive catalog bound was exceeded
    #[error("catalog has {len} items, more than the configured maximum of {max}")]
    CatalogTooLarge { len: usize, max: usize },
}

/// Convenience type alias for Results in this crate.
pub type Result<T> = std::result::Result<T, EngineError>;
