//! Error types for the catalog crate.

use thiserror::Error;

/// Errors that can occur while loading a catalog file.
///
/// Individually malformed records are not errors: the loader skips them with
/// a warning so one bad entry from an external source cannot take down the
/// whole catalog. These variants cover failures of the file itself.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// I/O error while reading the catalog file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The file parsed but is not a JSON array of records
    #[error("catalog file {path} is not a JSON array")]
    NotAnArray { path: String },

    /// The file is not valid JSON at all
    #[error("failed to parse catalog JSON in {path}: {source}")]
    ParseError {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Convenience type alias for Results in this crate.
pub type Result<T> = std::result::Result<T, CatalogError>;
