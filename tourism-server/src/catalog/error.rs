//! Catalog loading errors.

use std::path::PathBuf;

/// Errors that can occur while loading reference data.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Catalog file could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Catalog JSON is malformed
    #[error("JSON parse error in {what}: {message}")]
    Json { what: &'static str, message: String },

    /// Two entries share an identifier
    #[error("duplicate {what} id: {id}")]
    DuplicateId { what: &'static str, id: String },
}
