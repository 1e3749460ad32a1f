//! Error types for catalog snapshot loading.

use thiserror::Error;

/// Errors that can occur while loading or validating the catalog snapshot
#[derive(Error, Debug)]
pub enum CatalogError {
    /// I/O error occurred while reading the snapshot file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot file was not valid JSON
    #[error("Snapshot parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Snapshot was written by an incompatible schema version
    #[error("Snapshot schema version mismatch: expected {expected}, found {found}")]
    SchemaVersion { expected: u32, found: u32 },

    /// A row's emotion vector had the wrong arity or an invalid component
    #[error("Invalid emotion vector for movie {movie_id}: {reason}")]
    InvalidVector { movie_id: u32, reason: String },

    /// Two rows claimed the same movie id
    #[error("Duplicate movie id in snapshot: {movie_id}")]
    DuplicateId { movie_id: u32 },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
