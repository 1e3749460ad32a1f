//! Core domain types for the movie emotion catalog.
//!
//! The catalog is the immutable, process-wide snapshot the ranker scans on
//! every request: one row per movie, each carrying the movie's precomputed
//! 7-dimensional emotion vector. Rows keep their load order because ranking
//! tie-breaks on ascending catalog position.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Unique identifier for a movie (TMDB id in the snapshot we ship)
pub type MovieId = u32;

/// Number of coarse emotion dimensions in a catalog vector
pub const EMOTION_DIMS: usize = 7;

/// One movie's precomputed emotion embedding plus identifying metadata.
///
/// The vector components are non-negative; the loader rejects rows that
/// violate this (see `snapshot`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogRow {
    pub id: MovieId,
    pub title: String,
    pub emotion_vector: [f32; EMOTION_DIMS],
}

/// In-memory catalog: the primary row store plus an id index.
///
/// Built once at startup and shared read-only across all requests via `Arc`,
/// so no locking is ever needed. `rows` preserves snapshot order — that order
/// is the deterministic tie-break for equal similarity scores.
#[derive(Debug)]
pub struct CatalogStore {
    pub(crate) rows: Vec<CatalogRow>,
    /// id -> position in `rows`, for O(1) metadata lookups
    pub(crate) id_index: HashMap<MovieId, usize>,
}

impl CatalogStore {
    /// Creates a new, empty catalog
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            id_index: HashMap::new(),
        }
    }

    /// All rows in snapshot (load) order
    pub fn rows(&self) -> &[CatalogRow] {
        &self.rows
    }

    /// Get a row by movie id
    pub fn get(&self, id: MovieId) -> Option<&CatalogRow> {
        self.id_index.get(&id).map(|&idx| &self.rows[idx])
    }

    /// Number of rows in the catalog
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the catalog holds no rows (valid, yields empty rankings)
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Append a row, keeping the id index in sync.
    ///
    /// Only used by the snapshot loader and by test fixtures; after startup
    /// the store is never mutated again.
    pub fn insert_row(&mut self, row: CatalogRow) {
        self.id_index.insert(row.id, self.rows.len());
        self.rows.push(row);
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}
