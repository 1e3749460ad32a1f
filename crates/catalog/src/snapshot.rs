//! Versioned catalog snapshot loading.
//!
//! The snapshot is a JSON artifact produced offline (the emotion vectors are
//! precomputed by the same classifier that serves requests, run over each
//! movie's overview text). Format:
//!
//! ```json
//! {
//!   "version": 1,
//!   "rows": [
//!     { "id": 603, "title": "The Matrix", "emotion_vector": [0.1, ...] }
//!   ]
//! }
//! ```
//!
//! The version field exists so schema drift is caught at load time rather
//! than as silent garbage rankings. Vectors are validated for arity and
//! non-negativity before the store is published.

use crate::error::{CatalogError, Result};
use crate::types::{CatalogRow, CatalogStore, EMOTION_DIMS, MovieId};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::info;

/// Schema version this build reads and writes
pub const SNAPSHOT_VERSION: u32 = 1;

/// On-disk snapshot envelope.
///
/// Rows deserialize their vector into a `Vec<f32>` rather than the fixed
/// array so an arity mismatch surfaces as a descriptive `InvalidVector`
/// instead of a generic serde error.
#[derive(Debug, Deserialize)]
struct Snapshot {
    version: u32,
    rows: Vec<SnapshotRow>,
}

#[derive(Debug, Deserialize)]
struct SnapshotRow {
    id: MovieId,
    title: String,
    emotion_vector: Vec<f32>,
}

impl CatalogStore {
    /// Load and validate a catalog snapshot from disk.
    ///
    /// This is the main entry point for startup loading. Any failure here
    /// (missing file, bad JSON, version drift, malformed vector) must leave
    /// the process in its degraded state — callers do not retry.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading catalog snapshot from {:?}", path);
        let contents = fs::read_to_string(path)?;
        let store = parse_snapshot(&contents)?;
        info!("Loaded catalog with {} rows", store.len());
        Ok(store)
    }
}

/// Parse a snapshot from its JSON text and build the catalog store.
///
/// Split out from file loading so tests can feed snapshots as string
/// literals without touching the filesystem.
pub fn parse_snapshot(contents: &str) -> Result<CatalogStore> {
    let snapshot: Snapshot = serde_json::from_str(contents)?;

    if snapshot.version != SNAPSHOT_VERSION {
        return Err(CatalogError::SchemaVersion {
            expected: SNAPSHOT_VERSION,
            found: snapshot.version,
        });
    }

    let mut store = CatalogStore::new();
    for row in snapshot.rows {
        let vector = validate_vector(row.id, row.emotion_vector)?;
        if store.get(row.id).is_some() {
            return Err(CatalogError::DuplicateId { movie_id: row.id });
        }
        store.insert_row(CatalogRow {
            id: row.id,
            title: row.title,
            emotion_vector: vector,
        });
    }

    Ok(store)
}

/// Check arity and component validity, converting to the fixed-size array
fn validate_vector(movie_id: MovieId, raw: Vec<f32>) -> Result<[f32; EMOTION_DIMS]> {
    if raw.len() != EMOTION_DIMS {
        return Err(CatalogError::InvalidVector {
            movie_id,
            reason: format!("expected {} components, found {}", EMOTION_DIMS, raw.len()),
        });
    }
    for (i, &component) in raw.iter().enumerate() {
        if !component.is_finite() || component < 0.0 {
            return Err(CatalogError::InvalidVector {
                movie_id,
                reason: format!("component {} is {} (must be finite and >= 0)", i, component),
            });
        }
    }
    // Length was checked above, so the conversion cannot fail
    let mut vector = [0.0; EMOTION_DIMS];
    vector.copy_from_slice(&raw);
    Ok(vector)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot_json(version: u32, rows: &str) -> String {
        format!(r#"{{ "version": {}, "rows": [{}] }}"#, version, rows)
    }

    #[test]
    fn test_parse_valid_snapshot() {
        let json = snapshot_json(
            1,
            r#"{ "id": 603, "title": "The Matrix", "emotion_vector": [0.1, 0.0, 0.2, 0.4, 0.1, 0.1, 0.1] },
               { "id": 862, "title": "Toy Story", "emotion_vector": [0.7, 0.1, 0.0, 0.0, 0.0, 0.2, 0.0] }"#,
        );

        let store = parse_snapshot(&json).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(603).unwrap().title, "The Matrix");
        assert_eq!(store.get(862).unwrap().emotion_vector[0], 0.7);
        // Load order preserved
        assert_eq!(store.rows()[0].id, 603);
        assert_eq!(store.rows()[1].id, 862);
    }

    #[test]
    fn test_version_drift_is_rejected() {
        let json = snapshot_json(
            2,
            r#"{ "id": 1, "title": "X", "emotion_vector": [0, 0, 0, 0, 0, 0, 0] }"#,
        );

        let err = parse_snapshot(&json).unwrap_err();
        match err {
            CatalogError::SchemaVersion { expected, found } => {
                assert_eq!(expected, SNAPSHOT_VERSION);
                assert_eq!(found, 2);
            }
            other => panic!("expected SchemaVersion error, got {:?}", other),
        }
    }

    #[test]
    fn test_wrong_vector_arity_is_rejected() {
        let json = snapshot_json(1, r#"{ "id": 1, "title": "X", "emotion_vector": [0.5, 0.5] }"#);

        let err = parse_snapshot(&json).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidVector { movie_id: 1, .. }));
    }

    #[test]
    fn test_negative_component_is_rejected() {
        let json = snapshot_json(
            1,
            r#"{ "id": 7, "title": "X", "emotion_vector": [0.1, -0.2, 0.0, 0.0, 0.0, 0.0, 0.0] }"#,
        );

        let err = parse_snapshot(&json).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidVector { movie_id: 7, .. }));
    }

    #[test]
    fn test_duplicate_id_is_rejected() {
        let json = snapshot_json(
            1,
            r#"{ "id": 1, "title": "A", "emotion_vector": [0, 0, 0, 0, 0, 0, 0] },
               { "id": 1, "title": "B", "emotion_vector": [0, 0, 0, 0, 0, 0, 0] }"#,
        );

        let err = parse_snapshot(&json).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId { movie_id: 1 }));
    }

    #[test]
    fn test_empty_catalog_is_valid() {
        let json = snapshot_json(1, "");
        let store = parse_snapshot(&json).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        let err = parse_snapshot("{ not json").unwrap_err();
        assert!(matches!(err, CatalogError::Json(_)));
    }
}
