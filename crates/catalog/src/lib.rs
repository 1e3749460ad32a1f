//! # Catalog Crate
//!
//! This crate handles loading and indexing the movie emotion catalog.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (CatalogRow, CatalogStore)
//! - **snapshot**: Versioned snapshot parsing and validation
//! - **error**: Error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::CatalogStore;
//! use std::path::Path;
//!
//! // Load the snapshot once at startup
//! let store = CatalogStore::load_from_file(Path::new("data/catalog.json"))?;
//!
//! // Query data
//! let row = store.get(603).unwrap();
//! println!("{} has vector {:?}", row.title, row.emotion_vector);
//! ```
//!
//! The store is immutable after loading and shared read-only across all
//! requests; wrap it in `Arc` and never take a lock.

// Public modules
pub mod error;
pub mod snapshot;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use snapshot::{SNAPSHOT_VERSION, parse_snapshot};
pub use types::{CatalogRow, CatalogStore, EMOTION_DIMS, MovieId};
