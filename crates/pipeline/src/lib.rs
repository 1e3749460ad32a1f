//! Pipeline for turning a raw classification into a ranked candidate list.
//!
//! This crate provides the two pure stages between the classifier and the
//! enrichment layer:
//! - **profile**: CategoryMapping and the 28 -> 7 emotion aggregation
//! - **ranker**: cosine-similarity top-K over the catalog
//!
//! Both stages are synchronous, allocation-light and side-effect free; all
//! I/O lives in the surrounding crates.
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{CategoryMapping, aggregate, rank};
//!
//! let mapping = CategoryMapping::new(); // once, at startup
//!
//! let raw = model.predict("rainy day, want something warm")?;
//! let profile = aggregate(&raw, &mapping);
//! let top = rank(&profile, &catalog, 10);
//! ```

pub mod profile;
pub mod ranker;

// Re-export main types
pub use profile::{CategoryMapping, EmotionCategory, LabeledProfile, UserEmotionProfile, aggregate};
pub use ranker::{RankedCandidate, cosine_similarity, rank};
