//! Similarity ranking: profile against every catalog row.
//!
//! The similarity is written out as an explicit numeric contract (dot
//! product over norms) rather than delegated to a library call, so the
//! zero-norm and tie-break edge cases stay visible and testable:
//!
//! - either vector with zero norm -> similarity 0
//! - equal scores keep ascending catalog load order (stable sort)
//! - identical profile + catalog always produce identical output

use catalog::{CatalogStore, MovieId};
use std::cmp::Ordering;
use tracing::debug;

use crate::profile::UserEmotionProfile;

/// One ranked catalog row, ephemeral per request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedCandidate {
    pub movie_id: MovieId,
    /// Cosine similarity in [-1, 1]
    pub score: f32,
}

/// Cosine similarity `dot(u, v) / (‖u‖·‖v‖)`, defined as 0 when either
/// vector has zero norm.
pub fn cosine_similarity(u: &[f32], v: &[f32]) -> f32 {
    let dot: f32 = u.iter().zip(v.iter()).map(|(a, b)| a * b).sum();
    let norm_u: f32 = u.iter().map(|a| a * a).sum::<f32>().sqrt();
    let norm_v: f32 = v.iter().map(|b| b * b).sum::<f32>().sqrt();

    if norm_u == 0.0 || norm_v == 0.0 {
        return 0.0;
    }
    dot / (norm_u * norm_v)
}

/// Rank the whole catalog against a profile and return the top `min(k, n)`.
///
/// `k == 0` and an empty catalog both yield an empty result; neither is an
/// error. The sort is stable, so equal scores (including the all-zero
/// degenerate profile, where every score is 0) retain catalog order.
pub fn rank(
    profile: &UserEmotionProfile,
    catalog: &CatalogStore,
    k: usize,
) -> Vec<RankedCandidate> {
    if k == 0 || catalog.is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<RankedCandidate> = catalog
        .rows()
        .iter()
        .map(|row| RankedCandidate {
            movie_id: row.id,
            score: cosine_similarity(profile.components(), &row.emotion_vector),
        })
        .collect();

    // Vec::sort_by is stable: ties keep ascending catalog load order.
    // Scores are finite (vectors are validated at load), so the NaN arm of
    // partial_cmp is unreachable in practice.
    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    scored.truncate(k);

    debug!("Ranked {} candidates (k={})", scored.len(), k);
    scored
}
