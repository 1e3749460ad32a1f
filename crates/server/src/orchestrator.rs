//! # Mood Recommendation Orchestrator
//!
//! This module coordinates the mood-to-recommendation pipeline:
//! 1. Classify the mood text (blocking inference, off the async runtime)
//! 2. Aggregate the 28 raw labels into the 7-category profile
//! 3. Rank the catalog by cosine similarity, take top-K
//! 4. Enrich the top-K through the metadata service (concurrent fan-out,
//!    fan-in preserving rank order, fail-soft per item)
//! 5. Assemble the response
//!
//! The orchestrator is generic over the classifier and the lookup
//! collaborator so tests can inject deterministic stand-ins for both.

use std::sync::Arc;
use std::time::Instant;

use serde::Serialize;
use tokio::sync::Semaphore;
use tracing::{error, info, warn};

use catalog::{CatalogStore, MovieId};
use classifier::EmotionInference;
use enrichment::MetadataLookup;
use pipeline::{CategoryMapping, LabeledProfile, RankedCandidate, aggregate, rank};

use crate::error::RecommendError;

/// Default number of recommendations when the caller does not ask for one
pub const DEFAULT_TOP_K: usize = 10;

/// Final response unit: lookup metadata plus the candidate's score
#[derive(Debug, Clone, Serialize)]
pub struct EnrichedRecommendation {
    pub id: MovieId,
    pub title: String,
    pub overview: String,
    pub poster_path: Option<String>,
    pub release_date: Option<String>,
    pub vote_average: Option<f32>,
    pub similarity_score: f32,
}

/// Full response for one mood query
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationResponse {
    pub user_mood_text: String,
    pub detected_emotion_profile: LabeledProfile,
    pub recommendations: Vec<EnrichedRecommendation>,
}

/// Coordinates the pipeline stages for one request at a time.
///
/// Holds only `Arc`s to process-lifetime immutable assets, so clones are
/// cheap and concurrent requests need no synchronization.
pub struct MoodOrchestrator<C, L> {
    catalog: Arc<CatalogStore>,
    classifier: Arc<C>,
    mapping: Arc<CategoryMapping>,
    lookup: Arc<L>,
    enrich_parallelism: usize,
}

impl<C, L> MoodOrchestrator<C, L>
where
    C: EmotionInference + 'static,
    L: MetadataLookup + 'static,
{
    pub fn new(
        catalog: Arc<CatalogStore>,
        classifier: Arc<C>,
        mapping: Arc<CategoryMapping>,
        lookup: Arc<L>,
        enrich_parallelism: usize,
    ) -> Self {
        Self {
            catalog,
            classifier,
            mapping,
            lookup,
            enrich_parallelism: enrich_parallelism.max(1),
        }
    }

    /// Main entry point: run the full pipeline for one mood text.
    ///
    /// Empty mood text is valid input — the model predicts whatever it
    /// predicts for it. Unexpected faults degrade to the opaque
    /// `Internal` error and fail the whole request; per-item lookup
    /// failures only shrink the result set.
    pub async fn recommend(
        &self,
        mood: &str,
        top_k: Option<usize>,
    ) -> Result<RecommendationResponse, RecommendError> {
        let start_time = Instant::now();
        let k = top_k.unwrap_or(DEFAULT_TOP_K);

        // Inference blocks its worker for the whole forward pass, so it
        // runs on the blocking pool rather than an async worker.
        let model = Arc::clone(&self.classifier);
        let text = mood.to_string();
        let raw = tokio::task::spawn_blocking(move || model.predict(&text))
            .await
            .map_err(|e| {
                error!("Classification task panicked: {}", e);
                RecommendError::Internal
            })?
            .map_err(|e| {
                error!("Classification failed: {}", e);
                RecommendError::Internal
            })?;

        let profile = aggregate(&raw, &self.mapping);
        if profile.is_zero() {
            info!("No emotional signal detected in mood text");
        }

        let candidates = rank(&profile, &self.catalog, k);
        info!(
            "Ranked {} candidates for mood query (k={})",
            candidates.len(),
            k
        );

        let recommendations = self.enrich(&candidates).await;
        info!(
            "Enriched {}/{} candidates in {:.2?}",
            recommendations.len(),
            candidates.len(),
            start_time.elapsed()
        );

        Ok(RecommendationResponse {
            user_mood_text: mood.to_string(),
            detected_emotion_profile: profile.to_labeled(),
            recommendations,
        })
    }

    /// Resolve candidates to full metadata, fail-soft per item.
    ///
    /// Lookups are issued concurrently behind a semaphore cap; results are
    /// awaited in rank order so survivors keep their relative positions
    /// without a re-sort. A failed or panicked lookup drops only its own
    /// item.
    async fn enrich(&self, candidates: &[RankedCandidate]) -> Vec<EnrichedRecommendation> {
        let semaphore = Arc::new(Semaphore::new(self.enrich_parallelism));
        let mut handles = Vec::with_capacity(candidates.len());

        for candidate in candidates {
            let lookup = Arc::clone(&self.lookup);
            let semaphore = Arc::clone(&semaphore);
            let RankedCandidate { movie_id, score } = *candidate;

            handles.push(tokio::spawn(async move {
                // The semaphore is never closed, so acquire only fails if
                // it is dropped; proceeding without a permit is then fine.
                let _permit = semaphore.acquire_owned().await.ok();
                lookup.lookup(movie_id).await.map(|details| (details, score))
            }));
        }

        let mut recommendations = Vec::with_capacity(handles.len());
        for (handle, candidate) in handles.into_iter().zip(candidates) {
            match handle.await {
                Ok(Ok((details, score))) => recommendations.push(EnrichedRecommendation {
                    id: details.id,
                    title: details.title,
                    overview: details.overview,
                    poster_path: details.poster_path,
                    release_date: details.release_date,
                    vote_average: details.vote_average,
                    similarity_score: score,
                }),
                Ok(Err(e)) => {
                    warn!(
                        "Dropping movie {} from results: {}",
                        candidate.movie_id, e
                    );
                }
                Err(e) => {
                    warn!("Lookup task for movie {} panicked: {}", candidate.movie_id, e);
                }
            }
        }

        recommendations
    }
}
