//! The inbound service facade with its readiness flag.
//!
//! Wraps the orchestrator behind the degraded-state contract: if startup
//! loading fails, the service still constructs, reports `is_ready() ==
//! false`, and fails every request fast with `ModelUnavailable` — no
//! partial pipeline work, no enrichment calls. Restarting the process is
//! the only way to re-attempt the load.

use std::sync::Arc;

use tracing::{error, info};

use classifier::{EmotionClassifier, EmotionInference};
use enrichment::{MetadataLookup, TmdbClient};

use crate::bootstrap::{self, BootstrapError};
use crate::config::EngineConfig;
use crate::error::RecommendError;
use crate::orchestrator::{MoodOrchestrator, RecommendationResponse};

/// Inbound query facade; `None` inside means degraded
pub struct MoodService<C, L> {
    orchestrator: Option<Arc<MoodOrchestrator<C, L>>>,
}

impl MoodService<EmotionClassifier, TmdbClient> {
    /// Bring the engine up from config. Never fails: a load error is
    /// logged and yields a degraded service instead.
    pub fn start(config: &EngineConfig) -> Self {
        match Self::try_start(config) {
            Ok(service) => {
                info!("Mood recommendation service is ready");
                service
            }
            Err(e) => {
                error!("Startup load failed, service is degraded: {}", e);
                Self::degraded()
            }
        }
    }

    fn try_start(config: &EngineConfig) -> Result<Self, BootstrapError> {
        let assets = bootstrap::load_assets(config)?;
        let lookup = TmdbClient::new(
            &config.metadata_base_url,
            &config.metadata_api_key,
            config.lookup_timeout,
        )?;

        Ok(Self::ready(MoodOrchestrator::new(
            assets.catalog,
            assets.classifier,
            assets.mapping,
            Arc::new(lookup),
            config.enrich_parallelism,
        )))
    }
}

impl<C, L> MoodService<C, L>
where
    C: EmotionInference + 'static,
    L: MetadataLookup + 'static,
{
    /// Wrap an already-constructed orchestrator (used by tests and by
    /// `start`)
    pub fn ready(orchestrator: MoodOrchestrator<C, L>) -> Self {
        Self {
            orchestrator: Some(Arc::new(orchestrator)),
        }
    }

    /// A service whose startup load failed
    pub fn degraded() -> Self {
        Self { orchestrator: None }
    }

    /// Readiness flag published to all callers
    pub fn is_ready(&self) -> bool {
        self.orchestrator.is_some()
    }

    /// The single inbound query operation.
    ///
    /// `mood` is required (absent -> `InvalidInput`, the bad-request
    /// analog); the empty string is still a valid mood. `top_k` defaults
    /// to 10.
    pub async fn recommend(
        &self,
        mood: Option<&str>,
        top_k: Option<usize>,
    ) -> Result<RecommendationResponse, RecommendError> {
        let Some(orchestrator) = &self.orchestrator else {
            return Err(RecommendError::ModelUnavailable);
        };

        let mood = mood
            .ok_or_else(|| RecommendError::InvalidInput("a 'mood' parameter is required".into()))?;

        orchestrator.recommend(mood, top_k).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use catalog::{CatalogRow, CatalogStore, MovieId};
    use classifier::{NUM_LABELS, RawEmotionVector};
    use enrichment::{LookupError, MovieDetails};
    use pipeline::CategoryMapping;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StubClassifier;

    impl EmotionInference for StubClassifier {
        fn predict(&self, _text: &str) -> classifier::Result<RawEmotionVector> {
            let mut raw = [0.0f32; NUM_LABELS];
            raw[17] = 0.8; // joy
            Ok(raw)
        }
    }

    /// Counts lookups so tests can prove none happen when degraded
    struct CountingLookup {
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl MetadataLookup for CountingLookup {
        async fn lookup(&self, movie_id: MovieId) -> Result<MovieDetails, LookupError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(MovieDetails {
                id: movie_id,
                title: format!("Movie {}", movie_id),
                overview: String::new(),
                poster_path: None,
                release_date: None,
                vote_average: None,
            })
        }
    }

    fn one_row_catalog() -> Arc<CatalogStore> {
        let mut store = CatalogStore::new();
        store.insert_row(CatalogRow {
            id: 1,
            title: "Movie 1".to_string(),
            emotion_vector: [1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        });
        Arc::new(store)
    }

    #[tokio::test]
    async fn test_degraded_service_fails_fast_with_no_enrichment_calls() {
        let calls = Arc::new(AtomicUsize::new(0));
        let service: MoodService<StubClassifier, CountingLookup> = MoodService::degraded();

        assert!(!service.is_ready());
        let err = service.recommend(Some("happy"), None).await.unwrap_err();
        assert_eq!(err, RecommendError::ModelUnavailable);
        assert_eq!(calls.load(Ordering::SeqCst), 0, "zero enrichment calls when degraded");
    }

    #[tokio::test]
    async fn test_missing_mood_is_invalid_input() {
        let calls = Arc::new(AtomicUsize::new(0));
        let service = MoodService::ready(crate::orchestrator::MoodOrchestrator::new(
            one_row_catalog(),
            Arc::new(StubClassifier),
            Arc::new(CategoryMapping::new()),
            Arc::new(CountingLookup {
                calls: Arc::clone(&calls),
            }),
            4,
        ));

        let err = service.recommend(None, None).await.unwrap_err();
        assert!(matches!(err, RecommendError::InvalidInput(_)));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_ready_service_serves_requests() {
        let calls = Arc::new(AtomicUsize::new(0));
        let service = MoodService::ready(crate::orchestrator::MoodOrchestrator::new(
            one_row_catalog(),
            Arc::new(StubClassifier),
            Arc::new(CategoryMapping::new()),
            Arc::new(CountingLookup {
                calls: Arc::clone(&calls),
            }),
            4,
        ));

        assert!(service.is_ready());
        let response = service.recommend(Some("happy"), None).await.unwrap();
        assert_eq!(response.recommendations.len(), 1);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
