//! Metadata lookup client for the external movie-metadata service.
//!
//! This crate provides the outbound collaborator boundary of the pipeline:
//! resolving a catalog movie id to full display metadata. It handles:
//! - The `MetadataLookup` trait the orchestrator fans out over
//! - A TMDB-style HTTP client with a bounded per-call timeout
//! - Error classification so the orchestrator can drop single items
//!
//! Lookup failures are per-item by contract: the caller logs and drops the
//! item, never the whole batch. Nothing in this crate retries.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use catalog::MovieId;

/// Errors that can occur for a single metadata lookup
#[derive(Error, Debug)]
pub enum LookupError {
    /// The service has no record for this movie id
    #[error("Movie {movie_id} not found in metadata service")]
    NotFound { movie_id: MovieId },

    /// The per-call timeout elapsed
    #[error("Metadata lookup for movie {movie_id} timed out")]
    Timeout { movie_id: MovieId },

    /// Transport-level failure (connection, TLS, non-success status)
    #[error("Metadata service error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a payload we could not decode
    #[error("Malformed metadata response: {reason}")]
    Malformed { reason: String },
}

/// Full display metadata for one movie, as returned by the lookup service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieDetails {
    pub id: MovieId,
    pub title: String,
    #[serde(default)]
    pub overview: String,
    pub poster_path: Option<String>,
    pub release_date: Option<String>,
    pub vote_average: Option<f32>,
}

/// Seam between the orchestrator and the concrete metadata service.
///
/// Implemented by `TmdbClient` in production and by in-process mocks in
/// tests, so the fail-soft enrichment contract can be exercised without a
/// network.
#[async_trait]
pub trait MetadataLookup: Send + Sync {
    /// Resolve one movie id to its metadata
    async fn lookup(&self, movie_id: MovieId) -> Result<MovieDetails, LookupError>;
}

/// HTTP client for the TMDB-style metadata API.
///
/// One reqwest client is built at startup with the per-call timeout baked
/// in; clones are cheap and share the connection pool.
#[derive(Clone)]
pub struct TmdbClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl TmdbClient {
    /// Build a client for the given service endpoint.
    ///
    /// # Arguments
    /// * `base_url` - e.g. "https://api.themoviedb.org/3"
    /// * `api_key` - service API key, sent as a query parameter
    /// * `timeout` - bound applied to every individual lookup call
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, LookupError> {
        let http = reqwest::Client::builder()
            .user_agent("moodflicks/0.1")
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    fn movie_url(&self, movie_id: MovieId) -> String {
        format!("{}/movie/{}", self.base_url, movie_id)
    }
}

#[async_trait]
impl MetadataLookup for TmdbClient {
    async fn lookup(&self, movie_id: MovieId) -> Result<MovieDetails, LookupError> {
        debug!("Looking up metadata for movie {}", movie_id);

        let response = self
            .http
            .get(self.movie_url(movie_id))
            .query(&[("api_key", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| classify_transport_error(movie_id, e))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(LookupError::NotFound { movie_id });
        }

        let response = response
            .error_for_status()
            .map_err(|e| classify_transport_error(movie_id, e))?;

        response
            .json::<MovieDetails>()
            .await
            .map_err(|e| LookupError::Malformed {
                reason: e.to_string(),
            })
    }
}

/// Distinguish timeouts from other transport failures
fn classify_transport_error(movie_id: MovieId, err: reqwest::Error) -> LookupError {
    if err.is_timeout() {
        LookupError::Timeout { movie_id }
    } else {
        LookupError::Http(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_details_deserializes_service_payload() {
        let payload = r#"{
            "id": 603,
            "title": "The Matrix",
            "overview": "A computer hacker learns the truth.",
            "poster_path": "/matrix.jpg",
            "release_date": "1999-03-31",
            "vote_average": 8.2,
            "runtime": 136
        }"#;

        let details: MovieDetails = serde_json::from_str(payload).unwrap();
        assert_eq!(details.id, 603);
        assert_eq!(details.title, "The Matrix");
        assert_eq!(details.poster_path.as_deref(), Some("/matrix.jpg"));
        assert_eq!(details.vote_average, Some(8.2));
    }

    #[test]
    fn test_movie_details_tolerates_sparse_payload() {
        // Some records have no poster or release date yet
        let payload = r#"{ "id": 1, "title": "Untitled" }"#;

        let details: MovieDetails = serde_json::from_str(payload).unwrap();
        assert_eq!(details.overview, "");
        assert!(details.poster_path.is_none());
        assert!(details.release_date.is_none());
        assert!(details.vote_average.is_none());
    }

    #[test]
    fn test_movie_url_formatting() {
        let client = TmdbClient::new(
            "https://api.themoviedb.org/3/",
            "key",
            Duration::from_secs(5),
        )
        .unwrap();
        assert_eq!(client.movie_url(603), "https://api.themoviedb.org/3/movie/603");
    }
}
