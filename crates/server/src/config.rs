//! Engine configuration.
//!
//! Settings come from the environment with sensible defaults; binaries may
//! override individual fields from CLI flags. There is no config-file layer.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Everything the startup loader and orchestrator need to come up
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Catalog snapshot artifact (versioned JSON)
    pub catalog_path: PathBuf,
    /// Directory with tokenizer.json / config.json / model.safetensors
    pub model_dir: PathBuf,
    /// Base URL of the metadata lookup service
    pub metadata_base_url: String,
    /// API key for the metadata service
    pub metadata_api_key: String,
    /// Bound applied to every individual metadata lookup
    pub lookup_timeout: Duration,
    /// Cap on concurrent enrichment lookups per request
    pub enrich_parallelism: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from("data/catalog.json"),
            model_dir: PathBuf::from("models/go-emotions"),
            metadata_base_url: "https://api.themoviedb.org/3".to_string(),
            metadata_api_key: String::new(),
            lookup_timeout: Duration::from_secs(5),
            enrich_parallelism: 4,
        }
    }
}

impl EngineConfig {
    /// Build a config from the environment, falling back to defaults.
    ///
    /// Recognized variables: `MOODFLICKS_CATALOG`, `MOODFLICKS_MODEL_DIR`,
    /// `TMDB_BASE_URL`, `TMDB_API_KEY`, `MOODFLICKS_LOOKUP_TIMEOUT_MS`,
    /// `MOODFLICKS_ENRICH_PARALLELISM`.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            catalog_path: env::var("MOODFLICKS_CATALOG")
                .map(PathBuf::from)
                .unwrap_or(defaults.catalog_path),
            model_dir: env::var("MOODFLICKS_MODEL_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.model_dir),
            metadata_base_url: env::var("TMDB_BASE_URL").unwrap_or(defaults.metadata_base_url),
            metadata_api_key: env::var("TMDB_API_KEY").unwrap_or(defaults.metadata_api_key),
            lookup_timeout: env::var("MOODFLICKS_LOOKUP_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(defaults.lookup_timeout),
            enrich_parallelism: env::var("MOODFLICKS_ENRICH_PARALLELISM")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enrich_parallelism),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.lookup_timeout, Duration::from_secs(5));
        assert_eq!(config.enrich_parallelism, 4);
        assert!(config.metadata_base_url.starts_with("https://"));
    }
}
