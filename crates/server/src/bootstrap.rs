//! Startup asset loading.
//!
//! Runs exactly once per process lifetime: deserialize the catalog
//! snapshot, load the frozen classifier, build the category mapping. On any
//! failure the service stays degraded (see `MoodService`) and every request
//! fails fast — there is no automatic retry, a restart re-attempts the load.

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use catalog::{CatalogError, CatalogStore};
use classifier::{ClassifierError, EmotionClassifier};
use enrichment::LookupError;
use pipeline::CategoryMapping;

use crate::config::EngineConfig;

/// Reasons the engine can fail to come up
#[derive(Error, Debug)]
pub enum BootstrapError {
    #[error("Catalog load failed: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Classifier load failed: {0}")]
    Classifier(#[from] ClassifierError),

    #[error("Metadata client init failed: {0}")]
    Lookup(#[from] LookupError),
}

/// The immutable, process-lifetime assets every request shares
pub struct EngineAssets {
    pub catalog: Arc<CatalogStore>,
    pub classifier: Arc<EmotionClassifier>,
    pub mapping: Arc<CategoryMapping>,
}

/// Load and validate all startup assets.
pub fn load_assets(config: &EngineConfig) -> Result<EngineAssets, BootstrapError> {
    let catalog = CatalogStore::load_from_file(&config.catalog_path)?;
    let classifier = EmotionClassifier::load(&config.model_dir)?;
    let mapping = CategoryMapping::new();

    info!(
        "Engine assets loaded: {} catalog rows, classifier ready",
        catalog.len()
    );

    Ok(EngineAssets {
        catalog: Arc::new(catalog),
        classifier: Arc::new(classifier),
        mapping: Arc::new(mapping),
    })
}
