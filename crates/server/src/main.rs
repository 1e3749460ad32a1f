//! Simple test harness for the mood recommendation service.
//!
//! This binary brings the engine up from the environment and runs a single
//! mood query end-to-end, logging the result.

use anyhow::Result;
use tracing::{info, warn};

use server::{EngineConfig, MoodService};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter("info,server=debug,pipeline=debug,enrichment=debug")
        .init();

    info!("Starting MoodFlicks server test harness");

    let config = EngineConfig::from_env();
    info!(
        "Loading assets: catalog={:?}, model={:?}",
        config.catalog_path, config.model_dir
    );

    let service = MoodService::start(&config);
    if !service.is_ready() {
        warn!("Service came up degraded; requests will fail fast");
    }

    let mood = "long week, need something warm and hopeful";
    info!("Querying recommendations for mood: {:?}", mood);

    let response = service.recommend(Some(mood), None).await?;

    info!("Detected profile: {:?}", response.detected_emotion_profile);
    info!("Received {} recommendations:", response.recommendations.len());
    for (i, rec) in response.recommendations.iter().enumerate() {
        info!(
            "{}. {} ({}) - Similarity: {:.3}",
            i + 1,
            rec.title,
            rec.release_date.as_deref().unwrap_or("????"),
            rec.similarity_score
        );
    }

    Ok(())
}
