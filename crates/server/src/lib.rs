//! Server crate for the MoodFlicks recommendation engine.
//!
//! This crate contains the startup asset loader, the orchestrator that
//! coordinates the mood-to-recommendation pipeline, and the service facade
//! that carries the readiness flag and the request-level error taxonomy.

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod orchestrator;
pub mod service;

pub use bootstrap::{BootstrapError, EngineAssets, load_assets};
pub use config::EngineConfig;
pub use error::RecommendError;
pub use orchestrator::{
    DEFAULT_TOP_K, EnrichedRecommendation, MoodOrchestrator, RecommendationResponse,
};
pub use service::MoodService;
