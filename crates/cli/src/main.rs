use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::time::Instant;

use catalog::CatalogStore;
use classifier::{EmotionClassifier, EmotionInference};
use pipeline::{CategoryMapping, aggregate};
use server::{EngineConfig, MoodService, RecommendError};

/// MoodFlicks - mood-based movie recommendations
#[derive(Parser)]
#[command(name = "mood-recs")]
#[command(about = "Recommend movies from a free-text mood description", long_about = None)]
struct Cli {
    /// Path to the catalog snapshot
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Path to the classifier model directory
    #[arg(long)]
    model_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Get movie recommendations for a mood
    Recommend {
        /// Free-text description of your mood
        #[arg(long)]
        mood: Option<String>,

        /// Number of recommendations to return
        #[arg(long, default_value = "10")]
        top_k: usize,
    },

    /// Show the detected emotion profile for a mood (no lookups)
    Profile {
        /// Free-text description of your mood
        #[arg(long)]
        mood: Option<String>,
    },

    /// Show catalog snapshot info
    Catalog,
}

// Exit codes mirroring the inbound status contract
const EXIT_BAD_REQUEST: i32 = 2;
const EXIT_UNAVAILABLE: i32 = 3;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    // Environment config with flag overrides
    let mut config = EngineConfig::from_env();
    if let Some(catalog) = cli.catalog {
        config.catalog_path = catalog;
    }
    if let Some(model_dir) = cli.model_dir {
        config.model_dir = model_dir;
    }

    match cli.command {
        Commands::Recommend { mood, top_k } => handle_recommend(config, mood, top_k).await,
        Commands::Profile { mood } => handle_profile(config, mood),
        Commands::Catalog => handle_catalog(config),
    }
}

async fn handle_recommend(config: EngineConfig, mood: Option<String>, top_k: usize) -> Result<()> {
    println!("Loading engine assets...");
    let start = Instant::now();
    let service = MoodService::start(&config);
    println!("{} Engine up in {:?}", "✓".green(), start.elapsed());

    let result = service.recommend(mood.as_deref(), Some(top_k)).await;

    let response = match result {
        Ok(response) => response,
        Err(RecommendError::InvalidInput(reason)) => {
            eprintln!("{} {}", "Bad request:".red().bold(), reason);
            std::process::exit(EXIT_BAD_REQUEST);
        }
        Err(RecommendError::ModelUnavailable) => {
            eprintln!(
                "{} the engine failed to load its assets; check catalog and model paths",
                "Service unavailable:".red().bold()
            );
            std::process::exit(EXIT_UNAVAILABLE);
        }
        Err(e @ RecommendError::Internal) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            std::process::exit(1);
        }
    };

    print_profile_line(&response.detected_emotion_profile);

    if response.recommendations.is_empty() {
        println!("{}", "No recommendations survived enrichment.".yellow());
        return Ok(());
    }

    println!("\n{}", "Recommendations:".bold());
    for (i, rec) in response.recommendations.iter().enumerate() {
        println!(
            "{:2}. {} {}",
            i + 1,
            rec.title.bold(),
            format!("(similarity {:.3})", rec.similarity_score).dimmed()
        );
        if let Some(date) = &rec.release_date {
            println!("    Released: {}", date);
        }
        if !rec.overview.is_empty() {
            println!("    {}", rec.overview);
        }
    }

    Ok(())
}

fn handle_profile(config: EngineConfig, mood: Option<String>) -> Result<()> {
    let Some(mood) = mood else {
        eprintln!("{} a 'mood' parameter is required", "Bad request:".red().bold());
        std::process::exit(EXIT_BAD_REQUEST);
    };

    // Profile-only path: classifier and mapping, no catalog, no lookups
    let model = match EmotionClassifier::load(&config.model_dir) {
        Ok(model) => model,
        Err(e) => {
            eprintln!("{} {}", "Service unavailable:".red().bold(), e);
            std::process::exit(EXIT_UNAVAILABLE);
        }
    };
    let mapping = CategoryMapping::new();

    let raw = model.predict(&mood).context("Classification failed")?;
    let profile = aggregate(&raw, &mapping);

    print_profile_line(&profile.to_labeled());
    if profile.is_zero() {
        println!("{}", "No emotional signal detected in this text.".yellow());
    }

    Ok(())
}

fn handle_catalog(config: EngineConfig) -> Result<()> {
    let store = CatalogStore::load_from_file(&config.catalog_path)
        .context("Failed to load catalog snapshot")?;

    println!(
        "{} Catalog snapshot {:?}: {} rows",
        "✓".green(),
        config.catalog_path,
        store.len()
    );
    for row in store.rows().iter().take(5) {
        println!("  {:>8}  {}", row.id, row.title);
    }
    if store.len() > 5 {
        println!("  ... and {} more", store.len() - 5);
    }

    Ok(())
}

fn print_profile_line(profile: &pipeline::LabeledProfile) {
    println!("\n{}", "Detected emotion profile:".bold());
    println!(
        "  joy {:.2}  love {:.2}  sadness {:.2}  fear {:.2}  anger {:.2}  surprise {:.2}  disgust {:.2}",
        profile.joy,
        profile.love,
        profile.sadness,
        profile.fear,
        profile.anger,
        profile.surprise,
        profile.disgust
    );
}
