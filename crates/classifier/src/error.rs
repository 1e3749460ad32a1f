//! Error types for the classifier crate.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or running the emotion classifier
#[derive(Error, Debug)]
pub enum ClassifierError {
    /// A required model asset was missing from the model directory
    #[error("Missing model asset: {path}")]
    MissingAsset { path: PathBuf },

    /// I/O error while reading model assets
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Model config file was not valid JSON
    #[error("Invalid model config: {0}")]
    InvalidConfig(#[from] serde_json::Error),

    /// Tokenizer failed to load or encode
    #[error("Tokenizer error: {0}")]
    Tokenizer(String),

    /// Tensor-level failure during load or inference
    #[error("Model error: {0}")]
    Model(#[from] candle_core::Error),

    /// The classification head produced an unexpected output shape
    #[error("Unexpected model output: {0}")]
    UnexpectedOutput(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, ClassifierError>;
