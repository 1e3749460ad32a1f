//! # Classifier Crate
//!
//! Wraps the frozen multi-label emotion classifier used by the mood
//! pipeline. It handles:
//! - Loading tokenizer, config and weights from the model directory
//! - Tokenization with truncation and padding bounded to 512 tokens
//! - Read-only inference producing 28 independent label probabilities
//! - The label vocabulary the aggregator resolves its categories against
//!
//! ## Example Usage
//!
//! ```ignore
//! use classifier::{EmotionClassifier, EmotionInference};
//! use std::path::Path;
//!
//! let model = EmotionClassifier::load(Path::new("models/go-emotions"))?;
//! let raw = model.predict("cozy rainy sunday, feeling nostalgic")?;
//! assert_eq!(raw.len(), 28);
//! ```

pub mod error;
pub mod labels;
pub mod model;

// Re-export commonly used types
pub use error::{ClassifierError, Result};
pub use labels::{LABELS, NUM_LABELS, RawEmotionVector, label_index};
pub use model::{EmotionClassifier, EmotionInference, MAX_SEQ_LEN};
