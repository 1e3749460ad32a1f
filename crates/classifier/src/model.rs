//! The frozen emotion classification model.
//!
//! Wraps a pre-trained BERT encoder with a 28-way multi-label classification
//! head, loaded from a fixed model directory:
//!
//! - `tokenizer.json`     — HuggingFace tokenizer definition
//! - `config.json`        — BERT architecture config
//! - `model.safetensors`  — frozen weights (encoder + pooler + head)
//!
//! Loading happens exactly once at process start; inference is read-only
//! (candle builds no gradient state), so a loaded classifier can be shared
//! across requests behind an `Arc` with no synchronization.
//!
//! The head is multi-label: each of the 28 logits gets an independent
//! elementwise sigmoid, never a joint softmax — a text can be both joyful
//! and surprised at once.

use std::path::{Path, PathBuf};

use candle_core::{Device, Tensor};
use candle_nn::{Linear, Module, VarBuilder};
use candle_transformers::models::bert::{BertModel, Config, DTYPE};
use tokenizers::{PaddingParams, Tokenizer, TruncationParams};
use tracing::{debug, info};

use crate::error::{ClassifierError, Result};
use crate::labels::{NUM_LABELS, RawEmotionVector};

/// Token bound for truncation and padding
pub const MAX_SEQ_LEN: usize = 512;

/// Seam between the pipeline and the concrete model.
///
/// The orchestrator and tests consume the classifier through this trait so a
/// deterministic stub can stand in for the real weights, the same way the
/// scoring service is mocked in integration tests.
pub trait EmotionInference: Send + Sync {
    /// Classify one text into per-label probabilities.
    ///
    /// Empty input is valid and yields whatever the model predicts for an
    /// empty token sequence.
    fn predict(&self, text: &str) -> Result<RawEmotionVector>;
}

/// Frozen multi-label emotion classifier.
pub struct EmotionClassifier {
    encoder: BertModel,
    pooler: Linear,
    head: Linear,
    tokenizer: Tokenizer,
    device: Device,
}

impl std::fmt::Debug for EmotionClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmotionClassifier")
            .field("device", &self.device)
            .finish_non_exhaustive()
    }
}

impl EmotionClassifier {
    /// Load the frozen classifier from a model directory.
    ///
    /// # Arguments
    /// * `model_dir` - Directory holding `tokenizer.json`, `config.json`
    ///   and `model.safetensors`
    ///
    /// Any failure here leaves the service degraded; there is no retry.
    pub fn load(model_dir: &Path) -> Result<Self> {
        info!("Loading emotion classifier from {:?}", model_dir);

        let tokenizer_path = require_asset(model_dir, "tokenizer.json")?;
        let config_path = require_asset(model_dir, "config.json")?;
        let weights_path = require_asset(model_dir, "model.safetensors")?;

        let mut tokenizer = Tokenizer::from_file(&tokenizer_path)
            .map_err(|e| ClassifierError::Tokenizer(e.to_string()))?;
        tokenizer
            .with_truncation(Some(TruncationParams {
                max_length: MAX_SEQ_LEN,
                ..Default::default()
            }))
            .map_err(|e| ClassifierError::Tokenizer(e.to_string()))?;
        tokenizer.with_padding(Some(PaddingParams::default()));

        let config: Config = serde_json::from_str(&std::fs::read_to_string(&config_path)?)?;

        let device = Device::Cpu;
        // Safety: the snapshot files are read-only model assets; nothing
        // remaps them while the process is alive.
        let vb = unsafe { VarBuilder::from_mmaped_safetensors(&[weights_path], DTYPE, &device)? };

        let encoder = BertModel::load(vb.pp("bert"), &config)?;
        let pooler = candle_nn::linear(
            config.hidden_size,
            config.hidden_size,
            vb.pp("bert.pooler.dense"),
        )?;
        let head = candle_nn::linear(config.hidden_size, NUM_LABELS, vb.pp("classifier"))?;

        info!("Emotion classifier ready ({} labels)", NUM_LABELS);
        Ok(Self {
            encoder,
            pooler,
            head,
            tokenizer,
            device,
        })
    }

    /// Run one inference pass: tokenize, encode, pool, classify, sigmoid.
    fn classify(&self, text: &str) -> Result<RawEmotionVector> {
        let encoding = self
            .tokenizer
            .encode(text, true)
            .map_err(|e| ClassifierError::Tokenizer(e.to_string()))?;

        debug!("Classifying text with {} tokens", encoding.len());

        let input_ids = Tensor::new(encoding.get_ids(), &self.device)?.unsqueeze(0)?;
        let token_type_ids = Tensor::new(encoding.get_type_ids(), &self.device)?.unsqueeze(0)?;
        let attention_mask =
            Tensor::new(encoding.get_attention_mask(), &self.device)?.unsqueeze(0)?;

        // [1, seq, hidden]
        let sequence_output =
            self.encoder
                .forward(&input_ids, &token_type_ids, Some(&attention_mask))?;

        // CLS token -> pooler (dense + tanh) -> classification head
        let cls = sequence_output.narrow(1, 0, 1)?.squeeze(1)?;
        let pooled = self.pooler.forward(&cls)?.tanh()?;
        let logits = self.head.forward(&pooled)?;

        // Independent per-label probabilities, NOT a joint softmax
        let probs = candle_nn::ops::sigmoid(&logits)?
            .squeeze(0)?
            .to_vec1::<f32>()?;

        probs.try_into().map_err(|v: Vec<f32>| {
            ClassifierError::UnexpectedOutput(format!(
                "expected {} logits, model produced {}",
                NUM_LABELS,
                v.len()
            ))
        })
    }
}

impl EmotionInference for EmotionClassifier {
    fn predict(&self, text: &str) -> Result<RawEmotionVector> {
        self.classify(text)
    }
}

/// Resolve a required asset path, failing early when it is missing
fn require_asset(model_dir: &Path, name: &str) -> Result<PathBuf> {
    let path = model_dir.join(name);
    if !path.exists() {
        return Err(ClassifierError::MissingAsset { path });
    }
    Ok(path)
}
