//! Emotion aggregation: 28 fine-grained labels down to 7 coarse categories.
//!
//! The classifier speaks GoEmotions (28 labels); the catalog speaks 7 coarse
//! categories. This module owns the fixed many-to-few mapping between the
//! two and turns a raw classification into the normalized per-request
//! `UserEmotionProfile` the ranker consumes.
//!
//! ## Algorithm
//! 1. For each category, take the arithmetic mean of the raw probabilities
//!    at its member label indices
//! 2. If the 7 means sum to a strictly positive value, divide through so the
//!    profile sums to 1.0
//! 3. If the sum is exactly zero, keep the all-zero vector — that is the
//!    defined "no detectable emotional signal" state, and downstream ranking
//!    treats it as valid input (every cosine score becomes 0)

use catalog::EMOTION_DIMS;
use classifier::{RawEmotionVector, label_index};
use serde::Serialize;
use tracing::debug;

/// The 7 coarse emotion categories used for catalog matching.
///
/// Discriminant order matches the catalog vector layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmotionCategory {
    Joy,
    Love,
    Sadness,
    Fear,
    Anger,
    Surprise,
    Disgust,
}

impl EmotionCategory {
    /// All categories in catalog vector order
    pub const ALL: [EmotionCategory; EMOTION_DIMS] = [
        EmotionCategory::Joy,
        EmotionCategory::Love,
        EmotionCategory::Sadness,
        EmotionCategory::Fear,
        EmotionCategory::Anger,
        EmotionCategory::Surprise,
        EmotionCategory::Disgust,
    ];

    /// Lowercase name used in responses
    pub fn as_str(&self) -> &'static str {
        match self {
            EmotionCategory::Joy => "joy",
            EmotionCategory::Love => "love",
            EmotionCategory::Sadness => "sadness",
            EmotionCategory::Fear => "fear",
            EmotionCategory::Anger => "anger",
            EmotionCategory::Surprise => "surprise",
            EmotionCategory::Disgust => "disgust",
        }
    }

    /// Fine-grained labels composing this category.
    ///
    /// `neutral` is intentionally unmapped: it carries no directional
    /// signal, so a purely neutral text aggregates to the zero profile.
    pub fn member_labels(&self) -> &'static [&'static str] {
        match self {
            EmotionCategory::Joy => &[
                "amusement",
                "excitement",
                "gratitude",
                "joy",
                "optimism",
                "pride",
                "relief",
            ],
            EmotionCategory::Love => &["admiration", "desire", "love", "caring", "approval"],
            EmotionCategory::Sadness => &["disappointment", "grief", "remorse", "sadness"],
            EmotionCategory::Fear => &["nervousness", "fear"],
            EmotionCategory::Anger => &["anger", "annoyance", "disapproval"],
            EmotionCategory::Surprise => &["surprise", "realization", "curiosity"],
            EmotionCategory::Disgust => &["disgust", "embarrassment", "confusion"],
        }
    }
}

/// Fixed table mapping each coarse category to its fine-label indices.
///
/// Built once at startup and shared via `Arc`; never reconstructed per
/// request. Index resolution goes through the classifier's vocabulary so
/// the two crates cannot drift apart silently (the partition tests below
/// pin the membership).
#[derive(Debug)]
pub struct CategoryMapping {
    members: [Vec<usize>; EMOTION_DIMS],
}

impl CategoryMapping {
    /// Resolve the category membership tables against the label vocabulary
    pub fn new() -> Self {
        let members = EmotionCategory::ALL.map(|category| {
            category
                .member_labels()
                .iter()
                .filter_map(|name| label_index(name))
                .collect::<Vec<usize>>()
        });
        Self { members }
    }

    /// Member label indices for a category
    pub fn members(&self, category: EmotionCategory) -> &[usize] {
        let slot = EmotionCategory::ALL
            .iter()
            .position(|c| *c == category)
            .unwrap_or(0);
        &self.members[slot]
    }
}

impl Default for CategoryMapping {
    fn default() -> Self {
        Self::new()
    }
}

/// Normalized per-request emotion profile.
///
/// Invariant: sums to 1.0 when any component is non-zero, else all-zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UserEmotionProfile(pub [f32; EMOTION_DIMS]);

impl UserEmotionProfile {
    /// Raw components in catalog vector order
    pub fn components(&self) -> &[f32; EMOTION_DIMS] {
        &self.0
    }

    /// Component for one category
    pub fn get(&self, category: EmotionCategory) -> f32 {
        let slot = EmotionCategory::ALL
            .iter()
            .position(|c| *c == category)
            .unwrap_or(0);
        self.0[slot]
    }

    /// True when no emotional signal was detected
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&v| v == 0.0)
    }

    /// Render the labeled map used in responses
    pub fn to_labeled(&self) -> LabeledProfile {
        LabeledProfile {
            joy: self.0[0],
            love: self.0[1],
            sadness: self.0[2],
            fear: self.0[3],
            anger: self.0[4],
            surprise: self.0[5],
            disgust: self.0[6],
        }
    }
}

/// The profile as a labeled mapping, in response field order
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LabeledProfile {
    pub joy: f32,
    pub love: f32,
    pub sadness: f32,
    pub fear: f32,
    pub anger: f32,
    pub surprise: f32,
    pub disgust: f32,
}

/// Collapse a raw 28-label classification into the 7-category profile.
pub fn aggregate(raw: &RawEmotionVector, mapping: &CategoryMapping) -> UserEmotionProfile {
    let mut values = [0.0f32; EMOTION_DIMS];

    for (slot, category) in EmotionCategory::ALL.iter().enumerate() {
        let members = mapping.members(*category);
        if members.is_empty() {
            continue;
        }
        let sum: f32 = members.iter().map(|&i| raw[i]).sum();
        values[slot] = sum / members.len() as f32;
    }

    let total: f32 = values.iter().sum();
    if total > 0.0 {
        for value in &mut values {
            *value /= total;
        }
    } else {
        // No signal at all: keep the zero vector rather than substituting a
        // uniform fallback. The ranker handles it (all scores become 0).
        debug!("Aggregated profile has no emotional signal");
    }

    UserEmotionProfile(values)
}
