//! The fine-grained emotion label vocabulary.
//!
//! These are the 28 GoEmotions labels in the exact output order of the
//! frozen classification head. Index positions matter: the aggregator
//! resolves its category membership tables against this ordering.

/// Number of fine-grained labels produced per classification call
pub const NUM_LABELS: usize = 28;

/// Per-label probabilities in [0, 1], one per fine-grained label.
///
/// Multi-label output: components are independent sigmoid probabilities,
/// not a distribution, so they do not sum to 1.
pub type RawEmotionVector = [f32; NUM_LABELS];

/// Label vocabulary in classifier output order
pub const LABELS: [&str; NUM_LABELS] = [
    "admiration",
    "amusement",
    "anger",
    "annoyance",
    "approval",
    "caring",
    "confusion",
    "curiosity",
    "desire",
    "disappointment",
    "disapproval",
    "disgust",
    "embarrassment",
    "excitement",
    "fear",
    "gratitude",
    "grief",
    "joy",
    "love",
    "nervousness",
    "optimism",
    "pride",
    "realization",
    "relief",
    "remorse",
    "sadness",
    "surprise",
    "neutral",
];

/// Resolve a label name to its output index
pub fn label_index(name: &str) -> Option<usize> {
    LABELS.iter().position(|&label| label == name)
}
