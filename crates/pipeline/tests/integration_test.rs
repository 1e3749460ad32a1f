//! Integration tests for the pipeline.
//!
//! These run the classify -> aggregate -> rank flow end-to-end with a
//! deterministic stand-in for the model, verifying the stages compose in a
//! realistic scenario.

use catalog::{CatalogRow, CatalogStore, EMOTION_DIMS};
use classifier::{EmotionInference, NUM_LABELS, RawEmotionVector, label_index};
use pipeline::{CategoryMapping, EmotionCategory, aggregate, rank};

/// Deterministic classifier: returns a canned vector regardless of input
struct FixedClassifier {
    output: RawEmotionVector,
}

impl EmotionInference for FixedClassifier {
    fn predict(&self, _text: &str) -> classifier::Result<RawEmotionVector> {
        Ok(self.output)
    }
}

fn create_test_catalog() -> CatalogStore {
    let mut store = CatalogStore::new();
    // Vector order: joy, love, sadness, fear, anger, surprise, disgust
    store.insert_row(CatalogRow {
        id: 1,
        title: "Feel-Good Comedy".to_string(),
        emotion_vector: [0.8, 0.1, 0.0, 0.0, 0.0, 0.1, 0.0],
    });
    store.insert_row(CatalogRow {
        id: 2,
        title: "Tearjerker Drama".to_string(),
        emotion_vector: [0.0, 0.1, 0.8, 0.1, 0.0, 0.0, 0.0],
    });
    store.insert_row(CatalogRow {
        id: 3,
        title: "Slasher Night".to_string(),
        emotion_vector: [0.0, 0.0, 0.1, 0.7, 0.1, 0.1, 0.0],
    });
    store.insert_row(CatalogRow {
        id: 4,
        title: "Romantic Getaway".to_string(),
        emotion_vector: [0.2, 0.7, 0.0, 0.0, 0.0, 0.1, 0.0],
    });
    store
}

fn raw_with(pairs: &[(&str, f32)]) -> RawEmotionVector {
    let mut raw = [0.0f32; NUM_LABELS];
    for &(name, p) in pairs {
        raw[label_index(name).expect("known label")] = p;
    }
    raw
}

#[test]
fn test_joyful_text_ranks_the_comedy_first() {
    let mapping = CategoryMapping::new();
    let model = FixedClassifier {
        output: raw_with(&[("joy", 0.9), ("excitement", 0.7), ("amusement", 0.6)]),
    };

    let raw = model.predict("best day ever, want to laugh").unwrap();
    let profile = aggregate(&raw, &mapping);
    assert!(profile.get(EmotionCategory::Joy) > 0.9);

    let ranked = rank(&profile, &create_test_catalog(), 10);
    assert_eq!(ranked.len(), 4);
    assert_eq!(ranked[0].movie_id, 1, "comedy should rank first");
}

#[test]
fn test_sad_text_ranks_the_drama_first() {
    let mapping = CategoryMapping::new();
    let model = FixedClassifier {
        output: raw_with(&[("sadness", 0.8), ("grief", 0.5), ("disappointment", 0.4)]),
    };

    let raw = model.predict("missing someone tonight").unwrap();
    let profile = aggregate(&raw, &mapping);
    let ranked = rank(&profile, &create_test_catalog(), 2);

    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0].movie_id, 2, "drama should rank first");
}

#[test]
fn test_neutral_text_yields_zero_profile_but_still_ranks() {
    let mapping = CategoryMapping::new();
    let model = FixedClassifier {
        output: raw_with(&[("neutral", 0.95)]),
    };

    let raw = model.predict("the meeting is at three").unwrap();
    let profile = aggregate(&raw, &mapping);
    assert!(profile.is_zero());

    // Ranking a zero profile is valid: all scores 0, catalog order kept
    let ranked = rank(&profile, &create_test_catalog(), 10);
    assert_eq!(ranked.len(), 4);
    let ids: Vec<_> = ranked.iter().map(|c| c.movie_id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
    assert!(ranked.iter().all(|c| c.score == 0.0));
}

#[test]
fn test_profile_sums_to_one_for_any_signal() {
    let mapping = CategoryMapping::new();
    let cases = [
        raw_with(&[("fear", 0.2)]),
        raw_with(&[("anger", 0.9), ("joy", 0.9), ("love", 0.9)]),
        raw_with(&[("curiosity", 0.01)]),
    ];

    for raw in cases {
        let profile = aggregate(&raw, &mapping);
        let total: f32 = profile.components().iter().sum();
        assert!(
            (total - 1.0).abs() < 1e-5,
            "non-zero signal must normalize, got {}",
            total
        );
    }
}

#[test]
fn test_top_k_bound_against_small_catalog() {
    let mapping = CategoryMapping::new();
    let raw = raw_with(&[("joy", 0.5)]);
    let profile = aggregate(&raw, &mapping);

    let mut small = CatalogStore::new();
    for id in 1..=3 {
        small.insert_row(CatalogRow {
            id,
            title: format!("Movie {}", id),
            emotion_vector: [0.1; EMOTION_DIMS],
        });
    }

    let ranked = rank(&profile, &small, 10);
    assert_eq!(ranked.len(), 3, "K=10 against N=3 returns exactly 3");
}
