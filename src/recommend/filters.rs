// src/recommend/filters.rs
// Closed vocabularies for recommendation filters

use once_cell::sync::Lazy;
use std::collections::BTreeSet;

/// Genre tags accepted by the recommendation prompt.
pub static ALLOWED_GENRES: Lazy<BTreeSet<&'static str>> = Lazy::new(|| {
    BTreeSet::from([
        "action",
        "sci-fi",
        "drama",
        "comedy",
        "horror",
        "romantic",
        "thriller",
        "adventure",
    ])
});

/// Mood tags accepted by the recommendation prompt.
pub static ALLOWED_MOODS: Lazy<BTreeSet<&'static str>> = Lazy::new(|| {
    BTreeSet::from([
        "uplifting",
        "dark",
        "romantic",
        "suspenseful",
        "nostalgic",
        "emotional",
        "funny",
        "thought-provoking",
    ])
});

/// Lowercase the inputs and keep only vocabulary members, preserving input
/// order. Unknown values are dropped silently.
fn retain_known(inputs: &[String], allowed: &BTreeSet<&'static str>) -> Vec<String> {
    inputs
        .iter()
        .map(|value| value.trim().to_lowercase())
        .filter(|value| allowed.contains(value.as_str()))
        .collect()
}

pub fn filter_genres(inputs: &[String]) -> Vec<String> {
    retain_known(inputs, &ALLOWED_GENRES)
}

pub fn filter_moods(inputs: &[String]) -> Vec<String> {
    retain_known(inputs, &ALLOWED_MOODS)
}

/// Vocabulary listing for page models (sorted).
pub fn genre_vocabulary() -> Vec<&'static str> {
    ALLOWED_GENRES.iter().copied().collect()
}

/// Vocabulary listing for page models (sorted).
pub fn mood_vocabulary() -> Vec<&'static str> {
    ALLOWED_MOODS.iter().copied().collect()
}
