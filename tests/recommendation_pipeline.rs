// tests/recommendation_pipeline.rs
// End-to-end checks of the prompt → extraction pipeline, no network involved.

use cinescope::llm::{extract, prompt};
use cinescope::recommend::filters;

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[test]
fn matrix_numbered_response_extracts_clean_titles() {
    let _prompt = prompt::recommendation_prompt("The Matrix", &[], &[]);
    let raw = "1. Inception\n2. Looper\n3. Dark City";
    assert_eq!(
        extract::extract_titles(raw),
        vec!["Inception", "Looper", "Dark City"]
    );
}

#[test]
fn only_vocabulary_filters_reach_the_prompt() {
    let genres = filters::filter_genres(&tags(&["Action", "western", "SCI-FI"]));
    let moods = filters::filter_moods(&tags(&["Dark", "bogus-mood"]));

    let prompt = prompt::recommendation_prompt("Blade Runner", &genres, &moods);
    assert!(prompt.contains("in genres: action, sci-fi"));
    assert!(prompt.contains("with moods: dark"));
    assert!(!prompt.contains("western"));
    assert!(!prompt.contains("bogus-mood"));
}

#[test]
fn fully_filtered_input_omits_both_clauses() {
    let genres = filters::filter_genres(&tags(&["western"]));
    let moods = filters::filter_moods(&tags(&["bogus"]));

    let prompt = prompt::recommendation_prompt("Blade Runner", &genres, &moods);
    assert!(!prompt.contains("in genres:"));
    assert!(!prompt.contains("with moods:"));
}

#[test]
fn conversational_response_degrades_to_single_passthrough_entry() {
    let raw = "Sorry, I can only suggest one: try Primer.";
    let titles = extract::extract_titles(raw);
    assert_eq!(titles, vec![raw.to_string()]);
}

#[test]
fn mixed_numbering_styles_are_both_accepted() {
    let raw = "1. Inception\n2) Looper\n3. Dark City";
    assert_eq!(
        extract::extract_titles(raw),
        vec!["Inception", "Looper", "Dark City"]
    );
}
