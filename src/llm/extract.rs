// src/llm/extract.rs
// Structured-text extraction from free-form model output

use once_cell::sync::Lazy;
use regex::Regex;

// Matches "1. Title" and "1) Title" lines; capture group 1 is the title text.
static NUMBERED_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^\s*\d+[.)]\s*(.+)$").expect("numbered-line pattern is valid"));

/// Pull clean titles out of a numbered-list response.
///
/// When no line matches the numbered pattern the raw text is returned as a
/// single element, so callers always receive at least one entry. The gateway
/// surfaces failures as `AiError`, so the input here is always genuine model
/// output, never error text.
pub fn extract_titles(raw: &str) -> Vec<String> {
    let titles: Vec<String> = NUMBERED_LINE
        .captures_iter(raw)
        .map(|caps| caps[1].trim().to_string())
        .filter(|title| !title.is_empty())
        .collect();

    if titles.is_empty() {
        vec![raw.to_string()]
    } else {
        titles
    }
}
