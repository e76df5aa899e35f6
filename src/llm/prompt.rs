// src/llm/prompt.rs
// Prompt templates for recommendation, free-form query and comparison calls

/// Build the recommendation prompt for a base title plus optional filters.
///
/// Filter slices are expected to already be vocabulary-checked (see
/// `recommend::filters`); empty slices are simply omitted from the prompt.
pub fn recommendation_prompt(title: &str, genres: &[String], moods: &[String]) -> String {
    let mut prompt = format!("Suggest exactly 3 movies similar to '{}'", title);

    if !genres.is_empty() {
        prompt.push_str(" in genres: ");
        prompt.push_str(&genres.join(", "));
    }
    if !moods.is_empty() {
        prompt.push_str(" with moods: ");
        prompt.push_str(&moods.join(", "));
    }

    prompt.push_str(
        ". Respond ONLY with a numbered list of movie titles (1. Title) without any \
         explanations, descriptions, formatting, or additional text.",
    );
    prompt
}

/// Free-form query pass-through.
pub fn expert_query_prompt(query: &str) -> String {
    format!("Act as a movie expert. Answer concisely: {}", query)
}

/// Two-title comparison prompt.
pub fn comparison_prompt(first: &str, second: &str) -> String {
    format!(
        "Compare these two movies in a detailed pros/cons format: {} and {}. \
         Focus on plot, themes, and filmmaking style.",
        first, second
    )
}
