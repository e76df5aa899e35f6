//! Recommendation orchestration: filter validation, prompt construction,
//! dispatch and extraction.

pub mod filters;

use std::sync::Arc;

use tracing::debug;

use crate::llm::{AiResult, GeminiClient, extract, prompt};

/// Coordinates the prompt → gateway → extractor pipeline for the three AI
/// operations.
pub struct RecommendationService {
    gemini: Arc<GeminiClient>,
}

impl RecommendationService {
    pub fn new(gemini: Arc<GeminiClient>) -> Self {
        Self { gemini }
    }

    /// Recommend titles similar to `title`, constrained by vocabulary-checked
    /// genre and mood tags. Returns the clean title list; when the model
    /// ignores the format directive the raw answer comes back as a single
    /// entry.
    pub async fn recommend(
        &self,
        title: &str,
        genres: &[String],
        moods: &[String],
    ) -> AiResult<Vec<String>> {
        let genres = filters::filter_genres(genres);
        let moods = filters::filter_moods(moods);
        debug!(
            "Recommending for '{}' with {} genre / {} mood filters",
            title,
            genres.len(),
            moods.len()
        );

        let prompt = prompt::recommendation_prompt(title, &genres, &moods);
        let raw = self.gemini.generate(&prompt).await?;
        Ok(extract::extract_titles(&raw))
    }

    /// Free-form movie question, answered as-is.
    pub async fn ask(&self, query: &str) -> AiResult<String> {
        self.gemini
            .generate(&prompt::expert_query_prompt(query))
            .await
    }

    /// Pros/cons comparison of two titles. Raw text, no extraction.
    pub async fn compare(&self, first: &str, second: &str) -> AiResult<String> {
        self.gemini
            .generate(&prompt::comparison_prompt(first, second))
            .await
    }
}
