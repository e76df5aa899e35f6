// src/state.rs

use std::sync::Arc;

use anyhow::Result;
use sqlx::sqlite::SqlitePool;

use crate::{
    feedback::FeedbackStore,
    llm::GeminiClient,
    metadata::OmdbClient,
    recommend::RecommendationService,
};

/// Shared application state. Cheap to clone; collaborators live behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub metadata: Arc<OmdbClient>,
    pub recommender: Arc<RecommendationService>,
    pub feedback: Arc<FeedbackStore>,
}

impl AppState {
    /// Assemble all collaborators from the global config and a ready pool.
    pub fn initialize(pool: SqlitePool) -> Result<Self> {
        let metadata = Arc::new(OmdbClient::from_config()?);
        let gemini = Arc::new(GeminiClient::from_config()?);
        let recommender = Arc::new(RecommendationService::new(gemini));
        let feedback = Arc::new(FeedbackStore::new(pool));

        Ok(Self {
            metadata,
            recommender,
            feedback,
        })
    }

    /// Assemble from explicit collaborators (used by tests).
    pub fn with_parts(
        metadata: Arc<OmdbClient>,
        recommender: Arc<RecommendationService>,
        feedback: Arc<FeedbackStore>,
    ) -> Self {
        Self {
            metadata,
            recommender,
            feedback,
        }
    }
}
