// src/api/movies.rs
// Search, recommendation, ask and comparison endpoints

use axum::{
    Json,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use crate::api::error::{ApiError, ApiResult};
use crate::metadata::MovieRecord;
use crate::state::AppState;

/// Split a comma-separated filter parameter into raw tags. Vocabulary
/// checking happens in the recommendation service.
fn split_tags(raw: Option<&str>) -> Vec<String> {
    raw.map(|value| {
        value
            .split(',')
            .map(|tag| tag.trim().to_string())
            .filter(|tag| !tag.is_empty())
            .collect()
    })
    .unwrap_or_default()
}

fn require_non_empty<'a>(value: &'a str, field: &str) -> Result<&'a str, ApiError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ApiError::bad_request(format!("{field} must not be empty")));
    }
    Ok(trimmed)
}

// ── Search ──────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct SearchParams {
    pub title: String,
}

#[derive(Serialize)]
pub struct MoviePage {
    pub movie: MovieRecord,
}

pub async fn search_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> ApiResult<Json<MoviePage>> {
    let title = require_non_empty(&params.title, "title")?;
    info!("Searching metadata for '{}'", title);

    let movie = state.metadata.movie_by_title(title).await?;
    Ok(Json(MoviePage { movie }))
}

// ── Recommendations ─────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct RecommendParams {
    pub title: String,
    pub genres: Option<String>,
    pub moods: Option<String>,
}

#[derive(Serialize)]
pub struct RecommendationPage {
    pub movie: MovieRecord,
    pub recommendations: Vec<String>,
}

pub async fn recommend_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RecommendParams>,
) -> ApiResult<Json<RecommendationPage>> {
    let title = require_non_empty(&params.title, "title")?;
    let genres = split_tags(params.genres.as_deref());
    let moods = split_tags(params.moods.as_deref());
    info!("Recommending titles similar to '{}'", title);

    let movie = state.metadata.movie_by_title(title).await?;
    let recommendations = state.recommender.recommend(title, &genres, &moods).await?;

    Ok(Json(RecommendationPage {
        movie,
        recommendations,
    }))
}

// ── Ask (free-form query) ───────────────────────────────────────────────

#[derive(Serialize)]
pub struct AskPage {
    pub hint: &'static str,
}

/// Page model for the ask form.
pub async fn ask_page_handler() -> Json<AskPage> {
    Json(AskPage {
        hint: "POST {\"query\": \"...\", \"title\": \"optional movie title\"}",
    })
}

#[derive(Deserialize)]
pub struct AskRequest {
    pub query: String,
    pub title: Option<String>,
}

#[derive(Serialize)]
pub struct AnswerPage {
    pub answer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub movie: Option<MovieRecord>,
}

pub async fn ask_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AskRequest>,
) -> ApiResult<Json<AnswerPage>> {
    let query = require_non_empty(&request.query, "query")?;
    info!("Answering free-form query ({} chars)", query.len());

    let answer = state.recommender.ask(query).await?;

    let movie = match request.title.as_deref().map(str::trim) {
        Some(title) if !title.is_empty() => Some(state.metadata.movie_by_title(title).await?),
        _ => None,
    };

    Ok(Json(AnswerPage { answer, movie }))
}

// ── Comparison ──────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CompareParams {
    pub movie1: String,
    pub movie2: String,
}

#[derive(Serialize)]
pub struct ComparisonPage {
    pub movie: MovieRecord,
    pub comparison_movie: MovieRecord,
    pub comparison_text: String,
}

pub async fn compare_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CompareParams>,
) -> ApiResult<Json<ComparisonPage>> {
    let first_title = require_non_empty(&params.movie1, "movie1")?;
    let second_title = require_non_empty(&params.movie2, "movie2")?;
    info!("Comparing '{}' and '{}'", first_title, second_title);

    // The two lookups are independent; run them concurrently.
    let (movie, comparison_movie) = tokio::try_join!(
        state.metadata.movie_by_title(first_title),
        state.metadata.movie_by_title(second_title),
    )?;

    let comparison_text = state
        .recommender
        .compare(&movie.title, &comparison_movie.title)
        .await?;

    Ok(Json(ComparisonPage {
        movie,
        comparison_movie,
        comparison_text,
    }))
}
