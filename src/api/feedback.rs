// src/api/feedback.rs
// Feedback page endpoints plus the JSON API mirror

use axum::{
    Form, Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use crate::api::error::{ApiError, ApiResult, IntoApiErrorOption, db_error};
use crate::feedback::FeedbackEntry;
use crate::state::AppState;

#[derive(Serialize)]
pub struct FeedbackPage {
    pub feedbacks: Vec<FeedbackEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<String>,
}

#[derive(Deserialize)]
pub struct FeedbackForm {
    pub user_name: String,
    pub user_email: String,
    pub message: String,
}

/// Feedback page model: every entry, insertion order.
pub async fn feedback_page_handler(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<FeedbackPage>> {
    let feedbacks = state
        .feedback
        .list_all()
        .await
        .map_err(|e| db_error("feedback listing", e))?;

    Ok(Json(FeedbackPage {
        feedbacks,
        success: None,
    }))
}

/// Form submission. All three fields are required; blank input is rejected
/// before anything is persisted.
pub async fn submit_feedback_handler(
    State(state): State<Arc<AppState>>,
    Form(form): Form<FeedbackForm>,
) -> ApiResult<Json<FeedbackPage>> {
    if form.user_name.trim().is_empty()
        || form.user_email.trim().is_empty()
        || form.message.trim().is_empty()
    {
        return Err(ApiError::bad_request("All fields are required!"));
    }

    let id = state
        .feedback
        .create(&form.user_name, &form.user_email, &form.message)
        .await
        .map_err(|e| db_error("feedback insert", e))?;
    info!("Feedback {} submitted by {}", id, form.user_name);

    let feedbacks = state
        .feedback
        .list_all()
        .await
        .map_err(|e| db_error("feedback listing", e))?;

    Ok(Json(FeedbackPage {
        feedbacks,
        success: Some("Thank you for your feedback!".to_string()),
    }))
}

// ── JSON API mirror ─────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct NewFeedback {
    pub user_name: String,
    pub user_email: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct CreatedFeedback {
    pub id: i64,
}

pub async fn api_create_feedback(
    State(state): State<Arc<AppState>>,
    Json(feedback): Json<NewFeedback>,
) -> ApiResult<Json<CreatedFeedback>> {
    let id = state
        .feedback
        .create(&feedback.user_name, &feedback.user_email, &feedback.message)
        .await
        .map_err(|e| db_error("feedback insert", e))?;

    Ok(Json(CreatedFeedback { id }))
}

pub async fn api_get_feedback(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> ApiResult<Json<FeedbackEntry>> {
    let entry = state
        .feedback
        .get(id)
        .await
        .map_err(|e| db_error("feedback lookup", e))?
        .ok_or_not_found("Feedback not found")?;

    Ok(Json(entry))
}

pub async fn api_list_feedback(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<FeedbackEntry>>> {
    let feedbacks = state
        .feedback
        .list_all()
        .await
        .map_err(|e| db_error("feedback listing", e))?;

    Ok(Json(feedbacks))
}
