// src/api/router.rs
// HTTP router composition

use axum::{
    Router,
    routing::get,
};
use std::sync::Arc;

use super::{
    feedback::{
        api_create_feedback, api_get_feedback, api_list_feedback, feedback_page_handler,
        submit_feedback_handler,
    },
    handlers::{health_handler, home_handler},
    movies::{ask_handler, ask_page_handler, compare_handler, recommend_handler, search_handler},
};
use crate::state::AppState;

/// Full route surface: page-model endpoints plus the JSON feedback mirror.
pub fn http_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        // Home + health
        .route("/", get(home_handler))
        .route("/health", get(health_handler))

        // Movie pages
        .route("/search", get(search_handler))
        .route("/recommend", get(recommend_handler))
        .route("/ask", get(ask_page_handler).post(ask_handler))
        .route("/compare", get(compare_handler))

        // Feedback page
        .route(
            "/feedback",
            get(feedback_page_handler).post(submit_feedback_handler),
        )

        // Feedback JSON API mirror
        .route(
            "/api/feedback",
            get(api_list_feedback).post(api_create_feedback),
        )
        .route("/api/feedback/{id}", get(api_get_feedback))

        .with_state(app_state)
}
