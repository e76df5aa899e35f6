// src/api/handlers.rs
// Home and liveness endpoints

use axum::Json;
use serde::Serialize;
use serde_json::{Value, json};

use crate::recommend::filters;

#[derive(Serialize)]
pub struct HomePage {
    pub service: &'static str,
    pub genres: Vec<&'static str>,
    pub moods: Vec<&'static str>,
}

/// Service descriptor, including the filter vocabularies a frontend needs to
/// build its genre/mood pickers.
pub async fn home_handler() -> Json<HomePage> {
    Json(HomePage {
        service: "cinescope",
        genres: filters::genre_vocabulary(),
        moods: filters::mood_vocabulary(),
    })
}

pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
