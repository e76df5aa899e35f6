// tests/gemini_gateway.rs
// Gateway error taxonomy exercised against a local stub endpoint.

use std::sync::Arc;

use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::json;

use cinescope::llm::{AiError, GeminiClient};
use cinescope::recommend::RecommendationService;

const GENERATE_PATH: &str = "/models/gemini-2.0-flash:generateContent";

async fn spawn_stub(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn client_for(base_url: String) -> GeminiClient {
    GeminiClient::new(
        "test-key".to_string(),
        base_url,
        "gemini-2.0-flash".to_string(),
    )
    .unwrap()
}

#[tokio::test]
async fn well_formed_response_yields_generated_text() {
    let app = Router::new().route(
        GENERATE_PATH,
        post(|| async {
            Json(json!({
                "candidates": [{
                    "content": {"parts": [{"text": "1. Inception\n2. Looper"}]}
                }]
            }))
        }),
    );
    let base_url = spawn_stub(app).await;

    let text = client_for(base_url).generate("prompt").await.unwrap();
    assert_eq!(text, "1. Inception\n2. Looper");
}

#[tokio::test]
async fn status_429_surfaces_as_typed_upstream_error() {
    let app = Router::new().route(
        GENERATE_PATH,
        post(|| async { (StatusCode::TOO_MANY_REQUESTS, "quota exceeded") }),
    );
    let base_url = spawn_stub(app).await;

    let err = client_for(base_url).generate("prompt").await.unwrap_err();
    assert!(matches!(err, AiError::UpstreamError { status: 429 }));
}

#[tokio::test]
async fn upstream_error_never_becomes_a_recommendation() {
    let app = Router::new().route(
        GENERATE_PATH,
        post(|| async { (StatusCode::TOO_MANY_REQUESTS, "quota exceeded") }),
    );
    let base_url = spawn_stub(app).await;

    let service = RecommendationService::new(Arc::new(client_for(base_url)));
    let result = service.recommend("The Matrix", &[], &[]).await;

    // The failure is typed; there is no list for error text to leak into.
    assert!(matches!(
        result,
        Err(AiError::UpstreamError { status: 429 })
    ));
}

#[tokio::test]
async fn json_body_without_text_path_degrades_to_placeholder() {
    let app = Router::new().route(
        GENERATE_PATH,
        post(|| async { Json(json!({"candidates": []})) }),
    );
    let base_url = spawn_stub(app).await;

    let text = client_for(base_url).generate("prompt").await.unwrap();
    assert_eq!(text, "No response found");
}

#[tokio::test]
async fn non_json_body_is_malformed_response() {
    let app = Router::new().route(GENERATE_PATH, post(|| async { "<html>oops</html>" }));
    let base_url = spawn_stub(app).await;

    let err = client_for(base_url).generate("prompt").await.unwrap_err();
    assert!(matches!(err, AiError::MalformedResponse));
}

#[tokio::test]
async fn unreachable_endpoint_is_request_failed() {
    // Nothing listens here; the connection is refused immediately.
    let client = client_for("http://127.0.0.1:9".to_string());

    let err = client.generate("prompt").await.unwrap_err();
    assert!(matches!(err, AiError::RequestFailed(_)));
}
