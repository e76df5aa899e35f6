// tests/metadata_gateway.rs
// Metadata lookup behavior against a local stub endpoint.

use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use cinescope::metadata::{MetadataError, OmdbClient};

async fn spawn_stub(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}/", addr)
}

fn client_for(base_url: String) -> OmdbClient {
    OmdbClient::new("test-key".to_string(), base_url).unwrap()
}

#[tokio::test]
async fn full_payload_becomes_a_record() {
    let app = Router::new().route(
        "/",
        get(|| async {
            Json(json!({
                "Title": "The Matrix",
                "Year": "1999",
                "Genre": "Action, Sci-Fi",
                "Director": "Lana Wachowski, Lilly Wachowski",
                "Plot": "A computer hacker learns the truth.",
                "imdbRating": "8.7",
                "imdbID": "tt0133093"
            }))
        }),
    );
    let base_url = spawn_stub(app).await;

    let movie = client_for(base_url)
        .movie_by_title("The Matrix")
        .await
        .unwrap();
    assert_eq!(movie.imdb_id, "tt0133093");
    assert_eq!(movie.title, "The Matrix");
    assert_eq!(movie.year, "1999");
}

#[tokio::test]
async fn missing_identity_maps_to_not_found() {
    let app = Router::new().route(
        "/",
        get(|| async { Json(json!({"Response": "False", "Error": "Movie not found!"})) }),
    );
    let base_url = spawn_stub(app).await;

    let err = client_for(base_url)
        .movie_by_title("No Such Film")
        .await
        .unwrap_err();
    match err {
        MetadataError::NotFound { title } => assert_eq!(title, "No Such Film"),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn upstream_500_is_a_typed_status_error() {
    let app = Router::new().route(
        "/",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let base_url = spawn_stub(app).await;

    let err = client_for(base_url)
        .movie_by_title("Anything")
        .await
        .unwrap_err();
    assert!(matches!(err, MetadataError::UpstreamError { status: 500 }));
}

#[tokio::test]
async fn non_json_body_is_malformed_response() {
    let app = Router::new().route("/", get(|| async { "<html>not json</html>" }));
    let base_url = spawn_stub(app).await;

    let err = client_for(base_url)
        .movie_by_title("Anything")
        .await
        .unwrap_err();
    assert!(matches!(err, MetadataError::MalformedResponse));
}

#[tokio::test]
async fn titles_with_spaces_are_url_encoded() {
    // The stub echoes the decoded query parameter back as the title, which
    // only works if the client encoded it correctly on the way out.
    let app = Router::new().route(
        "/",
        get(
            |axum::extract::Query(params): axum::extract::Query<
                std::collections::HashMap<String, String>,
            >| async move {
                Json(json!({
                    "Title": params.get("t").cloned().unwrap_or_default(),
                    "imdbID": "tt0000001"
                }))
            },
        ),
    );
    let base_url = spawn_stub(app).await;

    let movie = client_for(base_url)
        .movie_by_title("2001: A Space Odyssey")
        .await
        .unwrap();
    assert_eq!(movie.title, "2001: A Space Odyssey");
}
