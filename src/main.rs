// src/main.rs

use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use cinescope::api::router::http_router;
use cinescope::config::CONFIG;
use cinescope::db;
use cinescope::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let level = Level::from_str(&CONFIG.log_level).unwrap_or(Level::INFO);
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting Cinescope");
    info!("Model: {}", CONFIG.gemini_model);

    // Create database pool and bring the schema up to date
    let pool = db::create_pool(&CONFIG.database_url, CONFIG.sqlite_max_connections).await?;
    db::run_migrations(&pool, Path::new(&CONFIG.migrations_dir)).await?;

    // Assemble gateways, services and the feedback store
    let app_state = Arc::new(AppState::initialize(pool)?);

    let app = http_router(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    // Start server
    let bind_address = CONFIG.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!("Listening on http://{}", bind_address);

    axum::serve(listener, app).await?;
    Ok(())
}
