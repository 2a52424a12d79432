//! Crucible - Application Entry Point
//!
//! This is the main entry point for the Crucible server.

use std::net::SocketAddr;

use axum::{Router, extract::DefaultBodyLimit, http::HeaderValue, middleware};
use tokio::net::TcpListener;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crucible::{
    config::CONFIG,
    constants::API_BASE_PATH,
    db, handlers,
    middleware::logging_middleware,
    realtime,
    services::AuthService,
    state::AppState,
    utils::storage,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| CONFIG.server.rust_log.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Crucible server...");

    // Initialize database connection pool
    tracing::info!("Connecting to database...");
    let db_pool = db::create_pool(&CONFIG.database).await?;

    // Run database migrations
    tracing::info!("Running database migrations...");
    db::run_migrations(&db_pool).await?;

    // Create the admin account if none exists yet
    AuthService::seed_admin(&db_pool, &CONFIG).await?;

    // Make sure the upload directory exists before the first request
    tokio::fs::create_dir_all(&CONFIG.storage.upload_path).await?;

    // Create application state
    let state = AppState::new(db_pool, CONFIG.clone());

    // CORS: explicit allowlist when configured, otherwise open
    let cors = if CONFIG.server.cors_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<HeaderValue> = CONFIG
            .server
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    };

    // Build the router
    let app = Router::new()
        .nest(API_BASE_PATH, handlers::routes(state.clone()))
        .merge(realtime::routes())
        .layer(DefaultBodyLimit::max(storage::body_limit(&CONFIG.storage)))
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .with_state(state);

    // Start the server
    let addr = SocketAddr::new(CONFIG.server.host.parse()?, CONFIG.server.port);
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
