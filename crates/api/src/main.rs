// Chess Players API server
// Decision: Configuration is read once from the environment (.env supported)
// Decision: Without DATABASE_URL the server runs on the in-memory backend

use anyhow::{Context, Result};
use chessplayers_api::app::build_router;
use chessplayers_api::auth::AuthState;
use chessplayers_api::config::{AppConfig, DEFAULT_LOG_FILTER};
use chessplayers_api::storage::{seed, StorageBackend};
use chessplayers_core::telemetry::{init_telemetry, TelemetryConfig};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize telemetry
    // - RUST_LOG: Log filter (default: "chessplayers_api=debug,tower_http=debug")
    let mut telemetry_config = TelemetryConfig::from_env().with_default_filter(DEFAULT_LOG_FILTER);
    telemetry_config.service_version = Some(env!("CARGO_PKG_VERSION").to_string());
    init_telemetry(telemetry_config);

    tracing::info!("chessplayers-api starting...");

    let config = AppConfig::from_env().context("Invalid configuration")?;
    tracing::info!(
        hash_work_factor = config.auth.hash_work_factor,
        tokens_expire = config.auth.tokens_expire(),
        "Authentication configured"
    );
    if !config.auth.tokens_expire() {
        tracing::warn!("TOKEN_TTL not set: issued tokens never expire");
    }

    // Initialize storage
    let db = match &config.database_url {
        Some(url) => {
            let db = StorageBackend::postgres(url)
                .await
                .context("Failed to connect to database")?;
            tracing::info!("Connected to database");
            db
        }
        None => {
            tracing::warn!("DATABASE_URL not set: using in-memory storage, data is lost on restart");
            StorageBackend::in_memory()
        }
    };
    let db = Arc::new(db);

    let auth_state =
        AuthState::new(&config.auth, db.clone()).context("Failed to initialize authentication")?;

    if config.seed_data {
        seed::seed(&db, &auth_state.hasher)
            .await
            .context("Failed to load seed data")?;
    }

    if config.cors_origins.is_empty() {
        tracing::info!("CORS not configured (same-origin requests only)");
    } else {
        tracing::info!(origins = ?config.cors_origins, "CORS origins configured");
    }

    let app = build_router(db, auth_state, config.cors_origins);

    // Start HTTP server
    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .context("Failed to bind to address")?;
    tracing::info!("HTTP server listening on {}", config.bind_addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
