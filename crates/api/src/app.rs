// Router assembly shared by the server binary and integration tests
// Decision: Everything under /api passes the bearer-token guard, everything else is public

use axum::http::{header, HeaderValue, Method};
use axum::{extract::State, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::api;
use crate::auth::{self, AuthState};
use crate::openapi::ApiDoc;
use crate::storage::StorageBackend;

/// Prefix of the guarded route tree
pub const PROTECTED_PREFIX: &str = "/api";

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub storage: String,
}

/// State for health endpoint
#[derive(Clone)]
struct HealthState {
    storage: &'static str,
}

async fn health(State(state): State<HealthState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        storage: state.storage.to_string(),
    })
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

fn cors_layer(origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
}

/// Build the complete application router
pub fn build_router(
    db: Arc<StorageBackend>,
    auth_state: AuthState,
    cors_origins: Vec<HeaderValue>,
) -> Router {
    let health_state = HealthState {
        storage: db.kind(),
    };

    let app = Router::new()
        .route("/health", get(health).with_state(health_state))
        .route("/api-doc/openapi.json", get(openapi_json))
        .merge(auth::routes::routes(auth_state.clone()))
        .merge(api::players::routes(api::players::AppState::new(db.clone())))
        .merge(api::categories::routes(api::categories::AppState::new(db)))
        .nest(PROTECTED_PREFIX, api::protected::routes(auth_state));

    // Add CORS layer only if origins are configured
    let app = if cors_origins.is_empty() {
        app
    } else {
        app.layer(cors_layer(cors_origins))
    };

    app.layer(TraceLayer::new_for_http())
}
