// Chess player CRUD HTTP routes
// Decision: Public routes, no token required
// Decision: PUT replaces the four editable fields; image and category are kept unless given

use crate::storage::StorageBackend;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chessplayers_core::ChessPlayer;

use super::common::{ApiError, ErrorResponse, ListResponse};
use super::validation::validate_player;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;

/// Request to create a chess player
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreatePlayerRequest {
    #[schema(example = "Magnus Carlsen")]
    pub name: String,
    #[schema(example = 2847)]
    pub rating: i32,
    /// Whether the player has held the world championship title.
    #[serde(default)]
    pub worldchampion: bool,
    #[schema(example = "Norway")]
    pub country: String,
    /// Image file name or URL.
    #[serde(default)]
    #[schema(example = "magnus.jpeg")]
    pub image: Option<String>,
    /// Category to file the player under. Must exist.
    #[serde(default)]
    pub category_id: Option<i64>,
}

/// Request to replace a chess player's editable fields.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdatePlayerRequest {
    pub name: String,
    pub rating: i32,
    #[serde(default)]
    pub worldchampion: bool,
    pub country: String,
    /// Kept unchanged when absent.
    #[serde(default)]
    pub image: Option<String>,
    /// Kept unchanged when absent.
    #[serde(default)]
    pub category_id: Option<i64>,
}

use crate::services::PlayerService;

/// App state for chess player routes
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<PlayerService>,
}

impl AppState {
    pub fn new(db: Arc<StorageBackend>) -> Self {
        Self {
            service: Arc::new(PlayerService::new(db)),
        }
    }
}

/// Create chess player routes
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/chessplayers", get(list_players).post(create_player))
        .route(
            "/chessplayers/:id",
            get(get_player).put(update_player).delete(delete_player),
        )
        .with_state(state)
}

fn body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    body.map(|Json(req)| req).map_err(|rejection| {
        tracing::debug!(error = %rejection, "Rejected request body");
        ErrorResponse::bad_request(rejection.body_text())
    })
}

async fn check_category(state: &AppState, category_id: Option<i64>) -> Result<(), ApiError> {
    let Some(category_id) = category_id else {
        return Ok(());
    };

    let exists = state
        .service
        .category_exists(category_id)
        .await
        .map_err(|e| {
            tracing::error!("Failed to look up category: {}", e);
            ErrorResponse::internal()
        })?;

    if exists {
        Ok(())
    } else {
        Err(ErrorResponse::bad_request(format!(
            "category {} does not exist",
            category_id
        )))
    }
}

/// POST /chessplayers - Create a chess player
#[utoipa::path(
    post,
    path = "/chessplayers",
    request_body = CreatePlayerRequest,
    responses(
        (status = 201, description = "Chess player created", body = ChessPlayer),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "chessplayers"
)]
pub async fn create_player(
    State(state): State<AppState>,
    req: Result<Json<CreatePlayerRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ChessPlayer>), ApiError> {
    let req = body(req)?;
    validate_player(&req.name, req.rating, &req.country, req.image.as_deref())?;
    check_category(&state, req.category_id).await?;

    let player = state.service.create(req).await.map_err(|e| {
        tracing::error!("Failed to create chess player: {}", e);
        ErrorResponse::internal()
    })?;

    Ok((StatusCode::CREATED, Json(player)))
}

/// GET /chessplayers - List chess players, newest first
#[utoipa::path(
    get,
    path = "/chessplayers",
    responses(
        (status = 200, description = "List of chess players", body = ListResponse<ChessPlayer>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "chessplayers"
)]
pub async fn list_players(
    State(state): State<AppState>,
) -> Result<Json<ListResponse<ChessPlayer>>, ApiError> {
    let players = state.service.list().await.map_err(|e| {
        tracing::error!("Failed to list chess players: {}", e);
        ErrorResponse::internal()
    })?;

    Ok(Json(ListResponse::new(players)))
}

/// GET /chessplayers/{id} - Get chess player by ID
#[utoipa::path(
    get,
    path = "/chessplayers/{id}",
    params(
        ("id" = i64, Path, description = "Chess player ID")
    ),
    responses(
        (status = 200, description = "Chess player found", body = ChessPlayer),
        (status = 404, description = "Chess player not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "chessplayers"
)]
pub async fn get_player(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ChessPlayer>, ApiError> {
    let player = state
        .service
        .get(id)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get chess player: {}", e);
            ErrorResponse::internal()
        })?
        .ok_or_else(|| ErrorResponse::not_found("Chess player"))?;

    Ok(Json(player))
}

/// PUT /chessplayers/{id} - Replace chess player fields
#[utoipa::path(
    put,
    path = "/chessplayers/{id}",
    params(
        ("id" = i64, Path, description = "Chess player ID")
    ),
    request_body = UpdatePlayerRequest,
    responses(
        (status = 200, description = "Chess player updated", body = ChessPlayer),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 404, description = "Chess player not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "chessplayers"
)]
pub async fn update_player(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    req: Result<Json<UpdatePlayerRequest>, JsonRejection>,
) -> Result<Json<ChessPlayer>, ApiError> {
    let req = body(req)?;
    validate_player(&req.name, req.rating, &req.country, req.image.as_deref())?;
    check_category(&state, req.category_id).await?;

    let player = state
        .service
        .update(id, req)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update chess player: {}", e);
            ErrorResponse::internal()
        })?
        .ok_or_else(|| ErrorResponse::not_found("Chess player"))?;

    Ok(Json(player))
}

/// DELETE /chessplayers/{id} - Delete chess player
#[utoipa::path(
    delete,
    path = "/chessplayers/{id}",
    params(
        ("id" = i64, Path, description = "Chess player ID")
    ),
    responses(
        (status = 200, description = "Chess player deleted", body = ChessPlayer),
        (status = 404, description = "Chess player not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "chessplayers"
)]
pub async fn delete_player(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ChessPlayer>, ApiError> {
    let player = state
        .service
        .delete(id)
        .await
        .map_err(|e| {
            tracing::error!("Failed to delete chess player: {}", e);
            ErrorResponse::internal()
        })?
        .ok_or_else(|| ErrorResponse::not_found("Chess player"))?;

    Ok(Json(player))
}
