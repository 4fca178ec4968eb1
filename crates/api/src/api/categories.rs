// Category HTTP routes

use crate::storage::StorageBackend;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chessplayers_core::Category;

use super::common::{ApiError, ErrorResponse, ListResponse};
use super::validation::validate_category;
use crate::services::CategoryService;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;

/// Request to create a category
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateCategoryRequest {
    #[schema(example = "grandmaster")]
    pub category: String,
}

/// App state for category routes
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<CategoryService>,
}

impl AppState {
    pub fn new(db: Arc<StorageBackend>) -> Self {
        Self {
            service: Arc::new(CategoryService::new(db)),
        }
    }
}

/// Create category routes
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/categories", get(list_categories).post(create_category))
        .route("/categories/:id", get(get_category))
        .with_state(state)
}

/// POST /categories - Create a category
#[utoipa::path(
    post,
    path = "/categories",
    request_body = CreateCategoryRequest,
    responses(
        (status = 201, description = "Category created", body = Category),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "categories"
)]
pub async fn create_category(
    State(state): State<AppState>,
    req: Result<Json<CreateCategoryRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Category>), ApiError> {
    let Json(req) = req.map_err(|rejection| ErrorResponse::bad_request(rejection.body_text()))?;
    validate_category(&req.category)?;

    let category = state.service.create(req.category).await.map_err(|e| {
        tracing::error!("Failed to create category: {}", e);
        ErrorResponse::internal()
    })?;

    Ok((StatusCode::CREATED, Json(category)))
}

/// GET /categories - List categories
#[utoipa::path(
    get,
    path = "/categories",
    responses(
        (status = 200, description = "List of categories", body = ListResponse<Category>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "categories"
)]
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<ListResponse<Category>>, ApiError> {
    let categories = state.service.list().await.map_err(|e| {
        tracing::error!("Failed to list categories: {}", e);
        ErrorResponse::internal()
    })?;

    Ok(Json(ListResponse::new(categories)))
}

/// GET /categories/{id} - Get category by ID
#[utoipa::path(
    get,
    path = "/categories/{id}",
    params(
        ("id" = i64, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category found", body = Category),
        (status = 404, description = "Category not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "categories"
)]
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Category>, ApiError> {
    let category = state
        .service
        .get(id)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get category: {}", e);
            ErrorResponse::internal()
        })?
        .ok_or_else(|| ErrorResponse::not_found("Category"))?;

    Ok(Json(category))
}
