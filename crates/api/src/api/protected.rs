// Routes behind the bearer-token guard, nested under /api

use axum::{extract::State, middleware::from_fn_with_state, routing::get, Json, Router};
use chessplayers_core::{User, UserId};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::common::{ApiError, ErrorResponse};
use crate::auth::{require_auth, AuthContext, AuthError, AuthState};

/// Probe response echoing the authenticated subject
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProbeResponse {
    pub message: String,
    pub user_id: UserId,
}

/// Protected routes; every request passes `require_auth` first
pub fn routes(state: AuthState) -> Router {
    Router::new()
        .route("/test", get(probe))
        .route("/me", get(me))
        .fallback(not_found)
        .layer(from_fn_with_state(state.clone(), require_auth))
        .with_state(state)
}

/// Unknown paths under the prefix, reached only after the guard passed
async fn not_found() -> ApiError {
    ErrorResponse::not_found("Route")
}

/// GET /api/test - Echo the authenticated user id
#[utoipa::path(
    get,
    path = "/api/test",
    responses(
        (status = 200, description = "Authenticated", body = ProbeResponse),
        (status = 401, description = "Missing or invalid token", body = crate::api::ErrorResponse)
    ),
    security(("bearer" = [])),
    tag = "protected"
)]
pub async fn probe(context: AuthContext) -> Json<ProbeResponse> {
    Json(ProbeResponse {
        message: format!(
            "in this protected route, we get the user's id like so: {}",
            context.subject
        ),
        user_id: context.subject,
    })
}

/// GET /api/me - The authenticated user's account
#[utoipa::path(
    get,
    path = "/api/me",
    responses(
        (status = 200, description = "Current user", body = User),
        (status = 401, description = "Missing or invalid token, or user gone", body = crate::api::ErrorResponse)
    ),
    security(("bearer" = [])),
    tag = "protected"
)]
pub async fn me(
    State(state): State<AuthState>,
    context: AuthContext,
) -> Result<Json<User>, AuthError> {
    let user = state
        .db
        .get_user(context.subject)
        .await?
        .ok_or(AuthError::UnknownSubject(context.subject))?;

    Ok(Json(user.into()))
}
