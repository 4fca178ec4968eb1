// Authentication HTTP routes
// Decision: Signup and signin both answer `{token}`, no cookies or refresh tokens
// Decision: Unknown email and wrong password are the same 401 and cost the same work

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{error::AuthError, middleware::AuthState};
use crate::api::common::ErrorResponse;
use crate::storage::models::CreateUserRow;

/// Signup and signin request body
#[derive(Debug, Deserialize, ToSchema)]
pub struct CredentialsRequest {
    #[schema(example = "jon@user.com")]
    pub email: Option<String>,
    #[schema(example = "1234")]
    pub password: Option<String>,
}

/// Token response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    /// Bearer token for `Authorization: Bearer <token>`
    pub token: String,
}

/// Validated credentials
struct Credentials {
    email: String,
    password: String,
}

fn required(field: &'static str, value: Option<String>) -> Result<String, AuthError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(AuthError::Validation(format!("{} is required", field))),
    }
}

fn credentials(
    body: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<Credentials, AuthError> {
    let Json(req) = body.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Rejected credentials body");
        AuthError::Validation("Request body must be JSON with email and password".to_string())
    })?;

    Ok(Credentials {
        email: required("email", req.email)?,
        password: required("password", req.password)?,
    })
}

/// Create auth routes
pub fn routes(state: AuthState) -> Router {
    Router::new()
        .route("/auth/signup", post(signup))
        .route("/auth/signin", post(signin))
        .with_state(state)
}

/// POST /auth/signup - Register a new user
#[utoipa::path(
    post,
    path = "/auth/signup",
    request_body = CredentialsRequest,
    responses(
        (status = 200, description = "User created", body = TokenResponse),
        (status = 400, description = "Missing email or password", body = ErrorResponse),
        (status = 409, description = "Email already registered", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "auth"
)]
pub async fn signup(
    State(state): State<AuthState>,
    body: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<Json<TokenResponse>, AuthError> {
    let Credentials { email, password } = credentials(body)?;

    let password_hash = state.hasher.hash_blocking(password).await.map_err(|e| {
        tracing::error!(error = ?e, "Password hashing failed");
        AuthError::Internal(e)
    })?;

    let user = state
        .db
        .insert_user(CreateUserRow {
            email,
            password_hash,
        })
        .await
        .map_err(|e| {
            let err = AuthError::from(e);
            if matches!(err, AuthError::DuplicateEmail) {
                tracing::info!("Signup rejected: email already registered");
            }
            err
        })?;

    let token = state.codec.issue(user.id)?;
    tracing::info!(user_id = user.id, "User signed up");

    Ok(Json(TokenResponse { token }))
}

/// POST /auth/signin - Exchange email and password for a token
#[utoipa::path(
    post,
    path = "/auth/signin",
    request_body = CredentialsRequest,
    responses(
        (status = 200, description = "Signed in", body = TokenResponse),
        (status = 400, description = "Missing email or password", body = ErrorResponse),
        (status = 401, description = "Invalid email or password", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "auth"
)]
pub async fn signin(
    State(state): State<AuthState>,
    body: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<Json<TokenResponse>, AuthError> {
    let Credentials { email, password } = credentials(body)?;

    let user = state.db.find_user_by_email(&email).await?;

    // Verify against a dummy digest when the user is absent
    let digest = match &user {
        Some(row) => row.password_hash.clone(),
        None => state.dummy_hash.to_string(),
    };
    let valid = state.hasher.verify_blocking(password, digest).await?;

    let user = match user {
        Some(row) if valid => row,
        _ => {
            tracing::debug!("Signin rejected");
            return Err(AuthError::InvalidCredentials);
        }
    };

    let token = state.codec.issue(user.id)?;
    tracing::info!(user_id = user.id, "User signed in");

    Ok(Json(TokenResponse { token }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{config::AuthConfig, password::PasswordHasher};
    use crate::storage::StorageBackend;
    use std::sync::Arc;

    fn state() -> AuthState {
        AuthState::with_hasher(
            &AuthConfig::with_secret("routes-test-secret"),
            PasswordHasher::with_memory_cost(1, 1024).unwrap(),
            Arc::new(StorageBackend::in_memory()),
        )
        .unwrap()
    }

    fn body(email: Option<&str>, password: Option<&str>) -> Result<Json<CredentialsRequest>, JsonRejection> {
        Ok(Json(CredentialsRequest {
            email: email.map(str::to_string),
            password: password.map(str::to_string),
        }))
    }

    #[tokio::test]
    async fn test_signup_then_signin_same_subject() {
        let state = state();

        let Json(signed_up) = signup(State(state.clone()), body(Some("jon@user.com"), Some("1234")))
            .await
            .unwrap();
        let Json(signed_in) = signin(State(state.clone()), body(Some("jon@user.com"), Some("1234")))
            .await
            .unwrap();

        let a = state.codec.verify(&signed_up.token).unwrap();
        let b = state.codec.verify(&signed_in.token).unwrap();
        assert_eq!(a.subject, b.subject);
    }

    #[tokio::test]
    async fn test_signup_requires_both_fields() {
        let state = state();

        let err = signup(State(state.clone()), body(None, Some("1234"))).await.unwrap_err();
        assert!(matches!(err, AuthError::Validation(ref m) if m == "email is required"));

        let err = signup(State(state.clone()), body(Some("jon@user.com"), Some("")))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::Validation(ref m) if m == "password is required"));

        let err = signup(State(state), body(Some("   "), Some("1234"))).await.unwrap_err();
        assert!(matches!(err, AuthError::Validation(_)));
    }

    #[tokio::test]
    async fn test_duplicate_signup_keeps_original_password() {
        let state = state();
        let _signed_up = signup(State(state.clone()), body(Some("jon@user.com"), Some("1234")))
            .await
            .unwrap();

        let err = signup(State(state.clone()), body(Some("jon@user.com"), Some("other")))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::DuplicateEmail));

        assert!(signin(State(state.clone()), body(Some("jon@user.com"), Some("1234")))
            .await
            .is_ok());
        assert!(matches!(
            signin(State(state), body(Some("jon@user.com"), Some("other"))).await,
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[tokio::test]
    async fn test_signin_failures_are_the_same_error() {
        let state = state();
        let _signed_up = signup(State(state.clone()), body(Some("jon@user.com"), Some("1234")))
            .await
            .unwrap();

        let unknown = signin(State(state.clone()), body(Some("nobody@user.com"), Some("1234"))).await;
        let wrong = signin(State(state), body(Some("jon@user.com"), Some("4321"))).await;

        assert!(matches!(unknown, Err(AuthError::InvalidCredentials)));
        assert!(matches!(wrong, Err(AuthError::InvalidCredentials)));
    }
}
