// Authentication errors and their HTTP mapping
// Decision: Every token failure answers with the same 401 body; the cause is only logged

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use super::jwt::TokenError;
use crate::api::common::ErrorResponse;
use crate::storage::StorageError;

/// Body for every guard rejection
pub const UNAUTHORIZED_MESSAGE: &str = "Authentication required";

/// Body for both signin failure causes
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password";

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("{0}")]
    Validation(String),

    #[error("email already registered")]
    DuplicateEmail,

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("missing bearer token")]
    MissingToken,

    #[error("unauthorized: {0}")]
    Unauthorized(#[from] TokenError),

    /// Valid token whose user no longer exists
    #[error("unknown subject {0}")]
    UnknownSubject(i64),

    #[error("credential store unavailable: {0}")]
    StoreUnavailable(String),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl AuthError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::DuplicateEmail => StatusCode::CONFLICT,
            Self::InvalidCredentials
            | Self::MissingToken
            | Self::Unauthorized(_)
            | Self::UnknownSubject(_) => StatusCode::UNAUTHORIZED,
            Self::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to return to the client
    fn public_message(&self) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            Self::DuplicateEmail => "Email already registered".to_string(),
            Self::InvalidCredentials => INVALID_CREDENTIALS_MESSAGE.to_string(),
            Self::MissingToken | Self::Unauthorized(_) | Self::UnknownSubject(_) => {
                UNAUTHORIZED_MESSAGE.to_string()
            }
            Self::StoreUnavailable(_) => "Service temporarily unavailable".to_string(),
            Self::Internal(_) => "Internal server error".to_string(),
        }
    }
}

impl From<StorageError> for AuthError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::DuplicateEmail => Self::DuplicateEmail,
            StorageError::Unavailable(detail) => Self::StoreUnavailable(detail),
            StorageError::Other(e) => Self::Internal(e),
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            Self::StoreUnavailable(detail) => {
                tracing::error!(error = %detail, "Credential store unavailable")
            }
            Self::Internal(e) => tracing::error!(error = ?e, "Authentication failed unexpectedly"),
            other => tracing::debug!(error = %other, status = %status, "Authentication rejected"),
        }

        let mut response = ErrorResponse::new(self.public_message())
            .into_response(status)
            .into_response();

        if matches!(
            self,
            Self::MissingToken | Self::Unauthorized(_) | Self::UnknownSubject(_)
        ) {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }

        response
    }
}
