// Common DTOs for public API
//
// These types are shared across multiple API endpoints.

use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Standard error response for API endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message describing what went wrong.
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }

    /// Convert to axum response tuple
    pub fn into_response(self, status: StatusCode) -> (StatusCode, Json<Self>) {
        (status, Json(self))
    }

    /// 500 with a fixed message; the cause is logged, never returned
    pub fn internal() -> (StatusCode, Json<Self>) {
        Self::new("Internal server error").into_response(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn not_found(what: &str) -> (StatusCode, Json<Self>) {
        Self::new(format!("{} not found", what)).into_response(StatusCode::NOT_FOUND)
    }

    pub fn bad_request(message: impl Into<String>) -> (StatusCode, Json<Self>) {
        Self::new(message).into_response(StatusCode::BAD_REQUEST)
    }
}

/// Response wrapper for list endpoints.
/// All list endpoints return responses wrapped in a `data` field.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ListResponse<T> {
    /// Array of items returned by the list operation.
    pub data: Vec<T>,
}

impl<T> ListResponse<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self { data }
    }
}

impl<T> From<Vec<T>> for ListResponse<T> {
    fn from(data: Vec<T>) -> Self {
        Self { data }
    }
}

/// Error type for handlers: status plus JSON body
pub type ApiError = (StatusCode, Json<ErrorResponse>);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_response_shape() {
        let json = serde_json::to_value(ListResponse::from(vec![1, 2, 3])).unwrap();
        assert_eq!(json, serde_json::json!({ "data": [1, 2, 3] }));
    }

    #[test]
    fn test_error_helpers() {
        let (status, Json(body)) = ErrorResponse::not_found("Chess player");
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.error, "Chess player not found");

        let (status, Json(body)) = ErrorResponse::internal();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, "Internal server error");
    }
}
