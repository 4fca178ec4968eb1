// Input validation for player and category APIs
//
// Hard limits, not configurable. Text fields are capped to keep rows small
// and ratings stay inside what the rating systems can actually produce.

use super::common::ErrorResponse;
use axum::http::StatusCode;
use axum::Json;

// =============================================================================
// Input Limits
// =============================================================================

/// Maximum size for any text field (name, country, image, category).
pub const MAX_TEXT_BYTES: usize = 2 * 1024; // 2 KB

/// Highest accepted rating. Above every rating ever recorded.
pub const MAX_RATING: i32 = 4000;

// =============================================================================
// Validation Functions
// =============================================================================

/// Validation error naming the offending field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError(pub String);

impl From<ValidationError> for (StatusCode, Json<ErrorResponse>) {
    fn from(err: ValidationError) -> Self {
        (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(err.0)))
    }
}

/// Required text: non-blank and within the size limit
pub fn validate_text(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError(format!("{} is required", field)));
    }
    validate_optional_text(field, Some(value))
}

/// Optional text: only the size limit applies
pub fn validate_optional_text(field: &str, value: Option<&str>) -> Result<(), ValidationError> {
    if let Some(value) = value {
        if value.len() > MAX_TEXT_BYTES {
            tracing::warn!(
                "{} exceeds limit: {} bytes (max: {})",
                field,
                value.len(),
                MAX_TEXT_BYTES
            );
            return Err(ValidationError(format!(
                "{} exceeds {} bytes",
                field, MAX_TEXT_BYTES
            )));
        }
    }
    Ok(())
}

pub fn validate_rating(rating: i32) -> Result<(), ValidationError> {
    if !(0..=MAX_RATING).contains(&rating) {
        return Err(ValidationError(format!(
            "rating must be between 0 and {}",
            MAX_RATING
        )));
    }
    Ok(())
}

/// Validate the editable fields of a chess player
pub fn validate_player(
    name: &str,
    rating: i32,
    country: &str,
    image: Option<&str>,
) -> Result<(), ValidationError> {
    validate_text("name", name)?;
    validate_rating(rating)?;
    validate_text("country", country)?;
    validate_optional_text("image", image)?;
    Ok(())
}

pub fn validate_category(category: &str) -> Result<(), ValidationError> {
    validate_text("category", category)
}
