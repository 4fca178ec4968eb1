// Category domain type

use serde::{Deserialize, Serialize};

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Player category (e.g. "grandmaster")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct Category {
    pub id: i64,
    #[cfg_attr(feature = "openapi", schema(example = "grandmaster"))]
    pub category: String,
}
