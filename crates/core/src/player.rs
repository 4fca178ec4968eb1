// Chess player domain type

use serde::{Deserialize, Serialize};

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// A chess player together with the name of its category, if any
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct ChessPlayer {
    pub id: i64,
    #[cfg_attr(feature = "openapi", schema(example = "Magnus Carlsen"))]
    pub name: String,
    /// FIDE-style rating
    #[cfg_attr(feature = "openapi", schema(example = 2847))]
    pub rating: i32,
    pub worldchampion: bool,
    #[cfg_attr(feature = "openapi", schema(example = "Norway"))]
    pub country: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub category_id: Option<i64>,
    /// Joined category name
    #[serde(default)]
    pub category: Option<String>,
}
