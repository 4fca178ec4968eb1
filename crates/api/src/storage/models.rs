// Database models (internal, may differ from public DTOs)

use chrono::{DateTime, Utc};
use chessplayers_core::{Category, ChessPlayer, User, UserId};
use sqlx::FromRow;

// ============================================
// Users
// ============================================

#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: UserId,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CreateUserRow {
    pub email: String,
    pub password_hash: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            email: row.email,
        }
    }
}

// ============================================
// Categories
// ============================================

#[derive(Debug, Clone, FromRow)]
pub struct CategoryRow {
    pub id: i64,
    pub category: String,
}

#[derive(Debug, Clone)]
pub struct CreateCategoryRow {
    pub category: String,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Category {
            id: row.id,
            category: row.category,
        }
    }
}

// ============================================
// Chess players
// ============================================

/// Player row joined with its category name
#[derive(Debug, Clone, FromRow)]
pub struct PlayerRow {
    pub id: i64,
    pub name: String,
    pub rating: i32,
    pub worldchampion: bool,
    pub country: String,
    pub image: Option<String>,
    pub category_id: Option<i64>,
    pub category: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CreatePlayerRow {
    pub name: String,
    pub rating: i32,
    pub worldchampion: bool,
    pub country: String,
    pub image: Option<String>,
    pub category_id: Option<i64>,
}

/// Full replacement of the editable columns.
/// `image` and `category_id` are kept when None.
#[derive(Debug, Clone)]
pub struct UpdatePlayerRow {
    pub name: String,
    pub rating: i32,
    pub worldchampion: bool,
    pub country: String,
    pub image: Option<String>,
    pub category_id: Option<i64>,
}

impl From<PlayerRow> for ChessPlayer {
    fn from(row: PlayerRow) -> Self {
        ChessPlayer {
            id: row.id,
            name: row.name,
            rating: row.rating,
            worldchampion: row.worldchampion,
            country: row.country,
            image: row.image,
            category_id: row.category_id,
            category: row.category,
        }
    }
}
