// Repository layer for PostgreSQL
//
// Every query is parameterized; no string interpolation of request data.

use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;

use super::error::StorageError;
use super::models::*;

const PLAYER_COLUMNS: &str = r#"
    p.id, p.name, p.rating, p.worldchampion, p.country, p.image, p.category_id,
    c.category
"#;

#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Create database connection from URL and apply pending migrations
    pub async fn from_url(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .acquire_timeout(Duration::from_secs(5))
            .connect(database_url)
            .await?;
        sqlx::migrate!("./migrations").run(&pool).await?;
        Ok(Self { pool })
    }

    // ============================================
    // Users
    // ============================================

    /// Insert a user. A taken email surfaces as `StorageError::DuplicateEmail`
    /// straight from the unique constraint, so concurrent signups cannot both win.
    pub async fn create_user(&self, input: CreateUserRow) -> Result<UserRow, StorageError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (email, password_hash)
            VALUES ($1, $2)
            RETURNING id, email, password_hash, created_at
            "#,
        )
        .bind(&input.email)
        .bind(&input.password_hash)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<UserRow>, StorageError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, password_hash, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn get_user(&self, id: i64) -> Result<Option<UserRow>, StorageError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, password_hash, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    // ============================================
    // Categories
    // ============================================

    pub async fn create_category(&self, input: CreateCategoryRow) -> Result<CategoryRow> {
        let row = sqlx::query_as::<_, CategoryRow>(
            r#"
            INSERT INTO categories (category)
            VALUES ($1)
            RETURNING id, category
            "#,
        )
        .bind(&input.category)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn get_category(&self, id: i64) -> Result<Option<CategoryRow>> {
        let row = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, category FROM categories WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn get_category_by_name(&self, category: &str) -> Result<Option<CategoryRow>> {
        let row = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, category FROM categories WHERE category = $1 ORDER BY id LIMIT 1",
        )
        .bind(category)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn list_categories(&self) -> Result<Vec<CategoryRow>> {
        let rows =
            sqlx::query_as::<_, CategoryRow>("SELECT id, category FROM categories ORDER BY id")
                .fetch_all(&self.pool)
                .await?;

        Ok(rows)
    }

    // ============================================
    // Chess players
    // ============================================

    pub async fn create_player(&self, input: CreatePlayerRow) -> Result<PlayerRow> {
        let row = sqlx::query_as::<_, PlayerRow>(&format!(
            r#"
            WITH p AS (
                INSERT INTO chessplayers (name, rating, worldchampion, country, image, category_id)
                VALUES ($1, $2, $3, $4, $5, $6)
                RETURNING *
            )
            SELECT {PLAYER_COLUMNS}
            FROM p
            LEFT JOIN categories c ON c.id = p.category_id
            "#
        ))
        .bind(&input.name)
        .bind(input.rating)
        .bind(input.worldchampion)
        .bind(&input.country)
        .bind(&input.image)
        .bind(input.category_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn get_player(&self, id: i64) -> Result<Option<PlayerRow>> {
        let row = sqlx::query_as::<_, PlayerRow>(&format!(
            r#"
            SELECT {PLAYER_COLUMNS}
            FROM chessplayers p
            LEFT JOIN categories c ON c.id = p.category_id
            WHERE p.id = $1
            "#
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn list_players(&self) -> Result<Vec<PlayerRow>> {
        let rows = sqlx::query_as::<_, PlayerRow>(&format!(
            r#"
            SELECT {PLAYER_COLUMNS}
            FROM chessplayers p
            LEFT JOIN categories c ON c.id = p.category_id
            ORDER BY p.id DESC
            "#
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn update_player(&self, id: i64, input: UpdatePlayerRow) -> Result<Option<PlayerRow>> {
        let row = sqlx::query_as::<_, PlayerRow>(&format!(
            r#"
            WITH p AS (
                UPDATE chessplayers
                SET
                    name = $2,
                    rating = $3,
                    worldchampion = $4,
                    country = $5,
                    image = COALESCE($6, image),
                    category_id = COALESCE($7, category_id)
                WHERE id = $1
                RETURNING *
            )
            SELECT {PLAYER_COLUMNS}
            FROM p
            LEFT JOIN categories c ON c.id = p.category_id
            "#
        ))
        .bind(id)
        .bind(&input.name)
        .bind(input.rating)
        .bind(input.worldchampion)
        .bind(&input.country)
        .bind(&input.image)
        .bind(input.category_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    /// Delete a player, returning the row as it was
    pub async fn delete_player(&self, id: i64) -> Result<Option<PlayerRow>> {
        let row = sqlx::query_as::<_, PlayerRow>(&format!(
            r#"
            WITH p AS (
                DELETE FROM chessplayers
                WHERE id = $1
                RETURNING *
            )
            SELECT {PLAYER_COLUMNS}
            FROM p
            LEFT JOIN categories c ON c.id = p.category_id
            "#
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }
}
