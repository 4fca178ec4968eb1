// Storage backend abstraction
// Decision: Use enum dispatch for simplicity over trait objects
//
// This module provides a unified StorageBackend enum that can work with
// either PostgreSQL (production) or in-memory (dev mode) storage.

use anyhow::Result;
use std::sync::Arc;

use super::error::StorageError;
use super::memory::InMemoryDatabase;
use super::models::*;
use super::repositories::Database;

/// Storage backend that can be either PostgreSQL or in-memory
#[derive(Clone)]
pub enum StorageBackend {
    /// PostgreSQL database (production)
    Postgres(Database),
    /// In-memory database (dev mode)
    InMemory(Arc<InMemoryDatabase>),
}

impl StorageBackend {
    /// Create a PostgreSQL storage backend from a database URL
    pub async fn postgres(database_url: &str) -> Result<Self> {
        let db = Database::from_url(database_url).await?;
        Ok(Self::Postgres(db))
    }

    /// Create an in-memory storage backend
    pub fn in_memory() -> Self {
        Self::InMemory(Arc::new(InMemoryDatabase::new()))
    }

    /// Short name for health reporting
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Postgres(_) => "postgres",
            Self::InMemory(_) => "memory",
        }
    }

    // ============================================
    // Users (credential store)
    // ============================================

    pub async fn insert_user(&self, input: CreateUserRow) -> Result<UserRow, StorageError> {
        match self {
            Self::Postgres(db) => db.create_user(input).await,
            Self::InMemory(db) => db.create_user(input).await,
        }
    }

    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<UserRow>, StorageError> {
        match self {
            Self::Postgres(db) => db.get_user_by_email(email).await,
            Self::InMemory(db) => db.get_user_by_email(email).await,
        }
    }

    pub async fn get_user(&self, id: i64) -> Result<Option<UserRow>, StorageError> {
        match self {
            Self::Postgres(db) => db.get_user(id).await,
            Self::InMemory(db) => db.get_user(id).await,
        }
    }

    // ============================================
    // Categories
    // ============================================

    pub async fn create_category(&self, input: CreateCategoryRow) -> Result<CategoryRow> {
        match self {
            Self::Postgres(db) => db.create_category(input).await,
            Self::InMemory(db) => db.create_category(input).await,
        }
    }

    pub async fn get_category(&self, id: i64) -> Result<Option<CategoryRow>> {
        match self {
            Self::Postgres(db) => db.get_category(id).await,
            Self::InMemory(db) => db.get_category(id).await,
        }
    }

    pub async fn get_category_by_name(&self, category: &str) -> Result<Option<CategoryRow>> {
        match self {
            Self::Postgres(db) => db.get_category_by_name(category).await,
            Self::InMemory(db) => db.get_category_by_name(category).await,
        }
    }

    pub async fn list_categories(&self) -> Result<Vec<CategoryRow>> {
        match self {
            Self::Postgres(db) => db.list_categories().await,
            Self::InMemory(db) => db.list_categories().await,
        }
    }

    // ============================================
    // Chess players
    // ============================================

    pub async fn create_player(&self, input: CreatePlayerRow) -> Result<PlayerRow> {
        match self {
            Self::Postgres(db) => db.create_player(input).await,
            Self::InMemory(db) => db.create_player(input).await,
        }
    }

    pub async fn get_player(&self, id: i64) -> Result<Option<PlayerRow>> {
        match self {
            Self::Postgres(db) => db.get_player(id).await,
            Self::InMemory(db) => db.get_player(id).await,
        }
    }

    pub async fn list_players(&self) -> Result<Vec<PlayerRow>> {
        match self {
            Self::Postgres(db) => db.list_players().await,
            Self::InMemory(db) => db.list_players().await,
        }
    }

    pub async fn update_player(&self, id: i64, input: UpdatePlayerRow) -> Result<Option<PlayerRow>> {
        match self {
            Self::Postgres(db) => db.update_player(id, input).await,
            Self::InMemory(db) => db.update_player(id, input).await,
        }
    }

    pub async fn delete_player(&self, id: i64) -> Result<Option<PlayerRow>> {
        match self {
            Self::Postgres(db) => db.delete_player(id).await,
            Self::InMemory(db) => db.delete_player(id).await,
        }
    }
}
