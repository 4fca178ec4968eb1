// In-memory storage implementation for dev mode
// Decision: Use parking_lot for thread-safe access
// Decision: IDs come from per-table sequences, never reused (like BIGSERIAL)
//
// This implementation provides a PostgreSQL-compatible API backed by in-memory
// maps, allowing the API to run without a database for development and tests.

use anyhow::Result;
use chrono::Utc;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use super::error::StorageError;
use super::models::*;

/// In-memory database for dev mode
/// All data is stored in memory and lost on restart
#[derive(Default)]
pub struct InMemoryDatabase {
    users: RwLock<BTreeMap<i64, UserRow>>,
    categories: RwLock<BTreeMap<i64, CategoryRow>>,
    players: RwLock<BTreeMap<i64, StoredPlayer>>,
    user_seq: AtomicI64,
    category_seq: AtomicI64,
    player_seq: AtomicI64,
}

/// Player as stored; the category name is joined at read time
#[derive(Debug, Clone)]
struct StoredPlayer {
    id: i64,
    name: String,
    rating: i32,
    worldchampion: bool,
    country: String,
    image: Option<String>,
    category_id: Option<i64>,
}

fn next_id(seq: &AtomicI64) -> i64 {
    seq.fetch_add(1, Ordering::SeqCst) + 1
}

impl InMemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    // ============================================
    // Users
    // ============================================

    pub async fn create_user(&self, input: CreateUserRow) -> Result<UserRow, StorageError> {
        // Check and insert under one write lock: the uniqueness constraint
        let mut users = self.users.write();
        if users.values().any(|u| u.email == input.email) {
            return Err(StorageError::DuplicateEmail);
        }

        let id = next_id(&self.user_seq);
        let row = UserRow {
            id,
            email: input.email,
            password_hash: input.password_hash,
            created_at: Utc::now(),
        };
        users.insert(id, row.clone());
        Ok(row)
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<UserRow>, StorageError> {
        Ok(self
            .users
            .read()
            .values()
            .find(|u| u.email == email)
            .cloned())
    }

    pub async fn get_user(&self, id: i64) -> Result<Option<UserRow>, StorageError> {
        Ok(self.users.read().get(&id).cloned())
    }

    // ============================================
    // Categories
    // ============================================

    pub async fn create_category(&self, input: CreateCategoryRow) -> Result<CategoryRow> {
        let id = next_id(&self.category_seq);
        let row = CategoryRow {
            id,
            category: input.category,
        };
        self.categories.write().insert(id, row.clone());
        Ok(row)
    }

    pub async fn get_category(&self, id: i64) -> Result<Option<CategoryRow>> {
        Ok(self.categories.read().get(&id).cloned())
    }

    pub async fn get_category_by_name(&self, category: &str) -> Result<Option<CategoryRow>> {
        Ok(self
            .categories
            .read()
            .values()
            .find(|c| c.category == category)
            .cloned())
    }

    pub async fn list_categories(&self) -> Result<Vec<CategoryRow>> {
        Ok(self.categories.read().values().cloned().collect())
    }

    // ============================================
    // Chess players
    // ============================================

    fn join_category(&self, player: StoredPlayer) -> PlayerRow {
        let category = player
            .category_id
            .and_then(|id| self.categories.read().get(&id).map(|c| c.category.clone()));

        PlayerRow {
            id: player.id,
            name: player.name,
            rating: player.rating,
            worldchampion: player.worldchampion,
            country: player.country,
            image: player.image,
            category_id: player.category_id,
            category,
        }
    }

    pub async fn create_player(&self, input: CreatePlayerRow) -> Result<PlayerRow> {
        let id = next_id(&self.player_seq);
        let stored = StoredPlayer {
            id,
            name: input.name,
            rating: input.rating,
            worldchampion: input.worldchampion,
            country: input.country,
            image: input.image,
            category_id: input.category_id,
        };
        self.players.write().insert(id, stored.clone());
        Ok(self.join_category(stored))
    }

    pub async fn get_player(&self, id: i64) -> Result<Option<PlayerRow>> {
        let stored = self.players.read().get(&id).cloned();
        Ok(stored.map(|p| self.join_category(p)))
    }

    pub async fn list_players(&self) -> Result<Vec<PlayerRow>> {
        let stored: Vec<StoredPlayer> = self.players.read().values().rev().cloned().collect();
        Ok(stored.into_iter().map(|p| self.join_category(p)).collect())
    }

    pub async fn update_player(&self, id: i64, input: UpdatePlayerRow) -> Result<Option<PlayerRow>> {
        let updated = {
            let mut players = self.players.write();
            match players.get_mut(&id) {
                Some(player) => {
                    player.name = input.name;
                    player.rating = input.rating;
                    player.worldchampion = input.worldchampion;
                    player.country = input.country;
                    if input.image.is_some() {
                        player.image = input.image;
                    }
                    if input.category_id.is_some() {
                        player.category_id = input.category_id;
                    }
                    Some(player.clone())
                }
                None => None,
            }
        };
        Ok(updated.map(|p| self.join_category(p)))
    }

    pub async fn delete_player(&self, id: i64) -> Result<Option<PlayerRow>> {
        let removed = self.players.write().remove(&id);
        Ok(removed.map(|p| self.join_category(p)))
    }
}
