// Chess player service for business logic

use crate::storage::{
    models::{CreatePlayerRow, UpdatePlayerRow},
    StorageBackend,
};
use anyhow::Result;
use chessplayers_core::ChessPlayer;
use std::sync::Arc;

use crate::api::players::{CreatePlayerRequest, UpdatePlayerRequest};

pub struct PlayerService {
    db: Arc<StorageBackend>,
}

impl PlayerService {
    pub fn new(db: Arc<StorageBackend>) -> Self {
        Self { db }
    }

    pub async fn create(&self, req: CreatePlayerRequest) -> Result<ChessPlayer> {
        let input = CreatePlayerRow {
            name: req.name,
            rating: req.rating,
            worldchampion: req.worldchampion,
            country: req.country,
            image: req.image,
            category_id: req.category_id,
        };
        let row = self.db.create_player(input).await?;
        tracing::info!(player_id = row.id, name = %row.name, "Chess player created");
        Ok(row.into())
    }

    pub async fn get(&self, id: i64) -> Result<Option<ChessPlayer>> {
        let row = self.db.get_player(id).await?;
        Ok(row.map(Into::into))
    }

    /// Newest first
    pub async fn list(&self) -> Result<Vec<ChessPlayer>> {
        let rows = self.db.list_players().await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    pub async fn update(&self, id: i64, req: UpdatePlayerRequest) -> Result<Option<ChessPlayer>> {
        let input = UpdatePlayerRow {
            name: req.name,
            rating: req.rating,
            worldchampion: req.worldchampion,
            country: req.country,
            image: req.image,
            category_id: req.category_id,
        };
        let row = self.db.update_player(id, input).await?;
        Ok(row.map(Into::into))
    }

    /// Delete a player, returning the removed row
    pub async fn delete(&self, id: i64) -> Result<Option<ChessPlayer>> {
        let row = self.db.delete_player(id).await?;
        if let Some(row) = &row {
            tracing::info!(player_id = row.id, "Chess player deleted");
        }
        Ok(row.map(Into::into))
    }

    /// Whether a category id can be referenced by a player
    pub async fn category_exists(&self, category_id: i64) -> Result<bool> {
        Ok(self.db.get_category(category_id).await?.is_some())
    }
}
