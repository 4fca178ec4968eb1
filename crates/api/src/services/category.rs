// Category service

use crate::storage::{models::CreateCategoryRow, StorageBackend};
use anyhow::Result;
use chessplayers_core::Category;
use std::sync::Arc;

pub struct CategoryService {
    db: Arc<StorageBackend>,
}

impl CategoryService {
    pub fn new(db: Arc<StorageBackend>) -> Self {
        Self { db }
    }

    pub async fn create(&self, category: String) -> Result<Category> {
        let row = self.db.create_category(CreateCategoryRow { category }).await?;
        tracing::info!(category_id = row.id, category = %row.category, "Category created");
        Ok(row.into())
    }

    pub async fn get(&self, id: i64) -> Result<Option<Category>> {
        Ok(self.db.get_category(id).await?.map(Into::into))
    }

    pub async fn list(&self) -> Result<Vec<Category>> {
        let rows = self.db.list_categories().await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}
