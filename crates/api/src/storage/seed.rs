// Seed data loading
// Decision: Seed data is embedded in the binary, no files needed at runtime
// Decision: Re-running is safe; existing categories, players and users are left untouched

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::{HashMap, HashSet};

use super::backend::StorageBackend;
use super::error::StorageError;
use super::models::{CreateCategoryRow, CreatePlayerRow, CreateUserRow};
use crate::auth::PasswordHasher;

const SEED_JSON: &str = include_str!("../../data/seed.json");

#[derive(Debug, Deserialize)]
pub struct SeedData {
    pub categories: Vec<SeedCategory>,
    pub players: Vec<SeedPlayer>,
    pub users: Vec<SeedUser>,
}

#[derive(Debug, Deserialize)]
pub struct SeedCategory {
    pub category: String,
}

#[derive(Debug, Deserialize)]
pub struct SeedPlayer {
    pub name: String,
    pub rating: i32,
    pub worldchampion: bool,
    pub country: String,
    pub image: Option<String>,
    /// Category name, resolved to an id at load time
    pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SeedUser {
    pub email: String,
    pub password: String,
}

impl SeedData {
    /// The data set compiled into the binary
    pub fn embedded() -> Result<Self> {
        serde_json::from_str(SEED_JSON).context("Embedded seed data is invalid")
    }
}

/// What a seed run changed
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SeedReport {
    pub categories_created: usize,
    pub players_created: usize,
    pub users_created: usize,
    pub users_skipped: usize,
}

/// Load the embedded seed data
pub async fn seed(db: &StorageBackend, hasher: &PasswordHasher) -> Result<SeedReport> {
    seed_with(db, hasher, SeedData::embedded()?).await
}

/// Load a given data set
pub async fn seed_with(
    db: &StorageBackend,
    hasher: &PasswordHasher,
    data: SeedData,
) -> Result<SeedReport> {
    let mut report = SeedReport::default();

    let mut category_ids = HashMap::new();
    for seed in data.categories {
        let row = match db.get_category_by_name(&seed.category).await? {
            Some(existing) => existing,
            None => {
                report.categories_created += 1;
                db.create_category(CreateCategoryRow {
                    category: seed.category,
                })
                .await?
            }
        };
        category_ids.insert(row.category.clone(), row.id);
    }

    let existing_players: HashSet<String> = db
        .list_players()
        .await?
        .into_iter()
        .map(|p| p.name)
        .collect();

    for seed in data.players {
        if existing_players.contains(&seed.name) {
            continue;
        }

        let category_id = match &seed.category {
            Some(name) => Some(
                *category_ids
                    .get(name)
                    .with_context(|| format!("Seed player {} has unknown category {}", seed.name, name))?,
            ),
            None => None,
        };

        db.create_player(CreatePlayerRow {
            name: seed.name,
            rating: seed.rating,
            worldchampion: seed.worldchampion,
            country: seed.country,
            image: seed.image,
            category_id,
        })
        .await?;
        report.players_created += 1;
    }

    for seed in data.users {
        if db.find_user_by_email(&seed.email).await?.is_some() {
            tracing::info!(email = %seed.email, "Seed user already exists, skipping");
            report.users_skipped += 1;
            continue;
        }

        let password_hash = hasher.hash_blocking(seed.password).await?;
        match db
            .insert_user(CreateUserRow {
                email: seed.email.clone(),
                password_hash,
            })
            .await
        {
            Ok(_) => report.users_created += 1,
            // Registered concurrently between lookup and insert
            Err(StorageError::DuplicateEmail) => {
                tracing::info!(email = %seed.email, "Seed user already exists, skipping");
                report.users_skipped += 1;
            }
            Err(e) => return Err(e).context("Failed to insert seed user"),
        }
    }

    tracing::info!(
        categories = report.categories_created,
        players = report.players_created,
        users = report.users_created,
        users_skipped = report.users_skipped,
        "Seed data loaded"
    );

    Ok(report)
}
