// Load seed data into the database
//
// Usage: DATABASE_URL=postgres://... cargo run --bin seed
//
// Runs migrations first, then inserts categories, chess players and users.
// Safe to run repeatedly: existing rows are skipped.

use anyhow::{Context, Result};
use chessplayers_api::auth::{config::hash_work_factor_from_vars, PasswordHasher};
use chessplayers_api::storage::{seed, StorageBackend};
use chessplayers_core::telemetry::{init_telemetry, TelemetryConfig};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_telemetry(TelemetryConfig::from_env().with_default_filter("info"));

    let database_url =
        std::env::var("DATABASE_URL").context("DATABASE_URL environment variable required")?;

    let work_factor = hash_work_factor_from_vars(|name| std::env::var(name).ok())?;
    let hasher = PasswordHasher::new(work_factor)?;

    let db = StorageBackend::postgres(&database_url)
        .await
        .context("Failed to connect to database")?;

    let report = seed::seed(&db, &hasher).await?;
    println!(
        "seed data load complete: {} categories, {} players, {} users ({} already present)",
        report.categories_created,
        report.players_created,
        report.users_created,
        report.users_skipped
    );

    Ok(())
}
