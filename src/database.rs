/// SQLite connection setup and schema bootstrap
///
/// Opens the pool described by the configured URL and creates every table
/// the storages need. Schema creation is idempotent (IF NOT EXISTS).

use crate::{
    auth::TokenStorage,
    competition::CompetitionStorage,
    config::DatabaseConfig,
    project::ProjectStorage,
    user::UserStorage,
};
use anyhow::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

/// Open the SQLite pool for the configured database URL
///
/// File-backed databases get their parent directory created and the file
/// created on first use.
pub async fn connect(config: &DatabaseConfig) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(&config.url)
        .map_err(|e| anyhow::anyhow!("Invalid database URL '{}': {}", config.url, e))?
        .create_if_missing(true);

    if let Some(dir) = options.get_filename().parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).map_err(|e| {
            anyhow::anyhow!("Failed to create database directory '{}': {}", dir.display(), e)
        })?;
    }

    tracing::info!("🗄️ Opening database pool: {}", config.url);
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    Ok(pool)
}

/// Create all tables derived from the entity definitions
pub async fn init_schema(pool: &SqlitePool) -> Result<()> {
    ProjectStorage::new(pool.clone()).init_schema().await?;
    UserStorage::new(pool.clone()).init_schema().await?;
    TokenStorage::new(pool.clone()).init_schema().await?;
    CompetitionStorage::new(pool.clone()).init_schema().await?;
    Ok(())
}

/// Single-connection in-memory pool with the full schema, for tests
///
/// An in-memory database lives as long as its connection, so the pool is
/// pinned to one connection that never expires.
#[cfg(test)]
pub(crate) async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite");
    init_schema(&pool).await.expect("schema");
    pool
}
