//! SQLite connection pool wrapper for the storage crate.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::info;

use crate::error::StorageError;

/// Manages a single SQLite pool; creates DB file if missing.
#[derive(Clone)]
pub struct SqlitePoolManager {
    pool: SqlitePool,
}

impl SqlitePoolManager {
    /// Creates a pool for the given database URL (`sqlite::memory:`, `sqlite:path` or a bare path).
    ///
    /// An in-memory database lives as long as this manager: the pool holds
    /// exactly one connection that never expires.
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        info!("Initializing SQLite pool: {}", database_url);

        let options = parse_options(database_url)?.create_if_missing(true);

        let pool_options = if is_in_memory(database_url) {
            SqlitePoolOptions::new()
                .min_connections(1)
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new()
        };

        let pool = pool_options.connect_with(options).await?;

        Ok(Self { pool })
    }

    /// Returns the underlying pool for running queries.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

fn parse_options(database_url: &str) -> Result<SqliteConnectOptions, StorageError> {
    if database_url.starts_with("sqlite:") {
        SqliteConnectOptions::from_str(database_url)
            .map_err(|e| StorageError::Config(format!("invalid database url {database_url}: {e}")))
    } else {
        Ok(SqliteConnectOptions::new().filename(database_url))
    }
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}
