//! SQLite connection management

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use crate::schema;
use crate::PersistenceError;

/// SQLite client wrapper shared by all record stores.
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Connect to the database given a sqlx connection string
    /// (e.g. `sqlite://data.db?mode=rwc` or `sqlite::memory:`).
    pub async fn connect(database_url: &str) -> Result<Self, PersistenceError> {
        tracing::info!(url = %database_url, "Connecting to SQLite");

        // An in-memory database exists per connection; a single-connection
        // pool keeps every statement on the same database.
        let max_connections = if database_url.contains(":memory:") { 1 } else { 5 };

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    /// Ensure all tables exist.
    pub async fn ensure_schema(&self) -> Result<(), PersistenceError> {
        schema::create_tables(&self.pool).await?;
        tracing::info!("Schema ensured");
        Ok(())
    }

    /// Get the underlying pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
