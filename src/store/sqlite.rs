//! SQLite-backed record store.

use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use tracing::info;

use super::RecordStore;
use crate::error::StoreError;
use crate::models::{Item, NewItem};

/// `SQLite` implementation of [`RecordStore`]
#[derive(Debug, Clone)]
pub struct SqliteRecordStore {
    pool: SqlitePool,
}

impl SqliteRecordStore {
    /// Opens a connection pool for `database_url`.
    ///
    /// In-memory databases are private to a single connection, so for
    /// `:memory:` URLs the pool is pinned to one connection that is never
    /// recycled.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let in_memory = database_url.contains(":memory:");

        let mut options = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| StoreError::Unavailable(format!("Invalid database URL: {}", e)))?
            .busy_timeout(Duration::from_secs(5))
            .create_if_missing(true);
        if !in_memory {
            options = options.journal_mode(SqliteJournalMode::Wal);
        }

        let pool_options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None::<Duration>)
                .max_lifetime(None::<Duration>)
        } else {
            SqlitePoolOptions::new()
                .max_connections(max_connections.max(1))
                .idle_timeout(Duration::from_secs(30))
                .max_lifetime(Duration::from_secs(1800))
        };

        let pool = pool_options
            .acquire_timeout(Duration::from_secs(10))
            .connect_with(options)
            .await
            .map_err(|e| {
                StoreError::Unavailable(format!("Failed to create connection pool: {}", e))
            })?;

        Ok(Self { pool })
    }

    /// Drops and recreates the item table, wiping any previous run's data.
    pub async fn recreate_schema(&self) -> Result<(), StoreError> {
        sqlx::query("DROP TABLE IF EXISTS todo_item")
            .execute(&self.pool)
            .await?;
        sqlx::query(
            r#"
            CREATE TABLE todo_item (
                id          INTEGER PRIMARY KEY AUTOINCREMENT,
                title       TEXT NOT NULL,
                description TEXT
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        info!("Recreated todo_item table");
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close the connection pool gracefully
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl RecordStore for SqliteRecordStore {
    async fn create(&self, item: NewItem) -> Result<Item, StoreError> {
        let stored = sqlx::query_as::<_, Item>(
            r#"
            INSERT INTO todo_item (title, description)
            VALUES (?, ?)
            RETURNING id, title, description
            "#,
        )
        .bind(&item.title)
        .bind(&item.description)
        .fetch_one(&self.pool)
        .await?;

        Ok(stored)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Item>, StoreError> {
        let item = sqlx::query_as::<_, Item>(
            "SELECT id, title, description FROM todo_item WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(item)
    }
}
