//! SQLite-backed [`KeyValueStore`].

use crate::db::KeyValueStore;
use crate::error::StoreError;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

/// Key-value storage in a single SQLite table
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open (or create) the database at `database_url` and run migrations
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let pool = SqlitePool::connect(database_url).await?;
        Self::new(pool).await
    }

    /// Wrap an existing pool, creating the `key_value` table if needed
    pub async fn new(pool: SqlitePool) -> Result<Self, StoreError> {
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(sqlx::Error::from)?;

        Ok(Self { pool })
    }
}

#[async_trait]
impl KeyValueStore for SqliteStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let value = sqlx::query_scalar::<_, String>("SELECT value FROM key_value WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool) // None when the key was never written
            .await?;

        Ok(value)
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            "INSERT INTO key_value (key, value, updated_at)
             VALUES (?, ?, ?)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        )
        .bind(key)
        .bind(value)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
