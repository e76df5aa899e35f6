// src/feedback/store.rs
// Append-only feedback persistence backed by SQLite

use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::sqlite::SqlitePool;
use tracing::debug;

/// A stored feedback entry. Rows are never mutated after insert.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct FeedbackEntry {
    pub id: i64,
    pub user_name: String,
    pub user_email: String,
    pub message: String,
    pub created_at: String,
}

/// SQLite-backed create/get/list-all store.
#[derive(Clone)]
pub struct FeedbackStore {
    pool: SqlitePool,
}

impl FeedbackStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new entry and return its assigned id.
    pub async fn create(
        &self,
        user_name: &str,
        user_email: &str,
        message: &str,
    ) -> Result<i64, sqlx::Error> {
        let created_at = Utc::now().to_rfc3339();
        let result = sqlx::query(
            "INSERT INTO feedback (user_name, user_email, message, created_at)
             VALUES ($1, $2, $3, $4)",
        )
        .bind(user_name)
        .bind(user_email)
        .bind(message)
        .bind(&created_at)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        debug!("Stored feedback entry {}", id);
        Ok(id)
    }

    /// Fetch a single entry by id.
    pub async fn get(&self, id: i64) -> Result<Option<FeedbackEntry>, sqlx::Error> {
        sqlx::query_as::<_, FeedbackEntry>(
            "SELECT id, user_name, user_email, message, created_at
             FROM feedback WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    /// All entries in insertion order.
    pub async fn list_all(&self) -> Result<Vec<FeedbackEntry>, sqlx::Error> {
        sqlx::query_as::<_, FeedbackEntry>(
            "SELECT id, user_name, user_email, message, created_at
             FROM feedback ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await
    }
}
