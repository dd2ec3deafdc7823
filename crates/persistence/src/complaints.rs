//! Complaint persistence

use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::FromRow;

use crate::{PersistenceError, SqliteStore};

/// A citizen complaint. Status is free text; "open", "in_progress",
/// "resolved" and "closed" are the conventional values.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Complaint {
    pub id: i64,
    pub name: String,
    pub contact: String,
    pub issue: String,
    pub status: String,
    pub created_at: NaiveDateTime,
}

#[derive(Clone)]
pub struct SqliteComplaintStore {
    store: SqliteStore,
}

impl SqliteComplaintStore {
    pub fn new(store: SqliteStore) -> Self {
        Self { store }
    }

    /// Insert a complaint; status defaults to "open".
    pub async fn create(
        &self,
        name: &str,
        contact: &str,
        issue: &str,
    ) -> Result<i64, PersistenceError> {
        let result = sqlx::query("INSERT INTO complaints (name, contact, issue) VALUES (?, ?, ?)")
            .bind(name)
            .bind(contact)
            .bind(issue)
            .execute(self.store.pool())
            .await?;

        let id = result.last_insert_rowid();
        tracing::info!(id, "Complaint created");
        Ok(id)
    }

    /// All complaints, newest first.
    pub async fn list(&self) -> Result<Vec<Complaint>, PersistenceError> {
        let complaints = sqlx::query_as::<_, Complaint>(
            "SELECT id, name, contact, issue, status, created_at
             FROM complaints ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(self.store.pool())
        .await?;

        Ok(complaints)
    }

    pub async fn get(&self, id: i64) -> Result<Option<Complaint>, PersistenceError> {
        let complaint = sqlx::query_as::<_, Complaint>(
            "SELECT id, name, contact, issue, status, created_at
             FROM complaints WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.store.pool())
        .await?;

        Ok(complaint)
    }

    /// Unconditional status update by id. Returns the number of rows
    /// affected; zero for an unknown id, which is not an error.
    pub async fn update_status(&self, id: i64, status: &str) -> Result<u64, PersistenceError> {
        let result = sqlx::query("UPDATE complaints SET status = ? WHERE id = ?")
            .bind(status)
            .bind(id)
            .execute(self.store.pool())
            .await?;

        Ok(result.rows_affected())
    }
}
