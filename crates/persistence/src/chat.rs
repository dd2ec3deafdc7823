//! Chat turn persistence
//!
//! Chat turns are append-only: there is no update or delete operation, and
//! history is read back in insertion order within a session.

use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::FromRow;

use crate::{PersistenceError, SqliteStore};

/// One persisted chat exchange.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ChatTurn {
    pub id: i64,
    pub session_id: String,
    pub user_message: String,
    pub bot_message: String,
    pub source_lang: String,
    pub target_lang: String,
    pub created_at: NaiveDateTime,
}

#[derive(Clone)]
pub struct SqliteChatStore {
    store: SqliteStore,
}

impl SqliteChatStore {
    pub fn new(store: SqliteStore) -> Self {
        Self { store }
    }

    /// Append one turn to the history.
    pub async fn append(
        &self,
        session_id: &str,
        user_message: &str,
        bot_message: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<i64, PersistenceError> {
        let result = sqlx::query(
            "INSERT INTO chat_history (session_id, user_message, bot_message, source_lang, target_lang)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(session_id)
        .bind(user_message)
        .bind(bot_message)
        .bind(source_lang)
        .bind(target_lang)
        .execute(self.store.pool())
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// All turns for a session, oldest first.
    pub async fn history_for_session(
        &self,
        session_id: &str,
    ) -> Result<Vec<ChatTurn>, PersistenceError> {
        let turns = sqlx::query_as::<_, ChatTurn>(
            "SELECT id, session_id, user_message, bot_message, source_lang, target_lang, created_at
             FROM chat_history WHERE session_id = ? ORDER BY id ASC",
        )
        .bind(session_id)
        .fetch_all(self.store.pool())
        .await?;

        Ok(turns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn memory_store() -> SqliteChatStore {
        let store = SqliteStore::connect("sqlite::memory:").await.unwrap();
        store.ensure_schema().await.unwrap();
        SqliteChatStore::new(store)
    }

    #[tokio::test]
    async fn history_is_grouped_by_session_and_ordered() {
        let chat = memory_store().await;

        chat.append("s1", "hello", "hi there", "en", "en").await.unwrap();
        chat.append("s2", "other", "reply", "en", "hi").await.unwrap();
        chat.append("s1", "how?", "like this", "en", "en").await.unwrap();

        let history = chat.history_for_session("s1").await.unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].user_message, "hello");
        assert_eq!(history[1].user_message, "how?");
        assert!(history[0].id < history[1].id);
    }

    #[tokio::test]
    async fn unknown_session_has_empty_history() {
        let chat = memory_store().await;
        let history = chat.history_for_session("nobody").await.unwrap();
        assert!(history.is_empty());
    }
}
