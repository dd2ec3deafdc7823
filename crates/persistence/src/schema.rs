//! Table definitions
//!
//! `ticket_number` carries a UNIQUE declaration but generation never checks
//! the store, so uniqueness is probabilistic (36^8 space); a collision
//! surfaces as a database error on insert.

use sqlx::SqlitePool;

use crate::PersistenceError;

const CREATE_CHAT_HISTORY: &str = "
    CREATE TABLE IF NOT EXISTS chat_history (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        session_id TEXT NOT NULL,
        user_message TEXT NOT NULL,
        bot_message TEXT NOT NULL,
        source_lang TEXT NOT NULL,
        target_lang TEXT NOT NULL,
        created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
    )";

const CREATE_COMPLAINTS: &str = "
    CREATE TABLE IF NOT EXISTS complaints (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL DEFAULT '',
        contact TEXT NOT NULL DEFAULT '',
        issue TEXT NOT NULL,
        status TEXT NOT NULL DEFAULT 'open',
        created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
    )";

const CREATE_APPLICATIONS: &str = "
    CREATE TABLE IF NOT EXISTS applications (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        service_id TEXT NOT NULL,
        name TEXT NOT NULL,
        email TEXT NOT NULL DEFAULT '',
        phone TEXT,
        purpose TEXT NOT NULL DEFAULT '',
        details TEXT NOT NULL DEFAULT '{}',
        ticket_number TEXT UNIQUE,
        status TEXT NOT NULL DEFAULT 'Submitted',
        file_name TEXT,
        file_data BLOB,
        created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
    )";

const CREATE_SERVICES: &str = "
    CREATE TABLE IF NOT EXISTS services (
        service_id TEXT PRIMARY KEY,
        title TEXT NOT NULL,
        details TEXT NOT NULL
    )";

/// Create all tables if they do not exist.
pub async fn create_tables(pool: &SqlitePool) -> Result<(), PersistenceError> {
    for statement in [
        CREATE_CHAT_HISTORY,
        CREATE_COMPLAINTS,
        CREATE_APPLICATIONS,
        CREATE_SERVICES,
    ] {
        sqlx::query(statement).execute(pool).await?;
    }
    Ok(())
}
