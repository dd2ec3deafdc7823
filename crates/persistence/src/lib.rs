//! SQLite persistence layer for the citizen-services backend
//!
//! Provides storage for:
//! - Chat turns (append-only history, grouped by session)
//! - Complaints (create, list, status transition)
//! - Applications (create with optional inline document, list, status
//!   transition, document download)
//! - Services (static reference data, seeded once)

pub mod applications;
pub mod chat;
pub mod complaints;
pub mod schema;
pub mod services;
pub mod store;

pub use applications::{
    Application, ApplicationFile, NewApplication, SqliteApplicationStore,
};
pub use chat::{ChatTurn, SqliteChatStore};
pub use complaints::{Complaint, SqliteComplaintStore};
pub use services::{default_services, Service, SqliteServiceStore};
pub use store::SqliteStore;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("invalid data: {0}")]
    InvalidData(String),
}

/// Combined persistence layer with all record stores
#[derive(Clone)]
pub struct PersistenceLayer {
    pub chat: SqliteChatStore,
    pub complaints: SqliteComplaintStore,
    pub applications: SqliteApplicationStore,
    pub services: SqliteServiceStore,
}

/// Initialize the persistence layer: connect, ensure the schema, and
/// optionally seed the services reference table.
pub async fn init(database_url: &str, seed_services: bool) -> Result<PersistenceLayer, PersistenceError> {
    let store = SqliteStore::connect(database_url).await?;
    store.ensure_schema().await?;

    let services = SqliteServiceStore::new(store.clone());
    if seed_services {
        let seeded = services.seed(&default_services()).await?;
        if seeded > 0 {
            tracing::info!(count = seeded, "Seeded services reference table");
        }
    }

    Ok(PersistenceLayer {
        chat: SqliteChatStore::new(store.clone()),
        complaints: SqliteComplaintStore::new(store.clone()),
        applications: SqliteApplicationStore::new(store.clone()),
        services,
    })
}
