//! Application persistence
//!
//! Applications carry a typed `details` map round-tripped through a JSON
//! text column, and an optional uploaded document stored inline
//! (`file_name` + `file_data`). List queries never load the blob; the
//! document is fetched separately for download.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use crate::{PersistenceError, SqliteStore};

/// Cap applied to document listings.
const SAVED_FILES_LIMIT: i64 = 200;

const APPLICATION_COLUMNS: &str =
    "id, service_id, name, email, phone, purpose, details, ticket_number, status, file_name, created_at";

/// A submitted application. `file_name` is present when a document was
/// uploaded; the bytes live behind [`SqliteApplicationStore::get_file`].
#[derive(Debug, Clone, Serialize)]
pub struct Application {
    pub id: i64,
    pub service_id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub purpose: String,
    pub details: BTreeMap<String, String>,
    pub ticket_number: String,
    pub status: String,
    pub file_name: Option<String>,
    pub created_at: NaiveDateTime,
}

/// An uploaded document attached to an application.
#[derive(Debug, Clone)]
pub struct ApplicationFile {
    pub name: String,
    pub data: Vec<u8>,
}

/// Input record for creating an application.
#[derive(Debug, Clone, Default)]
pub struct NewApplication {
    pub service_id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub purpose: String,
    pub details: BTreeMap<String, String>,
    pub ticket_number: String,
    pub file: Option<ApplicationFile>,
}

#[derive(Clone)]
pub struct SqliteApplicationStore {
    store: SqliteStore,
}

impl SqliteApplicationStore {
    pub fn new(store: SqliteStore) -> Self {
        Self { store }
    }

    /// Insert an application; status defaults to "Submitted".
    pub async fn create(&self, new: &NewApplication) -> Result<i64, PersistenceError> {
        let details = serde_json::to_string(&new.details)
            .map_err(|e| PersistenceError::InvalidData(e.to_string()))?;
        let (file_name, file_data) = match &new.file {
            Some(file) => (Some(file.name.as_str()), Some(file.data.as_slice())),
            None => (None, None),
        };

        let result = sqlx::query(
            "INSERT INTO applications
                (service_id, name, email, phone, purpose, details, ticket_number, file_name, file_data)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&new.service_id)
        .bind(&new.name)
        .bind(&new.email)
        .bind(&new.phone)
        .bind(&new.purpose)
        .bind(details)
        .bind(&new.ticket_number)
        .bind(file_name)
        .bind(file_data)
        .execute(self.store.pool())
        .await?;

        let id = result.last_insert_rowid();
        tracing::info!(
            id,
            service_id = %new.service_id,
            ticket_number = %new.ticket_number,
            has_file = new.file.is_some(),
            "Application created"
        );
        Ok(id)
    }

    /// All applications, newest first, without document bytes.
    pub async fn list(&self) -> Result<Vec<Application>, PersistenceError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM applications ORDER BY created_at DESC, id DESC",
            APPLICATION_COLUMNS
        ))
        .fetch_all(self.store.pool())
        .await?;

        rows.into_iter().map(row_to_application).collect()
    }

    pub async fn get(&self, id: i64) -> Result<Option<Application>, PersistenceError> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM applications WHERE id = ?",
            APPLICATION_COLUMNS
        ))
        .bind(id)
        .fetch_optional(self.store.pool())
        .await?;

        row.map(row_to_application).transpose()
    }

    /// Unconditional status update by id. Returns rows affected; zero for
    /// an unknown id, which is not an error.
    pub async fn update_status(&self, id: i64, status: &str) -> Result<u64, PersistenceError> {
        let result = sqlx::query("UPDATE applications SET status = ? WHERE id = ?")
            .bind(status)
            .bind(id)
            .execute(self.store.pool())
            .await?;

        Ok(result.rows_affected())
    }

    /// Applications that carry an uploaded document, newest first, capped
    /// at 200, optionally filtered by applicant email.
    pub async fn list_with_files(
        &self,
        email: Option<&str>,
    ) -> Result<Vec<Application>, PersistenceError> {
        let rows = match email {
            Some(email) => {
                sqlx::query(&format!(
                    "SELECT {} FROM applications
                     WHERE file_name IS NOT NULL AND email = ?
                     ORDER BY created_at DESC, id DESC LIMIT ?",
                    APPLICATION_COLUMNS
                ))
                .bind(email)
                .bind(SAVED_FILES_LIMIT)
                .fetch_all(self.store.pool())
                .await?
            }
            None => {
                sqlx::query(&format!(
                    "SELECT {} FROM applications
                     WHERE file_name IS NOT NULL
                     ORDER BY created_at DESC, id DESC LIMIT ?",
                    APPLICATION_COLUMNS
                ))
                .bind(SAVED_FILES_LIMIT)
                .fetch_all(self.store.pool())
                .await?
            }
        };

        rows.into_iter().map(row_to_application).collect()
    }

    /// The uploaded document for an application, byte-exact. `None` when
    /// the application does not exist or has no document.
    pub async fn get_file(&self, id: i64) -> Result<Option<ApplicationFile>, PersistenceError> {
        let row = sqlx::query(
            "SELECT file_name, file_data FROM applications
             WHERE id = ? AND file_name IS NOT NULL AND file_data IS NOT NULL",
        )
        .bind(id)
        .fetch_optional(self.store.pool())
        .await?;

        Ok(row.map(|row| ApplicationFile {
            name: row.get("file_name"),
            data: row.get("file_data"),
        }))
    }
}

fn row_to_application(row: SqliteRow) -> Result<Application, PersistenceError> {
    let details: String = row.get("details");
    let details: BTreeMap<String, String> = serde_json::from_str(&details)
        .map_err(|e| PersistenceError::InvalidData(format!("details column: {}", e)))?;

    Ok(Application {
        id: row.get("id"),
        service_id: row.get("service_id"),
        name: row.get("name"),
        email: row.get("email"),
        phone: row.get("phone"),
        purpose: row.get("purpose"),
        details,
        ticket_number: row.get::<Option<String>, _>("ticket_number").unwrap_or_default(),
        status: row.get("status"),
        file_name: row.get("file_name"),
        created_at: row.get("created_at"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn memory_store() -> SqliteApplicationStore {
        let store = SqliteStore::connect("sqlite::memory:").await.unwrap();
        store.ensure_schema().await.unwrap();
        SqliteApplicationStore::new(store)
    }

    fn sample(ticket: &str) -> NewApplication {
        NewApplication {
            service_id: "health".to_string(),
            name: "Asha".to_string(),
            email: "a@x.com".to_string(),
            phone: Some("9876543210".to_string()),
            purpose: "certificate".to_string(),
            ticket_number: ticket.to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn created_applications_default_to_submitted() {
        let applications = memory_store().await;
        let id = applications.create(&sample("AB12CD34")).await.unwrap();

        let application = applications.get(id).await.unwrap().unwrap();
        assert_eq!(application.status, "Submitted");
        assert_eq!(application.ticket_number, "AB12CD34");
        assert_eq!(application.file_name, None);
    }

    #[tokio::test]
    async fn details_round_trip_through_text_column() {
        let applications = memory_store().await;
        let mut new = sample("DETL0001");
        new.details.insert("ward".to_string(), "12".to_string());
        new.details.insert("priority".to_string(), "high".to_string());

        let id = applications.create(&new).await.unwrap();
        let application = applications.get(id).await.unwrap().unwrap();
        assert_eq!(application.details.get("ward").map(String::as_str), Some("12"));
        assert_eq!(application.details.len(), 2);
    }

    #[tokio::test]
    async fn document_bytes_round_trip_exactly() {
        let applications = memory_store().await;
        let mut new = sample("FILE0001");
        new.file = Some(ApplicationFile {
            name: "proof.pdf".to_string(),
            data: vec![0x25, 0x50, 0x44, 0x46, 0x00, 0xff],
        });

        let id = applications.create(&new).await.unwrap();
        let file = applications.get_file(id).await.unwrap().unwrap();
        assert_eq!(file.name, "proof.pdf");
        assert_eq!(file.data, vec![0x25, 0x50, 0x44, 0x46, 0x00, 0xff]);
    }

    #[tokio::test]
    async fn get_file_without_document_is_none() {
        let applications = memory_store().await;
        let id = applications.create(&sample("NOFL0001")).await.unwrap();
        assert!(applications.get_file(id).await.unwrap().is_none());
        assert!(applications.get_file(9999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn saved_files_filters_by_email() {
        let applications = memory_store().await;

        let mut with_file = sample("FLTR0001");
        with_file.file = Some(ApplicationFile {
            name: "doc.pdf".to_string(),
            data: vec![1, 2, 3],
        });
        applications.create(&with_file).await.unwrap();

        let mut other = sample("FLTR0002");
        other.email = "b@y.com".to_string();
        other.file = Some(ApplicationFile {
            name: "other.pdf".to_string(),
            data: vec![4, 5],
        });
        applications.create(&other).await.unwrap();

        applications.create(&sample("FLTR0003")).await.unwrap();

        let all = applications.list_with_files(None).await.unwrap();
        assert_eq!(all.len(), 2);

        let filtered = applications.list_with_files(Some("b@y.com")).await.unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].file_name.as_deref(), Some("other.pdf"));
    }

    #[tokio::test]
    async fn status_update_on_unknown_id_affects_zero_rows() {
        let applications = memory_store().await;
        assert_eq!(applications.update_status(404, "approved").await.unwrap(), 0);
    }
}
