//! Services reference data
//!
//! Static lookup table of government departments. Seeded once at startup
//! and read-only at runtime.

use serde::Serialize;
use sqlx::FromRow;

use crate::{PersistenceError, SqliteStore};

/// A government service a citizen can apply to.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Service {
    pub service_id: String,
    pub title: String,
    pub details: String,
}

#[derive(Clone)]
pub struct SqliteServiceStore {
    store: SqliteStore,
}

impl SqliteServiceStore {
    pub fn new(store: SqliteStore) -> Self {
        Self { store }
    }

    /// Insert reference rows, ignoring ones already present. Returns the
    /// number of rows actually inserted.
    pub async fn seed(&self, services: &[Service]) -> Result<u64, PersistenceError> {
        let mut inserted = 0;
        for service in services {
            let result = sqlx::query(
                "INSERT OR IGNORE INTO services (service_id, title, details) VALUES (?, ?, ?)",
            )
            .bind(&service.service_id)
            .bind(&service.title)
            .bind(&service.details)
            .execute(self.store.pool())
            .await?;
            inserted += result.rows_affected();
        }
        Ok(inserted)
    }

    pub async fn list(&self) -> Result<Vec<Service>, PersistenceError> {
        let services = sqlx::query_as::<_, Service>(
            "SELECT service_id, title, details FROM services ORDER BY service_id ASC",
        )
        .fetch_all(self.store.pool())
        .await?;

        Ok(services)
    }

    pub async fn get(&self, service_id: &str) -> Result<Option<Service>, PersistenceError> {
        let service = sqlx::query_as::<_, Service>(
            "SELECT service_id, title, details FROM services WHERE service_id = ?",
        )
        .bind(service_id)
        .fetch_optional(self.store.pool())
        .await?;

        Ok(service)
    }

    /// Existence pre-check used before inserting an application.
    pub async fn exists(&self, service_id: &str) -> Result<bool, PersistenceError> {
        Ok(self.get(service_id).await?.is_some())
    }
}

fn service(service_id: &str, title: &str, details: &str) -> Service {
    Service {
        service_id: service_id.to_string(),
        title: title.to_string(),
        details: details.to_string(),
    }
}

/// The seeded department catalogue.
pub fn default_services() -> Vec<Service> {
    vec![
        service(
            "revenue",
            "Revenue Department",
            "- Land Records: View and download your land ownership details.\n\
             - Property Registration: Apply for and track property registration.\n\
             - Income Certificates: Apply for income certificates.\n\
             - Fee: ₹50-₹500 depending on service.\n\
             - Processing Time: 3-7 working days.\n\
             - Contact: revenue-office@state.gov.in",
        ),
        service(
            "municipal",
            "Municipal Services",
            "- Property Tax: Pay or check outstanding property taxes.\n\
             - Water Supply: Apply for new connection or complaints.\n\
             - Waste Management: Report uncollected garbage.\n\
             - Fee: Variable.\n\
             - Processing Time: 2-5 working days.\n\
             - Contact: municipal-corporation@city.gov.in",
        ),
        service(
            "health",
            "Health Department",
            "- Medical Certificates: Apply for medical fitness/disability certificates.\n\
             - Vaccination Records: Check immunization details.\n\
             - Health Schemes: Learn about state and central health schemes.\n\
             - Fee: Free for most services.\n\
             - Processing Time: Immediate to 3 days.\n\
             - Contact: health-dept@state.gov.in",
        ),
        service(
            "education",
            "Education Department",
            "- School Admissions: Apply for government and aided schools.\n\
             - Scholarships: Check eligibility and apply online.\n\
             - Educational Certificates: Duplicate or verification services.\n\
             - Fee: Free or nominal.\n\
             - Processing Time: 5-10 working days.\n\
             - Contact: edu-dept@state.gov.in",
        ),
        service(
            "social_welfare",
            "Social Welfare Department",
            "- Pension Schemes: Apply for old-age or widow pensions.\n\
             - Disability Certificates: Required for welfare benefits.\n\
             - Welfare Programs: State-funded benefits for underprivileged groups.\n\
             - Fee: Free.\n\
             - Processing Time: 7-15 working days.\n\
             - Contact: socialwelfare@state.gov.in",
        ),
        service(
            "agriculture",
            "Agriculture Department",
            "- Farmer Registration: Register for crop benefits.\n\
             - Subsidies: Apply for fertilizer, seed, and equipment subsidies.\n\
             - Crop Insurance: Apply and check claim status.\n\
             - Fee: Free to nominal.\n\
             - Processing Time: 5-7 working days.\n\
             - Contact: agri-dept@state.gov.in",
        ),
    ]
}
