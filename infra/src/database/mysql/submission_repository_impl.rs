//! MySQL implementation of the SubmissionRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use tracing::error;
use uuid::Uuid;

use kyc_core::domain::entities::SubmissionRecord;
use kyc_core::errors::DomainError;
use kyc_core::repositories::SubmissionRepository;

/// MySQL implementation of SubmissionRepository
pub struct MySqlSubmissionRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlSubmissionRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_submission(row: &sqlx::mysql::MySqlRow) -> Result<SubmissionRecord, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::storage(format!("Failed to get id: {}", e)))?;
        let text = |column: &str| -> Result<String, DomainError> {
            row.try_get(column)
                .map_err(|e| DomainError::storage(format!("Failed to get {}: {}", column, e)))
        };

        Ok(SubmissionRecord {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::storage(format!("Invalid submission UUID: {}", e)))?,
            identity_number: text("aadhaar")?,
            name: text("name")?,
            mobile: text("mobile")?,
            tax_id: text("pan")?,
            postal_code: text("pin")?,
            city: text("city")?,
            state: text("state")?,
            country: text("country")?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::storage(format!("Failed to get created_at: {}", e)))?,
        })
    }
}

#[async_trait]
impl SubmissionRepository for MySqlSubmissionRepository {
    async fn insert(&self, record: &SubmissionRecord) -> Result<(), DomainError> {
        let query = r#"
            INSERT INTO submissions (
                id, aadhaar, name, mobile, pan, pin, city, state, country, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(record.id.to_string())
            .bind(&record.identity_number)
            .bind(&record.name)
            .bind(&record.mobile)
            .bind(&record.tax_id)
            .bind(&record.postal_code)
            .bind(&record.city)
            .bind(&record.state)
            .bind(&record.country)
            .bind(record.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(submission_id = %record.id, error = %e, "Failed to insert submission");
                DomainError::storage(format!("Failed to save submission: {}", e))
            })?;

        Ok(())
    }

    async fn list_recent(&self, limit: usize) -> Result<Vec<SubmissionRecord>, DomainError> {
        let query = r#"
            SELECT id, aadhaar, name, mobile, pan, pin, city, state, country, created_at
            FROM submissions
            ORDER BY created_at DESC, seq DESC
            LIMIT ?
        "#;

        let rows = sqlx::query(query)
            .bind(limit as u64)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to fetch submissions: {}", e)))?;

        rows.iter().map(Self::row_to_submission).collect()
    }

    async fn count(&self) -> Result<u64, DomainError> {
        let row = sqlx::query("SELECT COUNT(*) AS total FROM submissions")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to count submissions: {}", e)))?;

        let total: i64 = row
            .try_get("total")
            .map_err(|e| DomainError::storage(format!("Failed to get count: {}", e)))?;

        Ok(total.max(0) as u64)
    }
}
