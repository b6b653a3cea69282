//! MySQL implementation of the OtpRepository trait.
//!
//! Verification runs in a transaction: the oldest live match is locked with
//! `SELECT ... FOR UPDATE` and deleted before commit, so a concurrent
//! verification of the same code blocks and then finds nothing.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use tracing::{debug, error};
use uuid::Uuid;

use kyc_core::domain::entities::OtpRecord;
use kyc_core::errors::DomainError;
use kyc_core::repositories::OtpRepository;
use kyc_shared::phone::mask_mobile;

/// MySQL implementation of OtpRepository
pub struct MySqlOtpRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlOtpRepository {
    /// Create a new MySQL OTP repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to OtpRecord entity
    fn row_to_record(row: &sqlx::mysql::MySqlRow) -> Result<OtpRecord, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::storage(format!("Failed to get id: {}", e)))?;

        Ok(OtpRecord {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::storage(format!("Invalid OTP record UUID: {}", e)))?,
            mobile: row
                .try_get("mobile")
                .map_err(|e| DomainError::storage(format!("Failed to get mobile: {}", e)))?,
            code: row
                .try_get("code")
                .map_err(|e| DomainError::storage(format!("Failed to get code: {}", e)))?,
            associated_aadhaar: row.try_get("associated_aadhaar").map_err(|e| {
                DomainError::storage(format!("Failed to get associated_aadhaar: {}", e))
            })?,
            associated_name: row.try_get("associated_name").map_err(|e| {
                DomainError::storage(format!("Failed to get associated_name: {}", e))
            })?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::storage(format!("Failed to get created_at: {}", e)))?,
            expires_at: row
                .try_get::<DateTime<Utc>, _>("expires_at")
                .map_err(|e| DomainError::storage(format!("Failed to get expires_at: {}", e)))?,
        })
    }
}

#[async_trait]
impl OtpRepository for MySqlOtpRepository {
    async fn insert(&self, record: &OtpRecord) -> Result<(), DomainError> {
        let query = r#"
            INSERT INTO otp_records (
                id, mobile, code, associated_aadhaar, associated_name,
                created_at, expires_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(record.id.to_string())
            .bind(&record.mobile)
            .bind(&record.code)
            .bind(&record.associated_aadhaar)
            .bind(&record.associated_name)
            .bind(record.created_at)
            .bind(record.expires_at)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(
                    mobile = %mask_mobile(&record.mobile),
                    error = %e,
                    "Failed to store OTP record"
                );
                DomainError::storage(format!("Failed to store OTP record: {}", e))
            })?;

        Ok(())
    }

    async fn take_valid(
        &self,
        mobile: &str,
        code: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<OtpRecord>, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::storage(format!("Failed to begin transaction: {}", e)))?;

        let query = r#"
            SELECT id, mobile, code, associated_aadhaar, associated_name,
                   created_at, expires_at
            FROM otp_records
            WHERE mobile = ? AND code = ? AND expires_at > ?
            ORDER BY created_at ASC
            LIMIT 1
            FOR UPDATE
        "#;

        let row = sqlx::query(query)
            .bind(mobile)
            .bind(code)
            .bind(now)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to look up OTP record: {}", e)))?;

        let record = match row {
            Some(row) => Self::row_to_record(&row)?,
            None => {
                debug!(mobile = %mask_mobile(mobile), "No live OTP record matched");
                return Ok(None);
            }
        };

        // Column collation may ignore trailing spaces; require an exact match
        if !record.matches(mobile, code) {
            return Ok(None);
        }

        let deleted = sqlx::query("DELETE FROM otp_records WHERE id = ?")
            .bind(record.id.to_string())
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to consume OTP record: {}", e)))?;

        tx.commit()
            .await
            .map_err(|e| DomainError::storage(format!("Failed to commit transaction: {}", e)))?;

        if deleted.rows_affected() == 1 {
            Ok(Some(record))
        } else {
            Ok(None)
        }
    }

    async fn purge_expired(&self, now: DateTime<Utc>) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM otp_records WHERE expires_at <= ?")
            .bind(now)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to purge OTP records: {}", e)))?;

        Ok(result.rows_affected())
    }

    async fn count_live(&self, mobile: &str, now: DateTime<Utc>) -> Result<u64, DomainError> {
        let row = sqlx::query(
            "SELECT COUNT(*) AS live FROM otp_records WHERE mobile = ? AND expires_at > ?",
        )
        .bind(mobile)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to count OTP records: {}", e)))?;

        let live: i64 = row
            .try_get("live")
            .map_err(|e| DomainError::storage(format!("Failed to get count: {}", e)))?;

        Ok(live.max(0) as u64)
    }
}
