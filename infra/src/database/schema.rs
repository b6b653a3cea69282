//! Table bootstrap for the OTP ledger and the submission store.

use sqlx::MySqlPool;

use crate::InfrastructureError;

const CREATE_OTP_RECORDS: &str = r#"
    CREATE TABLE IF NOT EXISTS otp_records (
        id CHAR(36) NOT NULL PRIMARY KEY,
        mobile VARCHAR(10) NOT NULL,
        code VARCHAR(16) NOT NULL,
        associated_aadhaar VARCHAR(255) NULL,
        associated_name VARCHAR(255) NULL,
        created_at DATETIME(3) NOT NULL,
        expires_at DATETIME(3) NOT NULL,
        INDEX idx_otp_records_mobile_code (mobile, code),
        INDEX idx_otp_records_expires_at (expires_at)
    ) ENGINE = InnoDB DEFAULT CHARSET = utf8mb4
"#;

// `seq` orders submissions sharing a timestamp by insertion
const CREATE_SUBMISSIONS: &str = r#"
    CREATE TABLE IF NOT EXISTS submissions (
        id CHAR(36) NOT NULL PRIMARY KEY,
        seq BIGINT UNSIGNED NOT NULL AUTO_INCREMENT,
        aadhaar VARCHAR(12) NOT NULL,
        name VARCHAR(100) NOT NULL,
        mobile VARCHAR(10) NOT NULL,
        pan VARCHAR(10) NOT NULL,
        pin VARCHAR(255) NOT NULL DEFAULT '',
        city VARCHAR(255) NOT NULL DEFAULT '',
        state VARCHAR(255) NOT NULL DEFAULT '',
        country VARCHAR(255) NOT NULL DEFAULT '',
        created_at DATETIME(3) NOT NULL,
        UNIQUE KEY uq_submissions_seq (seq),
        INDEX idx_submissions_created_at (created_at)
    ) ENGINE = InnoDB DEFAULT CHARSET = utf8mb4
"#;

/// Create the `otp_records` and `submissions` tables when missing
pub async fn ensure_schema(pool: &MySqlPool) -> Result<(), InfrastructureError> {
    for statement in [CREATE_OTP_RECORDS, CREATE_SUBMISSIONS] {
        sqlx::query(statement).execute(pool).await?;
    }

    tracing::info!("Database schema ready");
    Ok(())
}
