//! MySQL implementation of the EmailVerificationRepository trait.
//!
//! Codes are stored in plaintext next to the address they were sent to. The
//! `(email, code)` index backs the reset lookup and `expires_at` backs the purge.

use async_trait::async_trait;
use chrono::{DateTime, SubsecRound, Utc};
use sqlx::{MySqlPool, Row};

use cr_core::domain::entities::email_verification::{EmailVerification, NewEmailVerification};
use cr_core::errors::DomainError;
use cr_core::repositories::EmailVerificationRepository;

use super::{db_error, inserted_id};

pub struct MySqlEmailVerificationRepository {
    pool: MySqlPool,
}

impl MySqlEmailVerificationRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_verification(row: &sqlx::mysql::MySqlRow) -> Result<EmailVerification, DomainError> {
        Ok(EmailVerification {
            id: row.try_get("id").map_err(db_error("Failed to get id"))?,
            email: row.try_get("email").map_err(db_error("Failed to get email"))?,
            code: row.try_get("code").map_err(db_error("Failed to get code"))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(db_error("Failed to get created_at"))?,
            expires_at: row
                .try_get::<DateTime<Utc>, _>("expires_at")
                .map_err(db_error("Failed to get expires_at"))?,
            consumed_at: row
                .try_get::<Option<DateTime<Utc>>, _>("consumed_at")
                .map_err(db_error("Failed to get consumed_at"))?,
        })
    }
}

#[async_trait]
impl EmailVerificationRepository for MySqlEmailVerificationRepository {
    async fn create(
        &self,
        mut entry: NewEmailVerification,
    ) -> Result<EmailVerification, DomainError> {
        // Match the DATETIME(6) column so the returned row equals a later read
        entry.created_at = entry.created_at.trunc_subsecs(6);
        entry.expires_at = entry.expires_at.trunc_subsecs(6);

        let query = r#"
            INSERT INTO email_verifications (email, code, created_at, expires_at)
            VALUES (?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(&entry.email)
            .bind(&entry.code)
            .bind(entry.created_at)
            .bind(entry.expires_at)
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to store verification code"))?;

        Ok(entry.into_verification(inserted_id(&result)?))
    }

    async fn find_matching(
        &self,
        email: &str,
        code: &str,
    ) -> Result<Vec<EmailVerification>, DomainError> {
        let query = r#"
            SELECT id, email, code, created_at, expires_at, consumed_at
            FROM email_verifications
            WHERE email = ? AND code = ?
            ORDER BY id ASC
        "#;

        let rows = sqlx::query(query)
            .bind(email)
            .bind(code)
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to look up verification code"))?;

        rows.iter().map(Self::row_to_verification).collect()
    }

    async fn mark_consumed(&self, id: i64, at: DateTime<Utc>) -> Result<bool, DomainError> {
        let query = r#"
            UPDATE email_verifications
            SET consumed_at = ?
            WHERE id = ? AND consumed_at IS NULL
        "#;

        let result = sqlx::query(query)
            .bind(at)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to consume verification code"))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_expired(&self, before: DateTime<Utc>) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM email_verifications WHERE expires_at < ?")
            .bind(before)
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to purge verification codes"))?;

        Ok(result.rows_affected())
    }
}
