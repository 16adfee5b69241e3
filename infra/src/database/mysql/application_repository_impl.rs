//! MySQL implementation of the ApplicationRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};

use cr_core::domain::entities::application::{Application, NewApplication};
use cr_core::errors::DomainError;
use cr_core::repositories::ApplicationRepository;
use cr_shared::PageRequest;

use super::{db_error, inserted_id, now_micros, to_count};

const SELECT_COLUMNS: &str = r#"
    SELECT id, phone_number, photo, longitude, latitude, description, status, created_at
    FROM applications
"#;

/// MySQL implementation of ApplicationRepository
///
/// `applications.status` uses a binary collation, so filtering on
/// `Completed` never matches `completed`.
pub struct MySqlApplicationRepository {
    pool: MySqlPool,
}

impl MySqlApplicationRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_application(row: &sqlx::mysql::MySqlRow) -> Result<Application, DomainError> {
        Ok(Application {
            id: row.try_get("id").map_err(db_error("Failed to get id"))?,
            phone_number: row
                .try_get("phone_number")
                .map_err(db_error("Failed to get phone_number"))?,
            photo: row.try_get("photo").map_err(db_error("Failed to get photo"))?,
            longitude: row
                .try_get("longitude")
                .map_err(db_error("Failed to get longitude"))?,
            latitude: row
                .try_get("latitude")
                .map_err(db_error("Failed to get latitude"))?,
            description: row
                .try_get("description")
                .map_err(db_error("Failed to get description"))?,
            status: row.try_get("status").map_err(db_error("Failed to get status"))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(db_error("Failed to get created_at"))?,
        })
    }
}

#[async_trait]
impl ApplicationRepository for MySqlApplicationRepository {
    async fn create(&self, application: NewApplication) -> Result<Application, DomainError> {
        let query = r#"
            INSERT INTO applications (
                phone_number, photo, longitude, latitude, description, status, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?)
        "#;

        let created_at = now_micros();
        let result = sqlx::query(query)
            .bind(&application.phone_number)
            .bind(&application.photo)
            .bind(application.longitude)
            .bind(application.latitude)
            .bind(&application.description)
            .bind(&application.status)
            .bind(created_at)
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to create application"))?;

        Ok(application.into_application(inserted_id(&result)?, created_at))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Application>, DomainError> {
        let query = format!("{} WHERE id = ?", SELECT_COLUMNS);

        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to find application"))?;

        row.as_ref().map(Self::row_to_application).transpose()
    }

    async fn list(
        &self,
        status: Option<&str>,
        page: PageRequest,
    ) -> Result<Vec<Application>, DomainError> {
        let query = format!(
            "{} WHERE (? IS NULL OR status = ?) ORDER BY id ASC LIMIT ? OFFSET ?",
            SELECT_COLUMNS
        );

        let rows = sqlx::query(&query)
            .bind(status)
            .bind(status)
            .bind(page.limit_i64())
            .bind(page.offset_i64())
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("Failed to list applications"))?;

        rows.iter().map(Self::row_to_application).collect()
    }

    async fn update_status(
        &self,
        id: i64,
        status: &str,
    ) -> Result<Option<Application>, DomainError> {
        // Zero affected rows is ambiguous on MySQL (missing id or same status),
        // so the re-read decides
        sqlx::query("UPDATE applications SET status = ? WHERE id = ?")
            .bind(status)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to update application status"))?;

        self.find_by_id(id).await
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM applications WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to delete application"))?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self, status: Option<&str>) -> Result<u64, DomainError> {
        let row = sqlx::query(
            "SELECT COUNT(*) AS total FROM applications WHERE (? IS NULL OR status = ?)",
        )
        .bind(status)
        .bind(status)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("Failed to count applications"))?;

        let total: i64 = row.try_get("total").map_err(db_error("Failed to get total"))?;
        Ok(to_count(total))
    }
}
