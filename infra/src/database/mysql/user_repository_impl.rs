//! MySQL implementation of the UserRepository trait.
//!
//! `users.email` carries a binary collation and a unique key, so lookups are
//! exact and a duplicate insert surfaces as a unique violation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};

use cr_core::domain::entities::user::{NewUser, User};
use cr_core::errors::DomainError;
use cr_core::repositories::UserRepository;

use super::{db_error, inserted_id, now_micros, to_count};

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlUserRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to User entity
    fn row_to_user(row: &sqlx::mysql::MySqlRow) -> Result<User, DomainError> {
        Ok(User {
            id: row.try_get("id").map_err(db_error("Failed to get id"))?,
            email: row.try_get("email").map_err(db_error("Failed to get email"))?,
            password_hash: row
                .try_get("password_hash")
                .map_err(db_error("Failed to get password_hash"))?,
            first_name: row
                .try_get("first_name")
                .map_err(db_error("Failed to get first_name"))?,
            last_name: row
                .try_get("last_name")
                .map_err(db_error("Failed to get last_name"))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(db_error("Failed to get created_at"))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(db_error("Failed to get updated_at"))?,
        })
    }

    async fn exists(&self, id: i64) -> Result<bool, DomainError> {
        let row = sqlx::query("SELECT EXISTS(SELECT 1 FROM users WHERE id = ?) AS found")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(db_error("Failed to check user existence"))?;
        let found: i64 = row
            .try_get("found")
            .map_err(db_error("Failed to get existence result"))?;
        Ok(found == 1)
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let query = r#"
            SELECT id, email, password_hash, first_name, last_name, created_at, updated_at
            FROM users
            WHERE email = ?
            LIMIT 1
        "#;

        let row = sqlx::query(query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to find user by email"))?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        let query = r#"
            SELECT id, email, password_hash, first_name, last_name, created_at, updated_at
            FROM users
            WHERE id = ?
        "#;

        let row = sqlx::query(query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("Failed to find user by id"))?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn create(&self, user: NewUser) -> Result<User, DomainError> {
        let query = r#"
            INSERT INTO users (email, password_hash, first_name, last_name, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
        "#;

        let now = now_micros();
        let result = sqlx::query(query)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(&user.first_name)
            .bind(&user.last_name)
            .bind(now)
            .bind(now)
            .execute(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(ref db) if db.is_unique_violation() => DomainError::Conflict {
                    message: "Email already registered".to_string(),
                },
                other => db_error("Failed to create user")(other),
            })?;

        Ok(user.into_user(inserted_id(&result)?, now))
    }

    async fn update_password(&self, id: i64, password_hash: &str) -> Result<bool, DomainError> {
        let query = r#"
            UPDATE users
            SET password_hash = ?, updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(password_hash)
            .bind(now_micros())
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to update password"))?;

        // MySQL reports zero affected rows when nothing changed
        if result.rows_affected() > 0 {
            return Ok(true);
        }
        self.exists(id).await
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to delete user"))?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<u64, DomainError> {
        let row = sqlx::query("SELECT COUNT(*) AS total FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(db_error("Failed to count users"))?;

        let total: i64 = row.try_get("total").map_err(db_error("Failed to get total"))?;
        Ok(to_count(total))
    }
}
