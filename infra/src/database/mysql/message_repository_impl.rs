//! MySQL implementation of the MessageRepository trait.
//!
//! The body lives in the `message` column.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};

use cr_core::domain::entities::message::{Message, NewMessage};
use cr_core::errors::DomainError;
use cr_core::repositories::MessageRepository;

use super::{db_error, inserted_id, now_micros};

pub struct MySqlMessageRepository {
    pool: MySqlPool,
}

impl MySqlMessageRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_message(row: &sqlx::mysql::MySqlRow) -> Result<Message, DomainError> {
        Ok(Message {
            id: row.try_get("id").map_err(db_error("Failed to get id"))?,
            phone_number: row
                .try_get("phone_number")
                .map_err(db_error("Failed to get phone_number"))?,
            name: row.try_get("name").map_err(db_error("Failed to get name"))?,
            body: row.try_get("message").map_err(db_error("Failed to get message"))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(db_error("Failed to get created_at"))?,
        })
    }
}

#[async_trait]
impl MessageRepository for MySqlMessageRepository {
    async fn create(&self, message: NewMessage) -> Result<Message, DomainError> {
        let query = r#"
            INSERT INTO messages (phone_number, name, message, created_at)
            VALUES (?, ?, ?, ?)
        "#;

        let created_at = now_micros();
        let result = sqlx::query(query)
            .bind(&message.phone_number)
            .bind(&message.name)
            .bind(&message.body)
            .bind(created_at)
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to create message"))?;

        Ok(message.into_message(inserted_id(&result)?, created_at))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Message>, DomainError> {
        let row = sqlx::query(
            "SELECT id, phone_number, name, message, created_at FROM messages WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Failed to find message"))?;

        row.as_ref().map(Self::row_to_message).transpose()
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM messages WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_error("Failed to delete message"))?;

        Ok(result.rows_affected() > 0)
    }
}
