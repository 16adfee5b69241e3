use async_trait::async_trait;

use crate::domain::entities::message::{Message, NewMessage};
use crate::errors::DomainError;

/// Persistence operations for contact-form messages
#[async_trait]
pub trait MessageRepository: Send + Sync {
    async fn create(&self, message: NewMessage) -> Result<Message, DomainError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Message>, DomainError>;

    /// Returns `false` if there was nothing to delete
    async fn delete(&self, id: i64) -> Result<bool, DomainError>;
}
