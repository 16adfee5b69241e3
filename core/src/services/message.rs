//! Contact-form messages.

use std::sync::Arc;

use crate::domain::entities::message::{Message, NewMessage};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::MessageRepository;

pub struct MessageService<M: MessageRepository + ?Sized> {
    repository: Arc<M>,
}

impl<M: MessageRepository + ?Sized> MessageService<M> {
    pub fn new(repository: Arc<M>) -> Self {
        Self { repository }
    }

    pub async fn create(&self, message: NewMessage) -> DomainResult<Message> {
        message.validate()?;
        let message = self.repository.create(message).await?;
        tracing::info!(message_id = message.id, event = "message_created", "Message received");
        Ok(message)
    }

    pub async fn get(&self, id: i64) -> DomainResult<Message> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Message"))
    }

    pub async fn delete(&self, id: i64) -> DomainResult<()> {
        if !self.repository.delete(id).await? {
            return Err(DomainError::not_found("Message"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ValidationError;
    use crate::repositories::MockMessageRepository;

    fn new_message(name: &str) -> NewMessage {
        NewMessage {
            phone_number: "+79001112233".to_string(),
            name: name.to_string(),
            body: "The bus stop roof leaks".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_get_delete() {
        let service = MessageService::new(Arc::new(MockMessageRepository::new()));

        let created = service.create(new_message("Irina")).await.unwrap();
        assert_eq!(service.get(created.id).await.unwrap(), created);

        service.delete(created.id).await.unwrap();
        assert!(matches!(service.get(created.id).await, Err(DomainError::NotFound { .. })));
        assert!(matches!(service.delete(created.id).await, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_create_validates() {
        let service = MessageService::new(Arc::new(MockMessageRepository::new()));

        assert!(matches!(
            service.create(new_message("")).await,
            Err(DomainError::ValidationErr(ValidationError::RequiredField { .. }))
        ));
        assert!(matches!(
            service.create(new_message(&"n".repeat(101))).await,
            Err(DomainError::ValidationErr(ValidationError::InvalidLength { .. }))
        ));
    }
}
