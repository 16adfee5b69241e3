//! In-memory implementation of MessageRepository

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::message::{Message, NewMessage};
use crate::errors::DomainError;

use super::trait_::MessageRepository;

pub struct MockMessageRepository {
    messages: Arc<RwLock<HashMap<i64, Message>>>,
    next_id: AtomicI64,
}

impl MockMessageRepository {
    pub fn new() -> Self {
        Self {
            messages: Arc::new(RwLock::new(HashMap::new())),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for MockMessageRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MessageRepository for MockMessageRepository {
    async fn create(&self, message: NewMessage) -> Result<Message, DomainError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let message = message.into_message(id, Utc::now());
        self.messages.write().await.insert(id, message.clone());
        Ok(message)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Message>, DomainError> {
        Ok(self.messages.read().await.get(&id).cloned())
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        Ok(self.messages.write().await.remove(&id).is_some())
    }
}
