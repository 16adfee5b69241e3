//! In-memory implementation of EmailVerificationRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::email_verification::{EmailVerification, NewEmailVerification};
use crate::errors::DomainError;

use super::trait_::EmailVerificationRepository;

/// In-memory verification rows kept in issue order
pub struct MockEmailVerificationRepository {
    entries: Arc<RwLock<Vec<EmailVerification>>>,
    next_id: AtomicI64,
}

impl MockEmailVerificationRepository {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(Vec::new())),
            next_id: AtomicI64::new(1),
        }
    }

    /// Snapshot of every stored row, for assertions
    pub async fn all(&self) -> Vec<EmailVerification> {
        self.entries.read().await.clone()
    }
}

impl Default for MockEmailVerificationRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmailVerificationRepository for MockEmailVerificationRepository {
    async fn create(&self, entry: NewEmailVerification) -> Result<EmailVerification, DomainError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let entry = entry.into_verification(id);
        self.entries.write().await.push(entry.clone());
        Ok(entry)
    }

    async fn find_matching(
        &self,
        email: &str,
        code: &str,
    ) -> Result<Vec<EmailVerification>, DomainError> {
        let entries = self.entries.read().await;
        Ok(entries
            .iter()
            .filter(|e| e.email == email && e.code_matches(code))
            .cloned()
            .collect())
    }

    async fn mark_consumed(&self, id: i64, at: DateTime<Utc>) -> Result<bool, DomainError> {
        let mut entries = self.entries.write().await;
        match entries.iter_mut().find(|e| e.id == id && e.consumed_at.is_none()) {
            Some(entry) => {
                entry.consumed_at = Some(at);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_expired(&self, before: DateTime<Utc>) -> Result<u64, DomainError> {
        let mut entries = self.entries.write().await;
        let len_before = entries.len();
        entries.retain(|e| e.expires_at >= before);
        Ok((len_before - entries.len()) as u64)
    }
}
