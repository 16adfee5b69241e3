//! Mock implementations for testing verification service

use async_trait::async_trait;
use chrono::{DateTime, Duration, Local, Utc};
use mockable::Clock;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use crate::domain::entities::user::{NewUser, User};
use crate::errors::DomainError;
use crate::repositories::{MockUserRepository, UserRepository};
use crate::services::verification::traits::MailServiceTrait;

/// A sent email as seen by the mock transport
#[derive(Debug, Clone)]
pub struct SentMail {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

// Mock mail service for testing
pub struct MockMailService {
    pub sent: Arc<Mutex<Vec<SentMail>>>,
    pub should_fail: bool,
}

impl MockMailService {
    pub fn new(should_fail: bool) -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            should_fail,
        }
    }

    /// Code from the most recent mail to `recipient`
    pub fn last_code_for(&self, recipient: &str) -> Option<String> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|m| m.recipient == recipient)
            .and_then(|m| m.body.rsplit(' ').next().map(str::to_string))
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl MailServiceTrait for MockMailService {
    async fn send(&self, recipient: &str, subject: &str, body: &str) -> Result<String, String> {
        if self.should_fail {
            return Err("SMTP relay unavailable".to_string());
        }
        self.sent.lock().unwrap().push(SentMail {
            recipient: recipient.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        });
        Ok(format!("mock-mail-{}", self.sent_count()))
    }
}

/// Clock that only moves when told to
pub struct MutableClock(Mutex<DateTime<Utc>>);

impl MutableClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self(Mutex::new(now))
    }

    pub fn set(&self, now: DateTime<Utc>) {
        *self.0.lock().unwrap() = now;
    }

    pub fn advance_seconds(&self, seconds: i64) {
        *self.0.lock().unwrap() += Duration::seconds(seconds);
    }
}

impl Clock for MutableClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *self.0.lock().unwrap()
    }
}

/// User store whose password writes can be made to fail
#[derive(Default)]
pub struct FlakyUserRepository {
    pub inner: MockUserRepository,
    pub fail_password_updates: AtomicBool,
}

impl FlakyUserRepository {
    pub fn set_failing(&self, failing: bool) {
        self.fail_password_updates.store(failing, Ordering::SeqCst);
    }
}

#[async_trait]
impl UserRepository for FlakyUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        self.inner.find_by_email(email).await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        self.inner.find_by_id(id).await
    }

    async fn create(&self, user: NewUser) -> Result<User, DomainError> {
        self.inner.create(user).await
    }

    async fn update_password(&self, id: i64, password_hash: &str) -> Result<bool, DomainError> {
        if self.fail_password_updates.load(Ordering::SeqCst) {
            return Err(DomainError::internal("password write failed"));
        }
        self.inner.update_password(id, password_hash).await
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        self.inner.delete(id).await
    }

    async fn count(&self) -> Result<u64, DomainError> {
        self.inner.count().await
    }
}
