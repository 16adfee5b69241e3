//! Mock Mail Service Implementation
//!
//! Records every message in memory and logs it instead of contacting a relay.
//! Used when `mail.provider = "mock"` and by the HTTP integration tests, which
//! read the issued code back out of the outbox.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tracing::{info, warn};

use cr_core::services::MailServiceTrait;
use cr_shared::utils::mask_email;

/// A message captured by [`MockMailService`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMail {
    pub message_id: String,
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

/// Mock mail service for development and testing
///
/// Clones share the same outbox and counters.
#[derive(Clone, Default)]
pub struct MockMailService {
    outbox: Arc<Mutex<Vec<SentMail>>>,
    message_count: Arc<AtomicU64>,
    simulate_failure: Arc<AtomicBool>,
}

impl MockMailService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent sends fail (or succeed again)
    pub fn set_simulate_failure(&self, simulate: bool) {
        self.simulate_failure.store(simulate, Ordering::SeqCst);
    }

    /// Get the total number of messages sent
    pub fn get_message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }

    /// Snapshot of everything sent so far, oldest first
    pub fn sent(&self) -> Vec<SentMail> {
        self.outbox
            .lock()
            .map(|outbox| outbox.clone())
            .unwrap_or_default()
    }

    /// The six-digit code in the most recent message to `recipient`
    pub fn last_code_for(&self, recipient: &str) -> Option<String> {
        self.sent()
            .into_iter()
            .rev()
            .find(|mail| mail.recipient == recipient)
            .and_then(|mail| {
                mail.body
                    .split(|c: char| !c.is_ascii_digit())
                    .find(|part| part.len() == 6)
                    .map(str::to_string)
            })
    }
}

#[async_trait]
impl MailServiceTrait for MockMailService {
    async fn send(&self, recipient: &str, subject: &str, body: &str) -> Result<String, String> {
        let masked = mask_email(recipient);

        if self.simulate_failure.load(Ordering::SeqCst) {
            warn!(provider = "mock", email = %masked, event = "mail_failed", "Mock mail service simulating failure");
            return Err("Simulated mail delivery failure".to_string());
        }

        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;
        let message_id = format!("mock_{}", count);

        self.outbox
            .lock()
            .map_err(|_| "Mock outbox lock poisoned".to_string())?
            .push(SentMail {
                message_id: message_id.clone(),
                recipient: recipient.to_string(),
                subject: subject.to_string(),
                body: body.to_string(),
            });

        // The body is logged so codes can be used in development
        info!(
            target: "mail_service",
            provider = "mock",
            email = %masked,
            message_id = %message_id,
            body = %body,
            event = "mail_sent",
            "Mock mail recorded"
        );

        Ok(message_id)
    }
}
