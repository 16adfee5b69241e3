//! Traits for outbound mail integration

use async_trait::async_trait;

/// Trait for mail transport integration
#[async_trait]
pub trait MailServiceTrait: Send + Sync {
    /// Send a plain-text message, returning a transport message id
    async fn send(&self, recipient: &str, subject: &str, body: &str) -> Result<String, String>;
}
