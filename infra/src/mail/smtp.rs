//! SMTP mail delivery through lettre.

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use std::time::Duration;
use uuid::Uuid;

use cr_core::services::MailServiceTrait;
use cr_shared::utils::mask_email;
use cr_shared::MailConfig;

use crate::InfrastructureError;

/// Sends plain-text mail via an authenticated SMTPS relay
///
/// Each send opens its own connection; the whole exchange is bounded by
/// `mail.timeout_secs`.
pub struct SmtpMailService {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    timeout: Duration,
}

impl SmtpMailService {
    pub fn new(config: &MailConfig) -> Result<Self, InfrastructureError> {
        let from: Mailbox = config.from_address.parse().map_err(|e| {
            InfrastructureError::Config(format!("Invalid mail.from_address: {}", e))
        })?;
        let timeout = Duration::from_secs(config.timeout_secs);

        // `relay` wraps the connection in TLS from the first byte
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)
            .map_err(|e| InfrastructureError::Config(format!("Invalid mail.smtp_host: {}", e)))?
            .port(config.smtp_port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .timeout(Some(timeout))
            .build();

        Ok(Self {
            transport,
            from,
            timeout,
        })
    }

    fn build_message(
        &self,
        recipient: &str,
        subject: &str,
        body: &str,
        message_id: &str,
    ) -> Result<Message, InfrastructureError> {
        let to: Mailbox = recipient
            .parse()
            .map_err(|e| InfrastructureError::Mail(format!("Invalid recipient: {}", e)))?;

        Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(subject)
            .message_id(Some(message_id.to_string()))
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())
            .map_err(|e| InfrastructureError::Mail(format!("Failed to build message: {}", e)))
    }

    async fn deliver(&self, message: Message) -> Result<(), InfrastructureError> {
        match tokio::time::timeout(self.timeout, self.transport.send(message)).await {
            Ok(Ok(_response)) => Ok(()),
            Ok(Err(e)) => Err(InfrastructureError::Mail(e.to_string())),
            Err(_) => Err(InfrastructureError::Mail(format!(
                "SMTP delivery timed out after {}s",
                self.timeout.as_secs()
            ))),
        }
    }
}

#[async_trait]
impl MailServiceTrait for SmtpMailService {
    async fn send(&self, recipient: &str, subject: &str, body: &str) -> Result<String, String> {
        let message_id = format!("<{}@{}>", Uuid::new_v4(), self.from.email.domain());
        let masked = mask_email(recipient);

        let result = match self.build_message(recipient, subject, body, &message_id) {
            Ok(message) => self.deliver(message).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(()) => {
                tracing::info!(
                    provider = "smtp",
                    email = %masked,
                    message_id = %message_id,
                    event = "mail_sent",
                    "Mail delivered to relay"
                );
                Ok(message_id)
            }
            Err(e) => {
                tracing::error!(
                    provider = "smtp",
                    email = %masked,
                    error = %e,
                    event = "mail_failed",
                    "Mail delivery failed"
                );
                Err(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> MailConfig {
        MailConfig {
            smtp_host: "smtp.example.com".to_string(),
            from_address: "CityReport <noreply@example.com>".to_string(),
            ..MailConfig::default()
        }
    }

    #[tokio::test]
    async fn test_new_accepts_display_name_sender() {
        let service = SmtpMailService::new(&config()).unwrap();
        assert_eq!(service.from.email.to_string(), "noreply@example.com");
        assert_eq!(service.timeout, Duration::from_secs(10));
    }

    #[tokio::test]
    async fn test_new_rejects_bad_sender() {
        let config = MailConfig {
            from_address: "not an address".to_string(),
            ..config()
        };
        assert!(matches!(
            SmtpMailService::new(&config),
            Err(InfrastructureError::Config(_))
        ));
    }

    #[tokio::test]
    async fn test_bad_recipient_fails_before_network() {
        let service = SmtpMailService::new(&config()).unwrap();
        let result = service.send("nobody", "Subject", "Body").await;
        assert!(result.unwrap_err().contains("Invalid recipient"));
    }

    #[tokio::test]
    async fn test_build_message_sets_headers() {
        let service = SmtpMailService::new(&config()).unwrap();
        let message = service
            .build_message("resident@example.com", "Your verification code", "123456", "<id@example.com>")
            .unwrap();
        let formatted = String::from_utf8(message.formatted()).unwrap();
        assert!(formatted.contains("Subject: Your verification code"));
        assert!(formatted.contains("Message-ID: <id@example.com>"));
        assert!(formatted.contains("123456"));
    }
}
