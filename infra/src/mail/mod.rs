//! Mail Service Module
//!
//! Outbound mail for verification codes. The SMTP implementation relays through
//! a fixed host over implicit TLS; the mock records messages in memory and logs
//! them, for development and tests.

use std::sync::Arc;

use cr_core::services::MailServiceTrait;
use cr_shared::MailConfig;

use crate::InfrastructureError;

pub mod mock_mail;
pub mod smtp;

pub use mock_mail::{MockMailService, SentMail};
pub use smtp::SmtpMailService;


/// Build the mail service named by `config.provider`
///
/// `"smtp"` needs a parseable sender address and host; `"mock"` never fails.
pub fn create_mail_service(
    config: &MailConfig,
) -> Result<Arc<dyn MailServiceTrait>, InfrastructureError> {
    match config.provider.as_str() {
        "smtp" => {
            let service = SmtpMailService::new(config)?;
            tracing::info!(
                host = %config.smtp_host,
                port = config.smtp_port,
                event = "mail_service_ready",
                "Using SMTP mail service"
            );
            Ok(Arc::new(service))
        }
        "mock" => {
            tracing::warn!(event = "mail_service_ready", "Using mock mail service; nothing is delivered");
            Ok(Arc::new(MockMailService::new()))
        }
        other => Err(InfrastructureError::Config(format!(
            "Unknown mail provider: {}",
            other
        ))),
    }
}
