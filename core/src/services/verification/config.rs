//! Configuration for the verification service

use cr_shared::VerificationConfig;

use crate::domain::entities::email_verification::DEFAULT_EXPIRATION_SECONDS;

/// Configuration for the verification service
#[derive(Debug, Clone)]
pub struct VerificationServiceConfig {
    /// Seconds a code stays valid after issue
    pub code_ttl_seconds: i64,
    /// Refuse a code once it has authorized a reset
    pub single_use_codes: bool,
    /// Subject line of the code email
    pub mail_subject: String,
}

impl Default for VerificationServiceConfig {
    fn default() -> Self {
        Self {
            code_ttl_seconds: DEFAULT_EXPIRATION_SECONDS,
            single_use_codes: false,
            mail_subject: String::from("Your verification code"),
        }
    }
}

impl From<&VerificationConfig> for VerificationServiceConfig {
    fn from(config: &VerificationConfig) -> Self {
        Self {
            code_ttl_seconds: config.code_ttl_seconds,
            single_use_codes: config.single_use_codes,
            mail_subject: config.mail_subject.clone(),
        }
    }
}
