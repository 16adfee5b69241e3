//! Outbound mail configuration

use serde::{Deserialize, Serialize};

/// SMTP relay settings shared by every outgoing message
#[derive(Clone, Deserialize, Serialize)]
pub struct MailConfig {
    /// Mail provider ("smtp" or "mock")
    #[serde(default = "default_provider")]
    pub provider: String,

    /// SMTP relay host, contacted over implicit TLS
    pub smtp_host: String,

    /// SMTP relay port
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,

    /// SMTP username
    #[serde(default)]
    pub username: String,

    /// SMTP password
    #[serde(default)]
    pub password: String,

    /// Sender address used in the From header
    pub from_address: String,

    /// Upper bound for a single dispatch, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            smtp_host: String::from("smtp.example.com"),
            smtp_port: default_smtp_port(),
            username: String::new(),
            password: String::new(),
            from_address: String::from("no-reply@example.com"),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl MailConfig {
    /// Log codes instead of sending them
    pub fn development() -> Self {
        Self {
            provider: String::from("mock"),
            ..Default::default()
        }
    }

    /// Whether the real relay is configured
    pub fn is_smtp(&self) -> bool {
        self.provider == "smtp"
    }
}

// Keep the password out of Debug output
impl std::fmt::Debug for MailConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MailConfig")
            .field("provider", &self.provider)
            .field("smtp_host", &self.smtp_host)
            .field("smtp_port", &self.smtp_port)
            .field("username", &self.username)
            .field("password", &"***")
            .field("from_address", &self.from_address)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

fn default_provider() -> String {
    String::from("smtp")
}

fn default_smtp_port() -> u16 {
    465
}

fn default_timeout_secs() -> u64 {
    10
}
