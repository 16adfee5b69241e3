//! Password hashing and email verification code configuration

use serde::{Deserialize, Serialize};

/// Credential and verification settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// bcrypt work factor
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,

    /// Email verification code policy
    #[serde(default)]
    pub verification: VerificationConfig,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            bcrypt_cost: default_bcrypt_cost(),
            verification: VerificationConfig::default(),
        }
    }
}

/// Email verification code policy
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VerificationConfig {
    /// Lifetime of an issued code in seconds
    #[serde(default = "default_code_ttl_seconds")]
    pub code_ttl_seconds: i64,

    /// Reject a code once it has been used for a password reset
    #[serde(default)]
    pub single_use_codes: bool,

    /// Subject line of the code email
    #[serde(default = "default_mail_subject")]
    pub mail_subject: String,

    /// Interval between purges of expired codes, 0 disables the job
    #[serde(default)]
    pub purge_interval_secs: u64,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            code_ttl_seconds: default_code_ttl_seconds(),
            single_use_codes: false,
            mail_subject: default_mail_subject(),
            purge_interval_secs: 0,
        }
    }
}

impl VerificationConfig {
    /// Whether the expired-code purge job should run
    pub fn purge_enabled(&self) -> bool {
        self.purge_interval_secs > 0
    }
}

fn default_bcrypt_cost() -> u32 {
    12
}

fn default_code_ttl_seconds() -> i64 {
    600 // 10 minutes
}

fn default_mail_subject() -> String {
    String::from("Your verification code")
}
