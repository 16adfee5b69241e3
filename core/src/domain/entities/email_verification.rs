//! Email verification code entity used to authorize password resets.

use chrono::{DateTime, Duration, Utc};
use constant_time_eq::constant_time_eq;
use rand::{rngs::OsRng, Rng};
use serde::{Deserialize, Serialize};

/// Length of the verification code
pub const CODE_LENGTH: usize = 6;

/// Smallest code that can be issued; codes never start with zero
pub const MIN_CODE: u32 = 100_000;

/// Largest code that can be issued
pub const MAX_CODE: u32 = 999_999;

/// Default lifetime of a code (10 minutes)
pub const DEFAULT_EXPIRATION_SECONDS: i64 = 600;

/// A stored verification code bound to an email address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailVerification {
    /// Store-assigned identifier, increasing with issue order
    pub id: i64,

    /// Address the code was sent to
    pub email: String,

    /// The 6-digit code as text
    pub code: String,

    /// Timestamp when the code was issued
    pub created_at: DateTime<Utc>,

    /// Absolute expiry; the code is still valid at exactly this instant
    pub expires_at: DateTime<Utc>,

    /// Set when a password reset used this code and single-use codes are enforced
    pub consumed_at: Option<DateTime<Utc>>,
}

impl EmailVerification {
    /// Expired strictly after `expires_at`
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed_at.is_some()
    }

    /// Compare the presented code without leaking timing
    pub fn code_matches(&self, presented: &str) -> bool {
        constant_time_eq(self.code.as_bytes(), presented.as_bytes())
    }
}

/// A freshly generated code that has not been persisted yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmailVerification {
    pub email: String,
    pub code: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl NewEmailVerification {
    /// Generate a new code for `email` valid for `ttl_seconds` from `now`
    pub fn issue(email: impl Into<String>, now: DateTime<Utc>, ttl_seconds: i64) -> Self {
        Self {
            email: email.into(),
            code: generate_code(),
            created_at: now,
            expires_at: now + Duration::seconds(ttl_seconds),
        }
    }

    pub fn into_verification(self, id: i64) -> EmailVerification {
        EmailVerification {
            id,
            email: self.email,
            code: self.code,
            created_at: self.created_at,
            expires_at: self.expires_at,
            consumed_at: None,
        }
    }
}

/// Draw a code uniformly from [100000, 999999] using the OS CSPRNG
pub fn generate_code() -> String {
    OsRng.gen_range(MIN_CODE..=MAX_CODE).to_string()
}
