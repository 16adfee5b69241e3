//! Error types for account recovery and input validation
//!
//! Messages here are the ones surfaced to API clients, so they stay short and
//! never echo secrets such as codes or passwords.

use thiserror::Error;

/// Authentication and password reset failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid or expired verification code")]
    InvalidOrExpiredCode,

    #[error("User not found")]
    UserNotFound,

    #[error("Invalid email or password")]
    InvalidCredentials,
}

/// Input validation failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required field: {field}")]
    RequiredField { field: String },

    #[error("Invalid format: {field}")]
    InvalidFormat { field: String },

    #[error("Invalid length: {field} (max: {max}, actual: {actual})")]
    InvalidLength {
        field: String,
        max: usize,
        actual: usize,
    },

    #[error("Invalid email address")]
    InvalidEmail,
}

impl ValidationError {
    pub fn required(field: impl Into<String>) -> Self {
        Self::RequiredField {
            field: field.into(),
        }
    }

    pub fn invalid_format(field: impl Into<String>) -> Self {
        Self::InvalidFormat {
            field: field.into(),
        }
    }

    /// Name of the offending field, when there is one
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::RequiredField { field }
            | Self::InvalidFormat { field }
            | Self::InvalidLength { field, .. } => Some(field),
            Self::InvalidEmail => Some("email"),
        }
    }
}

/// Check that a text field is no longer than its column
pub fn check_length(field: &str, value: &str, max: usize) -> Result<(), ValidationError> {
    let actual = value.chars().count();
    if actual > max {
        return Err(ValidationError::InvalidLength {
            field: field.to_string(),
            max,
            actual,
        });
    }
    Ok(())
}
