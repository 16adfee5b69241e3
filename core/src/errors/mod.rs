//! Domain-specific error types and error handling.

mod types;


pub use types::{check_length, AuthError, ValidationError};

use cr_shared::error_codes;
use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Conflict: {message}")]
    Conflict { message: String },

    #[error("Mail dispatch failed: {message}")]
    Dispatch { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    ValidationErr(#[from] ValidationError),
}

impl DomainError {
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Stable machine-readable code for this error kind
    pub fn code(&self) -> &'static str {
        match self {
            Self::ValidationErr(_) => error_codes::VALIDATION_ERROR,
            Self::NotFound { .. } => error_codes::NOT_FOUND,
            Self::Conflict { .. } => error_codes::CONFLICT,
            Self::Dispatch { .. } => error_codes::DISPATCH_ERROR,
            Self::Internal { .. } => error_codes::INTERNAL_ERROR,
            Self::Auth(AuthError::InvalidOrExpiredCode) => error_codes::INVALID_OR_EXPIRED_CODE,
            Self::Auth(AuthError::UserNotFound) => error_codes::USER_NOT_FOUND,
            Self::Auth(AuthError::InvalidCredentials) => error_codes::INVALID_CREDENTIALS,
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
