//! # Infrastructure Layer
//!
//! Concrete implementations of the ports declared in `cr_core`:
//!
//! - **Database**: MySQL repositories and connection pool using SQLx
//! - **Mail**: SMTP delivery through lettre, plus a recording mock for development
//! - **Storage**: local filesystem blob store behind the `/static` route

pub mod database;
pub mod mail;
pub mod storage;

pub use database::{
    DatabasePool, MySqlApplicationRepository, MySqlEmailVerificationRepository,
    MySqlMessageRepository, MySqlUserRepository,
};
pub use mail::{create_mail_service, MockMailService, SentMail, SmtpMailService};
pub use storage::LocalBlobStore;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration failure
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Mail transport error
    #[error("Mail error: {0}")]
    Mail(String),

    /// Filesystem error from the blob store
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),
}

impl From<InfrastructureError> for cr_core::DomainError {
    fn from(err: InfrastructureError) -> Self {
        cr_core::DomainError::internal(err.to_string())
    }
}
