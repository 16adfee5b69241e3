//! MySQL implementations of the repository traits declared in `cr_core`.

pub mod application_repository_impl;
pub mod email_verification_repository_impl;
pub mod message_repository_impl;
pub mod user_repository_impl;

pub use application_repository_impl::MySqlApplicationRepository;
pub use email_verification_repository_impl::MySqlEmailVerificationRepository;
pub use message_repository_impl::MySqlMessageRepository;
pub use user_repository_impl::MySqlUserRepository;

use chrono::{DateTime, SubsecRound, Utc};
use cr_core::errors::DomainError;
use sqlx::mysql::MySqlQueryResult;

/// Wrap a SQLx failure as an internal domain error with some context
pub(crate) fn db_error(context: &str) -> impl FnOnce(sqlx::Error) -> DomainError + '_ {
    move |e| DomainError::Internal {
        message: format!("{}: {}", context, e),
    }
}

/// Current time at the precision `DATETIME(6)` stores, so returned entities
/// compare equal to what a later read gives back
pub(crate) fn now_micros() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// Autoincrement id assigned by the last INSERT
pub(crate) fn inserted_id(result: &MySqlQueryResult) -> Result<i64, DomainError> {
    i64::try_from(result.last_insert_id())
        .map_err(|_| DomainError::internal("Inserted id does not fit in i64"))
}

/// `COUNT(*)` comes back as a signed BIGINT
pub(crate) fn to_count(value: i64) -> u64 {
    u64::try_from(value).unwrap_or(0)
}
