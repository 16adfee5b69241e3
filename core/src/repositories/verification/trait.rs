//! Email verification repository trait.
//!
//! Rows are append-only apart from `consumed_at`. Issuing a code never touches
//! older rows for the same address, so several live codes may coexist.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::email_verification::{EmailVerification, NewEmailVerification};
use crate::errors::DomainError;

#[async_trait]
pub trait EmailVerificationRepository: Send + Sync {
    /// Persist a newly issued code
    async fn create(&self, entry: NewEmailVerification) -> Result<EmailVerification, DomainError>;

    /// All rows whose email and code equal the given text exactly, oldest first
    ///
    /// Expired and consumed rows are included; the caller decides validity.
    async fn find_matching(
        &self,
        email: &str,
        code: &str,
    ) -> Result<Vec<EmailVerification>, DomainError>;

    /// Set `consumed_at` if it is still unset
    ///
    /// # Returns
    /// * `Ok(true)` - This call consumed the row
    /// * `Ok(false)` - The row was already consumed or does not exist
    async fn mark_consumed(&self, id: i64, at: DateTime<Utc>) -> Result<bool, DomainError>;

    /// Remove rows that expired strictly before `before`, returning how many went
    async fn delete_expired(&self, before: DateTime<Utc>) -> Result<u64, DomainError>;
}
