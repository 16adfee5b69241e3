//! Email verification codes for password reset

use mockable::Clock;
use std::sync::Arc;

use cr_shared::utils::{is_valid_email, mask_email};

use crate::domain::entities::email_verification::{EmailVerification, NewEmailVerification};
use crate::domain::entities::user::MAX_EMAIL_LENGTH;
use crate::errors::{check_length, AuthError, DomainError, DomainResult, ValidationError};
use crate::repositories::{EmailVerificationRepository, UserRepository};
use crate::services::credentials::CredentialHasher;

use super::config::VerificationServiceConfig;
use super::traits::MailServiceTrait;
use super::types::IssueCodeResult;

/// Issues codes by mail and lets a matching, unexpired code reset a password
pub struct VerificationService<V, U, M, H>
where
    V: EmailVerificationRepository + ?Sized,
    U: UserRepository + ?Sized,
    M: MailServiceTrait + ?Sized,
    H: CredentialHasher + ?Sized,
{
    /// Store for issued codes
    verification_repo: Arc<V>,
    /// Store for the accounts being reset
    user_repo: Arc<U>,
    /// Outbound mail transport
    mail_service: Arc<M>,
    /// Hasher for the new password
    hasher: Arc<H>,
    /// Source of "now" for issue and expiry checks
    clock: Arc<dyn Clock + Send + Sync>,
    /// Service configuration
    config: VerificationServiceConfig,
}

impl<V, U, M, H> VerificationService<V, U, M, H>
where
    V: EmailVerificationRepository + ?Sized,
    U: UserRepository + ?Sized,
    M: MailServiceTrait + ?Sized,
    H: CredentialHasher + ?Sized,
{
    pub fn new(
        verification_repo: Arc<V>,
        user_repo: Arc<U>,
        mail_service: Arc<M>,
        hasher: Arc<H>,
        clock: Arc<dyn Clock + Send + Sync>,
        config: VerificationServiceConfig,
    ) -> Self {
        Self {
            verification_repo,
            user_repo,
            mail_service,
            hasher,
            clock,
            config,
        }
    }

    /// Issue a code for `email` and mail it
    ///
    /// The row is stored before dispatch and stays stored if dispatch fails, so a
    /// `DomainError::Dispatch` can leave behind a code nobody received. Older codes
    /// for the same address are left untouched. The address does not have to
    /// belong to a registered user.
    pub async fn issue_code(&self, email: &str) -> DomainResult<IssueCodeResult> {
        if !is_valid_email(email) {
            return Err(ValidationError::InvalidEmail.into());
        }
        check_length("email", email, MAX_EMAIL_LENGTH)?;

        let now = self.clock.utc();
        let entry = NewEmailVerification::issue(email, now, self.config.code_ttl_seconds);
        let code = entry.code.clone();
        let stored = self.verification_repo.create(entry).await?;

        tracing::info!(
            email = %mask_email(email),
            verification_id = stored.id,
            expires_at = %stored.expires_at,
            event = "verification_code_issued",
            "Issued email verification code"
        );

        let message_id = self
            .mail_service
            .send(email, &self.config.mail_subject, &render_body(&code))
            .await
            .map_err(|e| {
                tracing::error!(
                    email = %mask_email(email),
                    verification_id = stored.id,
                    error = %e,
                    event = "verification_dispatch_failed",
                    "Failed to send verification code email"
                );
                DomainError::Dispatch { message: e }
            })?;

        Ok(IssueCodeResult {
            verification_id: stored.id,
            message_id,
            expires_at: stored.expires_at,
        })
    }

    /// Reset the password of `email` if `code` is a live code for it
    ///
    /// Any matching row that has not expired is accepted, oldest first. With
    /// single-use codes enabled, the row is also claimed atomically and a code that
    /// already authorized a reset is refused. The claim happens before the password
    /// write, so if that write fails the code is spent and a new one must be issued.
    pub async fn consume_code(&self, email: &str, code: &str, new_password: &str) -> DomainResult<()> {
        if new_password.is_empty() {
            return Err(ValidationError::required("new_password").into());
        }

        let now = self.clock.utc();
        let candidates = self.verification_repo.find_matching(email, code).await?;
        let entry = match self.first_usable(candidates, now) {
            Some(entry) => entry,
            None => {
                tracing::warn!(
                    email = %mask_email(email),
                    event = "verification_code_rejected",
                    "Invalid or expired verification code presented"
                );
                return Err(AuthError::InvalidOrExpiredCode.into());
            }
        };

        let user = self
            .user_repo
            .find_by_email(email)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        let digest = self.hasher.hash(new_password).await?;

        if self.config.single_use_codes
            && !self.verification_repo.mark_consumed(entry.id, now).await?
        {
            // Another request claimed this row between lookup and update
            tracing::warn!(
                email = %mask_email(email),
                verification_id = entry.id,
                event = "verification_code_replayed",
                "Verification code already used"
            );
            return Err(AuthError::InvalidOrExpiredCode.into());
        }

        if !self.user_repo.update_password(user.id, &digest).await? {
            return Err(AuthError::UserNotFound.into());
        }

        tracing::info!(
            email = %mask_email(email),
            user_id = user.id,
            verification_id = entry.id,
            event = "password_reset",
            "Password reset with verification code"
        );

        Ok(())
    }

    /// Delete every code that expired before now
    pub async fn purge_expired(&self) -> DomainResult<u64> {
        let removed = self.verification_repo.delete_expired(self.clock.utc()).await?;
        if removed > 0 {
            tracing::info!(removed, event = "verification_codes_purged", "Purged expired verification codes");
        }
        Ok(removed)
    }

    fn first_usable(
        &self,
        candidates: Vec<EmailVerification>,
        now: chrono::DateTime<chrono::Utc>,
    ) -> Option<EmailVerification> {
        candidates.into_iter().find(|entry| {
            !entry.is_expired_at(now) && !(self.config.single_use_codes && entry.is_consumed())
        })
    }
}

fn render_body(code: &str) -> String {
    format!("Your verification code: {}", code)
}
