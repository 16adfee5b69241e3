//! Unit tests for verification service

use chrono::{Duration, TimeZone, Utc};
use mockable::Clock;
use std::sync::Arc;

use crate::domain::entities::email_verification::{CODE_LENGTH, MAX_CODE, MIN_CODE};
use crate::domain::entities::user::NewUser;
use crate::errors::{AuthError, DomainError, ValidationError};
use crate::repositories::{
    EmailVerificationRepository, MockEmailVerificationRepository, MockUserRepository,
    UserRepository,
};
use crate::services::credentials::{BcryptHasher, CredentialHasher};
use crate::services::verification::{VerificationService, VerificationServiceConfig};

use super::mocks::{FlakyUserRepository, MockMailService, MutableClock};

type TestService =
    VerificationService<MockEmailVerificationRepository, MockUserRepository, MockMailService, BcryptHasher>;

struct Harness {
    service: TestService,
    verifications: Arc<MockEmailVerificationRepository>,
    users: Arc<MockUserRepository>,
    mail: Arc<MockMailService>,
    hasher: Arc<BcryptHasher>,
    clock: Arc<MutableClock>,
}

fn harness_with(config: VerificationServiceConfig, mail_fails: bool) -> Harness {
    let verifications = Arc::new(MockEmailVerificationRepository::new());
    let users = Arc::new(MockUserRepository::new());
    let mail = Arc::new(MockMailService::new(mail_fails));
    let hasher = Arc::new(BcryptHasher::new(4));
    let clock = Arc::new(MutableClock::new(
        Utc.with_ymd_and_hms(2026, 3, 14, 9, 0, 0).unwrap(),
    ));

    let service = VerificationService::new(
        verifications.clone(),
        users.clone(),
        mail.clone(),
        hasher.clone(),
        clock.clone(),
        config,
    );

    Harness {
        service,
        verifications,
        users,
        mail,
        hasher,
        clock,
    }
}

fn harness() -> Harness {
    harness_with(VerificationServiceConfig::default(), false)
}

async fn register(h: &Harness, email: &str, password: &str) -> i64 {
    let digest = h.hasher.hash(password).await.unwrap();
    h.users
        .create(NewUser::new(email, digest, "Olga", "Ivanova"))
        .await
        .unwrap()
        .id
}

async fn password_matches(h: &Harness, user_id: i64, password: &str) -> bool {
    let user = h.users.find_by_id(user_id).await.unwrap().unwrap();
    h.hasher.verify(password, &user.password_hash).await.unwrap()
}

#[tokio::test]
async fn test_issue_code_stores_and_mails_six_digits() {
    let h = harness();

    let result = h.service.issue_code("a@b.com").await.unwrap();

    let stored = h.verifications.all().await;
    assert_eq!(stored.len(), 1);
    let entry = &stored[0];
    assert_eq!(entry.id, result.verification_id);
    assert_eq!(entry.code.len(), CODE_LENGTH);
    let value: u32 = entry.code.parse().unwrap();
    assert!((MIN_CODE..=MAX_CODE).contains(&value));

    // Expiry is exactly issue time plus ten minutes
    assert_eq!(entry.created_at, h.clock.utc());
    assert_eq!(entry.expires_at, entry.created_at + Duration::seconds(600));
    assert_eq!(result.expires_at, entry.expires_at);

    assert_eq!(h.mail.last_code_for("a@b.com"), Some(entry.code.clone()));
    assert!(result.message_id.starts_with("mock-mail-"));
}

#[tokio::test]
async fn test_issue_code_rejects_malformed_email() {
    let h = harness();

    for email in ["", "a@b", "no-at-sign.com", "a@@b.com"] {
        let result = h.service.issue_code(email).await;
        assert!(
            matches!(result, Err(DomainError::ValidationErr(ValidationError::InvalidEmail))),
            "expected InvalidEmail for {:?}",
            email
        );
    }
    assert!(h.verifications.all().await.is_empty());
    assert_eq!(h.mail.sent_count(), 0);
}

#[tokio::test]
async fn test_issue_code_rejects_email_wider_than_column() {
    let h = harness();
    let email = format!("{}@example.com", "a".repeat(300));

    let result = h.service.issue_code(&email).await;

    assert!(matches!(
        result,
        Err(DomainError::ValidationErr(ValidationError::InvalidLength { ref field, max: 255, .. }))
            if field == "email"
    ));
    assert!(h.verifications.all().await.is_empty());
    assert_eq!(h.mail.sent_count(), 0);
}

#[tokio::test]
async fn test_issue_code_does_not_require_registered_user() {
    let h = harness();
    assert!(h.service.issue_code("stranger@example.com").await.is_ok());
}

#[tokio::test]
async fn test_dispatch_failure_keeps_stored_row() {
    let h = harness_with(VerificationServiceConfig::default(), true);

    let result = h.service.issue_code("a@b.com").await;

    assert!(matches!(result, Err(DomainError::Dispatch { .. })));
    assert_eq!(h.verifications.all().await.len(), 1);
}

#[tokio::test]
async fn test_consume_code_resets_password() {
    let h = harness();
    let user_id = register(&h, "a@b.com", "old-password").await;
    h.service.issue_code("a@b.com").await.unwrap();
    let code = h.mail.last_code_for("a@b.com").unwrap();

    h.service
        .consume_code("a@b.com", &code, "new-password")
        .await
        .unwrap();

    assert!(password_matches(&h, user_id, "new-password").await);
    assert!(!password_matches(&h, user_id, "old-password").await);
}

#[tokio::test]
async fn test_expiry_boundary() {
    let h = harness();
    let user_id = register(&h, "a@b.com", "old-password").await;
    let issued = h.service.issue_code("a@b.com").await.unwrap();
    let code = h.mail.last_code_for("a@b.com").unwrap();

    h.clock.set(issued.expires_at - Duration::seconds(1));
    assert!(h.service.consume_code("a@b.com", &code, "second").await.is_ok());

    h.clock.set(issued.expires_at);
    assert!(h.service.consume_code("a@b.com", &code, "third").await.is_ok());

    h.clock.set(issued.expires_at + Duration::seconds(1));
    let result = h.service.consume_code("a@b.com", &code, "fourth").await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::InvalidOrExpiredCode))
    ));
    assert!(password_matches(&h, user_id, "third").await);
}

#[tokio::test]
async fn test_wrong_code_leaves_credential_unchanged() {
    let h = harness();
    let user_id = register(&h, "a@b.com", "old-password").await;
    h.service.issue_code("a@b.com").await.unwrap();

    // Issued codes never start with zero
    let result = h.service.consume_code("a@b.com", "000000", "newpw").await;

    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::InvalidOrExpiredCode))
    ));
    assert!(password_matches(&h, user_id, "old-password").await);
}

#[tokio::test]
async fn test_code_bound_to_its_email() {
    let h = harness();
    register(&h, "a@b.com", "pw").await;
    register(&h, "other@b.com", "pw").await;
    h.service.issue_code("a@b.com").await.unwrap();
    let code = h.mail.last_code_for("a@b.com").unwrap();

    let result = h.service.consume_code("other@b.com", &code, "stolen").await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::InvalidOrExpiredCode))
    ));

    // No normalization of the presented email
    let result = h.service.consume_code("A@b.com", &code, "stolen").await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::InvalidOrExpiredCode))
    ));
}

#[tokio::test]
async fn test_two_codes_both_usable() {
    let h = harness();
    let user_id = register(&h, "a@b.com", "old").await;

    h.service.issue_code("a@b.com").await.unwrap();
    let first = h.mail.last_code_for("a@b.com").unwrap();
    h.clock.advance_seconds(5);
    h.service.issue_code("a@b.com").await.unwrap();
    let second = h.mail.last_code_for("a@b.com").unwrap();

    h.service.consume_code("a@b.com", &second, "via-second").await.unwrap();
    h.service.consume_code("a@b.com", &first, "via-first").await.unwrap();
    // Reuse within the window is accepted by default
    h.service.consume_code("a@b.com", &second, "again").await.unwrap();

    assert!(password_matches(&h, user_id, "again").await);
    assert_eq!(h.verifications.all().await.len(), 2);
}

#[tokio::test]
async fn test_consume_for_unknown_user() {
    let h = harness();
    h.service.issue_code("ghost@example.com").await.unwrap();
    let code = h.mail.last_code_for("ghost@example.com").unwrap();

    let result = h.service.consume_code("ghost@example.com", &code, "pw").await;
    assert!(matches!(result, Err(DomainError::Auth(AuthError::UserNotFound))));
}

#[tokio::test]
async fn test_empty_new_password_rejected() {
    let h = harness();
    let result = h.service.consume_code("a@b.com", "123456", "").await;
    assert!(matches!(
        result,
        Err(DomainError::ValidationErr(ValidationError::RequiredField { .. }))
    ));
}

#[tokio::test]
async fn test_single_use_codes_refuse_replay() {
    let config = VerificationServiceConfig {
        single_use_codes: true,
        ..Default::default()
    };
    let h = harness_with(config, false);
    let user_id = register(&h, "a@b.com", "old").await;
    h.service.issue_code("a@b.com").await.unwrap();
    let code = h.mail.last_code_for("a@b.com").unwrap();

    h.service.consume_code("a@b.com", &code, "first").await.unwrap();
    let replay = h.service.consume_code("a@b.com", &code, "second").await;

    assert!(matches!(
        replay,
        Err(DomainError::Auth(AuthError::InvalidOrExpiredCode))
    ));
    assert!(password_matches(&h, user_id, "first").await);
    assert!(h.verifications.all().await[0].consumed_at.is_some());
}

#[tokio::test]
async fn test_expired_first_match_does_not_hide_live_one() {
    let h = harness();
    let user_id = register(&h, "a@b.com", "old").await;

    // Two rows with the same code, the older one already expired
    h.service.issue_code("a@b.com").await.unwrap();
    let code = h.mail.last_code_for("a@b.com").unwrap();
    h.clock.advance_seconds(601);
    let mut live = crate::domain::entities::email_verification::NewEmailVerification::issue(
        "a@b.com",
        h.clock.utc(),
        600,
    );
    live.code = code.clone();
    h.verifications.create(live).await.unwrap();

    h.service.consume_code("a@b.com", &code, "fresh").await.unwrap();
    assert!(password_matches(&h, user_id, "fresh").await);
}

#[tokio::test]
async fn test_purge_expired() {
    let h = harness();
    h.service.issue_code("a@b.com").await.unwrap();
    h.clock.advance_seconds(300);
    h.service.issue_code("c@d.com").await.unwrap();

    h.clock.advance_seconds(301);
    assert_eq!(h.service.purge_expired().await.unwrap(), 1);

    let remaining = h.verifications.all().await;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].email, "c@d.com");
}

#[tokio::test]
async fn test_single_use_code_spent_when_password_write_fails() {
    let verifications = Arc::new(MockEmailVerificationRepository::new());
    let users = Arc::new(FlakyUserRepository::default());
    let mail = Arc::new(MockMailService::new(false));
    let hasher = Arc::new(BcryptHasher::new(4));
    let clock = Arc::new(MutableClock::new(
        Utc.with_ymd_and_hms(2026, 3, 14, 9, 0, 0).unwrap(),
    ));
    let service = VerificationService::new(
        verifications,
        users.clone(),
        mail.clone(),
        hasher.clone(),
        clock,
        VerificationServiceConfig {
            single_use_codes: true,
            ..VerificationServiceConfig::default()
        },
    );

    let digest = hasher.hash("old").await.unwrap();
    let user = users
        .create(NewUser::new("a@b.com", digest, "Olga", "Ivanova"))
        .await
        .unwrap();

    service.issue_code("a@b.com").await.unwrap();
    let spent = mail.last_code_for("a@b.com").unwrap();

    users.set_failing(true);
    assert!(matches!(
        service.consume_code("a@b.com", &spent, "new").await,
        Err(DomainError::Internal { .. })
    ));
    users.set_failing(false);

    // The claimed code stays used; the password is untouched
    assert!(matches!(
        service.consume_code("a@b.com", &spent, "new").await,
        Err(DomainError::Auth(AuthError::InvalidOrExpiredCode))
    ));
    let stored = users.find_by_id(user.id).await.unwrap().unwrap();
    assert!(hasher.verify("old", &stored.password_hash).await.unwrap());

    // A fresh code recovers
    service.issue_code("a@b.com").await.unwrap();
    let fresh = mail.last_code_for("a@b.com").unwrap();
    service.consume_code("a@b.com", &fresh, "new").await.unwrap();
    let stored = users.find_by_id(user.id).await.unwrap().unwrap();
    assert!(hasher.verify("new", &stored.password_hash).await.unwrap());
}
