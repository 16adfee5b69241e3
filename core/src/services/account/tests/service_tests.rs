//! Unit tests for account service

use std::sync::Arc;

use crate::errors::{AuthError, DomainError, ValidationError};
use crate::repositories::{MockUserRepository, UserRepository};
use crate::services::account::{AccountService, Registration};
use crate::services::credentials::{BcryptHasher, CredentialHasher};

fn service() -> (AccountService<MockUserRepository, BcryptHasher>, Arc<MockUserRepository>) {
    let users = Arc::new(MockUserRepository::new());
    let service = AccountService::new(users.clone(), Arc::new(BcryptHasher::new(4)));
    (service, users)
}

fn registration(email: &str, password: &str) -> Registration {
    Registration {
        email: email.to_string(),
        password: password.to_string(),
        first_name: "Pavel".to_string(),
        last_name: "Sidorov".to_string(),
    }
}

#[tokio::test]
async fn test_register_stores_hash_not_plaintext() {
    let (service, users) = service();

    let user = service.register(registration("p@s.ru", "hunter2")).await.unwrap();

    let stored = users.find_by_id(user.id).await.unwrap().unwrap();
    assert_ne!(stored.password_hash, "hunter2");
    assert!(BcryptHasher::new(4)
        .verify("hunter2", &stored.password_hash)
        .await
        .unwrap());
    assert_eq!(stored.first_name, "Pavel");
}

#[tokio::test]
async fn test_duplicate_registration_conflicts() {
    let (service, users) = service();
    service.register(registration("p@s.ru", "first")).await.unwrap();

    let result = service.register(registration("p@s.ru", "second")).await;

    assert!(matches!(result, Err(DomainError::Conflict { .. })));
    assert_eq!(users.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_register_validates_input() {
    let (service, _) = service();

    let result = service.register(registration("not-an-email", "pw")).await;
    assert!(matches!(
        result,
        Err(DomainError::ValidationErr(ValidationError::InvalidEmail))
    ));

    let result = service.register(registration("p@s.ru", "")).await;
    assert!(matches!(
        result,
        Err(DomainError::ValidationErr(ValidationError::RequiredField { .. }))
    ));

    let mut long_name = registration("p@s.ru", "pw");
    long_name.first_name = "x".repeat(256);
    assert!(matches!(
        service.register(long_name).await,
        Err(DomainError::ValidationErr(ValidationError::InvalidLength { .. }))
    ));
}

#[tokio::test]
async fn test_register_rejects_email_wider_than_column() {
    let (service, users) = service();
    let email = format!("{}@example.com", "a".repeat(300));

    let result = service.register(registration(&email, "pw")).await;

    assert!(matches!(
        result,
        Err(DomainError::ValidationErr(ValidationError::InvalidLength { ref field, max: 255, .. }))
            if field == "email"
    ));
    assert_eq!(users.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_login() {
    let (service, _) = service();
    let registered = service.register(registration("p@s.ru", "pw")).await.unwrap();

    let user = service.login("p@s.ru", "pw").await.unwrap();
    assert_eq!(user.id, registered.id);

    assert!(matches!(
        service.login("p@s.ru", "wrong").await,
        Err(DomainError::Auth(AuthError::InvalidCredentials))
    ));
    assert!(matches!(
        service.login("nobody@s.ru", "pw").await,
        Err(DomainError::Auth(AuthError::InvalidCredentials))
    ));
}

#[tokio::test]
async fn test_delete_user() {
    let (service, users) = service();
    let user = service.register(registration("p@s.ru", "pw")).await.unwrap();

    service.delete_user(user.id).await.unwrap();
    assert!(users.find_by_id(user.id).await.unwrap().is_none());

    assert!(matches!(
        service.delete_user(user.id).await,
        Err(DomainError::NotFound { .. })
    ));
}
