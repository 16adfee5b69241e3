//! Main account service implementation

use std::sync::Arc;

use cr_shared::utils::{is_valid_email, mask_email};

use crate::domain::entities::user::{NewUser, User, MAX_EMAIL_LENGTH};
use crate::errors::{check_length, AuthError, DomainError, DomainResult, ValidationError};
use crate::repositories::UserRepository;
use crate::services::credentials::CredentialHasher;

/// Width of the first and last name columns
pub const MAX_NAME_LENGTH: usize = 255;

/// Registration request as accepted from a client
#[derive(Debug, Clone, Default)]
pub struct Registration {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

/// Account service for registration, login and deletion
pub struct AccountService<U, H>
where
    U: UserRepository + ?Sized,
    H: CredentialHasher + ?Sized,
{
    /// User repository for database operations
    user_repository: Arc<U>,
    /// Password hasher
    hasher: Arc<H>,
}

impl<U, H> AccountService<U, H>
where
    U: UserRepository + ?Sized,
    H: CredentialHasher + ?Sized,
{
    pub fn new(user_repository: Arc<U>, hasher: Arc<H>) -> Self {
        Self {
            user_repository,
            hasher,
        }
    }

    /// Register a new user
    ///
    /// # Returns
    ///
    /// * `Ok(User)` - The stored user; only the password digest is kept
    /// * `Err(DomainError::Conflict)` - The email is already registered
    /// * `Err(DomainError::ValidationErr)` - Malformed email or empty password
    pub async fn register(&self, registration: Registration) -> DomainResult<User> {
        if !is_valid_email(&registration.email) {
            return Err(ValidationError::InvalidEmail.into());
        }
        check_length("email", &registration.email, MAX_EMAIL_LENGTH)?;
        if registration.password.is_empty() {
            return Err(ValidationError::required("password").into());
        }
        check_length("first_name", &registration.first_name, MAX_NAME_LENGTH)?;
        check_length("last_name", &registration.last_name, MAX_NAME_LENGTH)?;

        // Skip the bcrypt work for an obvious duplicate; the store still enforces uniqueness
        if self
            .user_repository
            .find_by_email(&registration.email)
            .await?
            .is_some()
        {
            return Err(email_taken());
        }

        let password_hash = self.hasher.hash(&registration.password).await?;
        let user = self
            .user_repository
            .create(NewUser {
                email: registration.email,
                password_hash,
                first_name: registration.first_name,
                last_name: registration.last_name,
            })
            .await?;

        tracing::info!(
            user_id = user.id,
            email = %mask_email(&user.email),
            event = "user_registered",
            "New user registered"
        );

        Ok(user)
    }

    /// Check an email and password pair
    ///
    /// Unknown email and wrong password fail the same way.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<User> {
        let user = match self.user_repository.find_by_email(email).await? {
            Some(user) => user,
            None => {
                tracing::warn!(
                    email = %mask_email(email),
                    event = "login_failed",
                    reason = "unknown_email",
                    "Login failed"
                );
                return Err(AuthError::InvalidCredentials.into());
            }
        };

        if !self.hasher.verify(password, &user.password_hash).await? {
            tracing::warn!(
                user_id = user.id,
                event = "login_failed",
                reason = "password_mismatch",
                "Login failed"
            );
            return Err(AuthError::InvalidCredentials.into());
        }

        tracing::info!(user_id = user.id, event = "login_succeeded", "User logged in");
        Ok(user)
    }

    /// Delete a user by id
    pub async fn delete_user(&self, id: i64) -> DomainResult<()> {
        if !self.user_repository.delete(id).await? {
            return Err(DomainError::not_found("User"));
        }
        tracing::info!(user_id = id, event = "user_deleted", "User deleted");
        Ok(())
    }
}

fn email_taken() -> DomainError {
    DomainError::Conflict {
        message: "A user with this email already exists".to_string(),
    }
}
