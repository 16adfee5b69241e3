//! User repository trait defining the interface for account persistence.
//!
//! Email lookups are exact. Implementations must not fold case or trim, so the
//! uniqueness check on registration and the lookup on password reset agree.

use async_trait::async_trait;

use crate::domain::entities::user::{NewUser, User};
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
///
/// # Example
/// ```no_run
/// # use cr_core::repositories::UserRepository;
/// # async fn example(repo: &impl UserRepository) -> Result<(), Box<dyn std::error::Error>> {
/// match repo.find_by_email("resident@example.com").await? {
///     Some(user) => println!("User found: {}", user.id),
///     None => println!("User not found"),
/// }
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by exact email
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user registered with this email
    /// * `Err(DomainError)` - Storage error
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by id
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError>;

    /// Persist a new user
    ///
    /// # Returns
    /// * `Ok(User)` - The stored user with its assigned id and timestamps
    /// * `Err(DomainError::Conflict)` - The email is already registered
    async fn create(&self, user: NewUser) -> Result<User, DomainError>;

    /// Overwrite the password digest of an existing user
    ///
    /// # Returns
    /// * `Ok(true)` - Password replaced
    /// * `Ok(false)` - No user with this id
    async fn update_password(&self, id: i64, password_hash: &str) -> Result<bool, DomainError>;

    /// Delete a user
    ///
    /// # Returns
    /// * `Ok(true)` - User was deleted
    /// * `Ok(false)` - User not found
    async fn delete(&self, id: i64) -> Result<bool, DomainError>;

    /// Count all registered users
    async fn count(&self) -> Result<u64, DomainError>;
}
