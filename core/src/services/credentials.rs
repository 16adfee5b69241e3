//! One-way password hashing.
//!
//! bcrypt is CPU-bound for tens to hundreds of milliseconds at production cost, so
//! both operations run on the blocking pool instead of an async worker thread.

use async_trait::async_trait;

use crate::errors::{DomainError, DomainResult};

/// Hash and verify passwords
#[async_trait]
pub trait CredentialHasher: Send + Sync {
    /// Produce a salted digest of `plaintext`
    async fn hash(&self, plaintext: &str) -> DomainResult<String>;

    /// Check `plaintext` against a digest produced by [`CredentialHasher::hash`]
    async fn verify(&self, plaintext: &str, digest: &str) -> DomainResult<bool>;
}

/// bcrypt with a fixed work factor
#[derive(Debug, Clone, Copy)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

#[async_trait]
impl CredentialHasher for BcryptHasher {
    async fn hash(&self, plaintext: &str) -> DomainResult<String> {
        let plaintext = plaintext.to_owned();
        let cost = self.cost;

        tokio::task::spawn_blocking(move || bcrypt::hash(plaintext, cost))
            .await
            .map_err(|e| DomainError::internal(format!("Hashing task failed: {}", e)))?
            .map_err(|e| DomainError::internal(format!("Failed to hash password: {}", e)))
    }

    async fn verify(&self, plaintext: &str, digest: &str) -> DomainResult<bool> {
        let plaintext = plaintext.to_owned();
        let digest = digest.to_owned();

        tokio::task::spawn_blocking(move || bcrypt::verify(plaintext, &digest))
            .await
            .map_err(|e| DomainError::internal(format!("Hashing task failed: {}", e)))?
            .map_err(|e| DomainError::internal(format!("Failed to verify password: {}", e)))
    }
}
