//! # CityReport Core
//!
//! Core business logic and domain layer for the CityReport backend.
//! This crate contains domain entities, business services, repository interfaces
//! (with in-memory implementations) and the error types shared by every layer above.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{
    Application, ApplicationDraft, EmailVerification, Message, NewApplication,
    NewEmailVerification, NewMessage, NewUser, User,
};
pub use errors::{AuthError, DomainError, DomainResult, ValidationError};
pub use repositories::{
    ApplicationRepository, EmailVerificationRepository, MessageRepository, UserRepository,
};
pub use services::{
    AccountService, ApplicationService, BcryptHasher, BlobStore, CredentialHasher,
    MailServiceTrait, MediaService, MessageService, StatisticsService, VerificationService,
};
