//! Repository interfaces for persistence, plus in-memory implementations used by
//! tests and by the API integration suite.

pub mod application;
pub mod message;
pub mod user;
pub mod verification;

pub use application::{ApplicationRepository, MockApplicationRepository};
pub use message::{MessageRepository, MockMessageRepository};
pub use user::{MockUserRepository, UserRepository};
pub use verification::{EmailVerificationRepository, MockEmailVerificationRepository};
