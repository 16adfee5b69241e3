//! Domain entities representing core business objects.

pub mod application;
pub mod email_verification;
pub mod message;
pub mod user;

// Re-export commonly used types
pub use application::{
    validate_status, Application, ApplicationDraft, NewApplication, MAX_PHONE_LENGTH,
    MAX_STATUS_LENGTH, STATUS_COMPLETED, STATUS_PENDING,
};
pub use email_verification::{
    generate_code, EmailVerification, NewEmailVerification, CODE_LENGTH,
    DEFAULT_EXPIRATION_SECONDS, MAX_CODE, MIN_CODE,
};
pub use message::{Message, NewMessage, MAX_NAME_LENGTH};
pub use user::{NewUser, User, MAX_EMAIL_LENGTH};
