//! Business services containing domain logic and use cases.

pub mod account;
pub mod application;
pub mod credentials;
pub mod media;
pub mod message;
pub mod statistics;
pub mod verification;

// Re-export commonly used types
pub use account::{AccountService, Registration};
pub use application::ApplicationService;
pub use credentials::{BcryptHasher, CredentialHasher};
pub use media::{decode_base64_lenient, pad_base64, BlobStore, MediaService};
pub use message::MessageService;
pub use statistics::{Statistics, StatisticsService};
pub use verification::{
    IssueCodeResult, MailServiceTrait, VerificationService, VerificationServiceConfig,
};
