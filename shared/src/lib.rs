//! Shared utilities and common types for the CityReport server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types and loading
//! - Error response structures and error codes
//! - Response bodies and pagination
//! - Utility functions (email validation, log masking)

pub mod config;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, CorsConfig, DatabaseConfig, Environment, LoggingConfig, MailConfig,
    ServerConfig, StorageConfig, VerificationConfig,
};
pub use errors::{error_codes, ErrorResponse};
pub use types::{MessageResponse, PageRequest};
pub use utils::validation;
