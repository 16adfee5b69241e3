//! Verification service module for email-based password reset
//!
//! This module provides the verification code workflow:
//! - Code generation, storage and dispatch by mail
//! - Code consumption with expiry checks and optional single-use enforcement
//! - Purging of expired codes

mod config;
mod service;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use config::VerificationServiceConfig;
pub use service::VerificationService;
pub use traits::MailServiceTrait;
pub use types::IssueCodeResult;
