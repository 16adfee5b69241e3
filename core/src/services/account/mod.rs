//! Account service module
//!
//! Registration, password login and account deletion. Password resets live in
//! the verification module because they are authorized by an emailed code.

mod service;

#[cfg(test)]
mod tests;

pub use service::{AccountService, Registration, MAX_NAME_LENGTH};
