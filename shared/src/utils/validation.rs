//! Email validation and log masking

use once_cell::sync::Lazy;
use regex::Regex;

/// Something before `@`, something after it, and a dot with text on both sides
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@]+@[^@]+\.[^@]+$").unwrap_or_else(|e| panic!("invalid email regex: {e}"))
});

/// Check the shape of an email address
///
/// This is a deliberately loose check: `a@b.c` passes, `a@b` and `a@@b.c` do not.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Mask an email address for logging, keeping the first character and the domain
///
/// `alice@example.com` becomes `a***@example.com`.
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let first = local.chars().next().map(String::from).unwrap_or_default();
            format!("{}***@{}", first, domain)
        }
        None => "***".to_string(),
    }
}
