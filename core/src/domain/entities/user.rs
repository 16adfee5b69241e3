//! User entity representing a registered CityReport account.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Width of the email columns in `users` and `email_verifications`
pub const MAX_EMAIL_LENGTH: usize = 255;

/// Registered user
///
/// Email equality is exact: `Alice@example.com` and `alice@example.com` are two
/// different accounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Store-assigned identifier
    pub id: i64,

    /// Unique email address
    pub email: String,

    /// bcrypt digest of the password, never the plaintext
    #[serde(skip_serializing)]
    pub password_hash: String,

    pub first_name: String,

    pub last_name: String,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp of the last password change
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Replace the stored digest after a password reset
    pub fn set_password_hash(&mut self, password_hash: String, now: DateTime<Utc>) {
        self.password_hash = password_hash;
        self.updated_at = now;
    }
}

/// A user that has not been persisted yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
}

impl NewUser {
    pub fn new(
        email: impl Into<String>,
        password_hash: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password_hash: password_hash.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Attach store-assigned fields
    pub fn into_user(self, id: i64, now: DateTime<Utc>) -> User {
        User {
            id,
            email: self.email,
            password_hash: self.password_hash,
            first_name: self.first_name,
            last_name: self.last_name,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_not_serialized() {
        let user = NewUser::new("a@b.com", "$2b$04$digest", "Ivan", "Petrov").into_user(1, Utc::now());
        let json = serde_json::to_value(&user).unwrap();

        assert_eq!(json["email"], "a@b.com");
        assert!(json.get("password_hash").is_none());
    }

    #[test]
    fn test_set_password_hash_touches_updated_at() {
        let created = Utc::now();
        let mut user = NewUser::new("a@b.com", "old", "", "").into_user(7, created);
        let later = created + chrono::Duration::seconds(30);

        user.set_password_hash("new".to_string(), later);

        assert_eq!(user.password_hash, "new");
        assert_eq!(user.created_at, created);
        assert_eq!(user.updated_at, later);
    }
}
