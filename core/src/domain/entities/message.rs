//! Contact-form message entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{check_length, ValidationError};

use super::application::MAX_PHONE_LENGTH;

/// Width of the sender name column
pub const MAX_NAME_LENGTH: usize = 100;

/// Message left through the contact form; immutable once stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: i64,
    pub phone_number: String,
    pub name: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMessage {
    pub phone_number: String,
    pub name: String,
    pub body: String,
}

impl NewMessage {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.phone_number.trim().is_empty() {
            return Err(ValidationError::required("phone_number"));
        }
        if self.name.trim().is_empty() {
            return Err(ValidationError::required("name"));
        }
        if self.body.trim().is_empty() {
            return Err(ValidationError::required("message"));
        }
        check_length("phone_number", &self.phone_number, MAX_PHONE_LENGTH)?;
        check_length("name", &self.name, MAX_NAME_LENGTH)
    }

    pub fn into_message(self, id: i64, created_at: DateTime<Utc>) -> Message {
        Message {
            id,
            phone_number: self.phone_number,
            name: self.name,
            body: self.body,
            created_at,
        }
    }
}
