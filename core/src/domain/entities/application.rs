//! Citizen report entity and its status field.
//!
//! Status is an open set of strings. `Pending` is assigned on creation and
//! `Completed` is what the statistics count; staff may set anything else that
//! fits the column.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{check_length, ValidationError};

/// Status of every newly submitted application
pub const STATUS_PENDING: &str = "Pending";

/// Status counted as resolved by the statistics endpoint
pub const STATUS_COMPLETED: &str = "Completed";

/// Width of the status column
pub const MAX_STATUS_LENGTH: usize = 50;

/// Width of the phone number column
pub const MAX_PHONE_LENGTH: usize = 15;

/// A submitted citizen report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub id: i64,
    pub phone_number: String,
    /// Raw image bytes
    pub photo: Vec<u8>,
    pub longitude: f64,
    pub latitude: f64,
    pub description: String,
    pub status: String,
    /// Server-assigned, never changes
    pub created_at: DateTime<Utc>,
}

/// Incoming report with every field optional, as it arrives from a client
#[derive(Debug, Clone, Default)]
pub struct ApplicationDraft {
    pub phone_number: Option<String>,
    pub photo: Option<Vec<u8>>,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
    pub description: Option<String>,
}

/// A validated report ready to be stored
#[derive(Debug, Clone, PartialEq)]
pub struct NewApplication {
    pub phone_number: String,
    pub photo: Vec<u8>,
    pub longitude: f64,
    pub latitude: f64,
    pub description: String,
    pub status: String,
}

impl ApplicationDraft {
    /// Check required fields and column limits
    pub fn validate(self) -> Result<NewApplication, ValidationError> {
        let phone_number = self
            .phone_number
            .filter(|p| !p.trim().is_empty())
            .ok_or_else(|| ValidationError::required("phone_number"))?;
        check_length("phone_number", &phone_number, MAX_PHONE_LENGTH)?;

        let photo = self.photo.ok_or_else(|| ValidationError::required("photo"))?;
        let longitude = self
            .longitude
            .ok_or_else(|| ValidationError::required("longitude"))?;
        let latitude = self
            .latitude
            .ok_or_else(|| ValidationError::required("latitude"))?;
        if !longitude.is_finite() {
            return Err(ValidationError::invalid_format("longitude"));
        }
        if !latitude.is_finite() {
            return Err(ValidationError::invalid_format("latitude"));
        }

        let description = self
            .description
            .ok_or_else(|| ValidationError::required("description"))?;

        Ok(NewApplication {
            phone_number,
            photo,
            longitude,
            latitude,
            description,
            status: STATUS_PENDING.to_string(),
        })
    }
}

impl NewApplication {
    /// Attach store-assigned fields
    pub fn into_application(self, id: i64, created_at: DateTime<Utc>) -> Application {
        Application {
            id,
            phone_number: self.phone_number,
            photo: self.photo,
            longitude: self.longitude,
            latitude: self.latitude,
            description: self.description,
            status: self.status,
            created_at,
        }
    }
}

/// Any non-empty string that fits the column is a legal status
pub fn validate_status(status: &str) -> Result<(), ValidationError> {
    if status.is_empty() {
        return Err(ValidationError::required("status"));
    }
    check_length("status", status, MAX_STATUS_LENGTH)
}
