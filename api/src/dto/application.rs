use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use cr_core::errors::ValidationError;
use cr_core::services::decode_base64_lenient;
use cr_core::{Application, ApplicationDraft};
use cr_shared::PageRequest;

/// Body of `POST /applications/`
///
/// Every field is optional at the JSON level so a missing one is reported by
/// name instead of as a generic parse failure.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateApplicationRequest {
    #[validate(length(max = 15))]
    pub phone_number: Option<String>,
    /// Base64 image, padding optional
    pub photo: Option<String>,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
    pub description: Option<String>,
}

impl CreateApplicationRequest {
    pub fn into_draft(self) -> Result<ApplicationDraft, ValidationError> {
        let photo = self
            .photo
            .as_deref()
            .map(|encoded| decode_base64_lenient("photo", encoded))
            .transpose()?;

        Ok(ApplicationDraft {
            phone_number: self.phone_number,
            photo,
            longitude: self.longitude,
            latitude: self.latitude,
            description: self.description,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationResponse {
    pub id: i64,
    pub phone_number: String,
    /// Base64 of the stored bytes
    pub photo: String,
    pub longitude: f64,
    pub latitude: f64,
    pub description: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<Application> for ApplicationResponse {
    fn from(application: Application) -> Self {
        Self {
            id: application.id,
            phone_number: application.phone_number,
            photo: STANDARD.encode(&application.photo),
            longitude: application.longitude,
            latitude: application.latitude,
            description: application.description,
            status: application.status,
            created_at: application.created_at,
        }
    }
}

/// Query of `GET /applications/`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListApplicationsQuery {
    pub status: Option<String>,
    pub skip: Option<u32>,
    pub limit: Option<u32>,
}

impl ListApplicationsQuery {
    pub fn page(&self) -> PageRequest {
        let defaults = PageRequest::default();
        PageRequest::new(
            self.skip.unwrap_or(defaults.skip),
            self.limit.unwrap_or(defaults.limit),
        )
    }

    /// An empty `status=` means no filter
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref().filter(|status| !status.is_empty())
    }
}

/// Body of `PATCH /applications/{id}`
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}
