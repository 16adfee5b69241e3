use std::sync::Arc;

use cr_shared::PageRequest;

use crate::domain::entities::application::{validate_status, Application, ApplicationDraft};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::ApplicationRepository;

/// Holds and transitions the status of citizen reports
pub struct ApplicationService<A: ApplicationRepository + ?Sized> {
    repository: Arc<A>,
}

impl<A: ApplicationRepository + ?Sized> ApplicationService<A> {
    pub fn new(repository: Arc<A>) -> Self {
        Self { repository }
    }

    /// Validate a submitted report and store it as `Pending`
    pub async fn create(&self, draft: ApplicationDraft) -> DomainResult<Application> {
        let new_application = draft.validate()?;
        let application = self.repository.create(new_application).await?;

        tracing::info!(
            application_id = application.id,
            photo_bytes = application.photo.len(),
            event = "application_created",
            "Application submitted"
        );
        Ok(application)
    }

    pub async fn get(&self, id: i64) -> DomainResult<Application> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Application"))
    }

    /// Page through reports in insertion order, optionally by exact status
    pub async fn list(&self, status: Option<&str>, page: PageRequest) -> DomainResult<Vec<Application>> {
        self.repository.list(status, page.sanitized()).await
    }

    /// Overwrite the status unconditionally
    ///
    /// Concurrent transitions of one report are last-write-wins.
    pub async fn transition(&self, id: i64, status: &str) -> DomainResult<Application> {
        validate_status(status)?;

        let application = self
            .repository
            .update_status(id, status)
            .await?
            .ok_or_else(|| DomainError::not_found("Application"))?;

        tracing::info!(
            application_id = id,
            status = %application.status,
            event = "application_status_changed",
            "Application status changed"
        );
        Ok(application)
    }

    pub async fn delete(&self, id: i64) -> DomainResult<()> {
        if !self.repository.delete(id).await? {
            return Err(DomainError::not_found("Application"));
        }
        tracing::info!(application_id = id, event = "application_deleted", "Application deleted");
        Ok(())
    }
}
