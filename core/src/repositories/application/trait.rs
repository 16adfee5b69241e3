//! Application repository trait.

use async_trait::async_trait;
use cr_shared::PageRequest;

use crate::domain::entities::application::{Application, NewApplication};
use crate::errors::DomainError;

/// Persistence operations for citizen reports
///
/// Listing is ordered by id ascending, which is insertion order.
#[async_trait]
pub trait ApplicationRepository: Send + Sync {
    /// Store a validated report and return it with its id and creation time
    async fn create(&self, application: NewApplication) -> Result<Application, DomainError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Application>, DomainError>;

    /// Page through reports, optionally keeping only an exact status match
    async fn list(
        &self,
        status: Option<&str>,
        page: PageRequest,
    ) -> Result<Vec<Application>, DomainError>;

    /// Overwrite the status and return the updated report, `None` if absent
    async fn update_status(
        &self,
        id: i64,
        status: &str,
    ) -> Result<Option<Application>, DomainError>;

    /// Returns `false` if there was nothing to delete
    async fn delete(&self, id: i64) -> Result<bool, DomainError>;

    /// Count reports, optionally with an exact status
    async fn count(&self, status: Option<&str>) -> Result<u64, DomainError>;
}
