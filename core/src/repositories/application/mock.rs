//! In-memory implementation of ApplicationRepository

use async_trait::async_trait;
use chrono::Utc;
use cr_shared::PageRequest;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::application::{Application, NewApplication};
use crate::errors::DomainError;

use super::trait_::ApplicationRepository;

/// In-memory application store keyed by id, so iteration is insertion order
pub struct MockApplicationRepository {
    applications: Arc<RwLock<BTreeMap<i64, Application>>>,
    next_id: AtomicI64,
}

impl MockApplicationRepository {
    pub fn new() -> Self {
        Self {
            applications: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for MockApplicationRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn status_matches(application: &Application, status: Option<&str>) -> bool {
    status.map_or(true, |s| application.status == s)
}

#[async_trait]
impl ApplicationRepository for MockApplicationRepository {
    async fn create(&self, application: NewApplication) -> Result<Application, DomainError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let application = application.into_application(id, Utc::now());

        let mut applications = self.applications.write().await;
        applications.insert(id, application.clone());
        Ok(application)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Application>, DomainError> {
        let applications = self.applications.read().await;
        Ok(applications.get(&id).cloned())
    }

    async fn list(
        &self,
        status: Option<&str>,
        page: PageRequest,
    ) -> Result<Vec<Application>, DomainError> {
        let applications = self.applications.read().await;
        Ok(applications
            .values()
            .filter(|a| status_matches(a, status))
            .skip(page.skip as usize)
            .take(page.limit as usize)
            .cloned()
            .collect())
    }

    async fn update_status(
        &self,
        id: i64,
        status: &str,
    ) -> Result<Option<Application>, DomainError> {
        let mut applications = self.applications.write().await;
        Ok(applications.get_mut(&id).map(|application| {
            application.status = status.to_string();
            application.clone()
        }))
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let mut applications = self.applications.write().await;
        Ok(applications.remove(&id).is_some())
    }

    async fn count(&self, status: Option<&str>) -> Result<u64, DomainError> {
        let applications = self.applications.read().await;
        Ok(applications
            .values()
            .filter(|a| status_matches(a, status))
            .count() as u64)
    }
}
