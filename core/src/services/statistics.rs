//! Dashboard counters.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::domain::entities::application::STATUS_COMPLETED;
use crate::errors::DomainResult;
use crate::repositories::{ApplicationRepository, UserRepository};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    pub total_users: u64,
    pub total_applications: u64,
    /// Applications whose status is exactly `Completed`
    pub completed_applications: u64,
}

pub struct StatisticsService<U, A>
where
    U: UserRepository + ?Sized,
    A: ApplicationRepository + ?Sized,
{
    user_repository: Arc<U>,
    application_repository: Arc<A>,
}

impl<U, A> StatisticsService<U, A>
where
    U: UserRepository + ?Sized,
    A: ApplicationRepository + ?Sized,
{
    pub fn new(user_repository: Arc<U>, application_repository: Arc<A>) -> Self {
        Self {
            user_repository,
            application_repository,
        }
    }

    /// The three counts are read separately, not from one snapshot
    pub async fn collect(&self) -> DomainResult<Statistics> {
        Ok(Statistics {
            total_users: self.user_repository.count().await?,
            total_applications: self.application_repository.count(None).await?,
            completed_applications: self
                .application_repository
                .count(Some(STATUS_COMPLETED))
                .await?,
        })
    }
}
