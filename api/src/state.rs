//! Shared application state
//!
//! Services are built once over trait objects, so the same handlers run on the
//! MySQL repositories in production and on the in-memory ones in tests.

use mockable::Clock;
use std::sync::Arc;

use cr_core::repositories::{
    MockApplicationRepository, MockEmailVerificationRepository, MockMessageRepository,
    MockUserRepository,
};
use cr_core::services::VerificationServiceConfig;
use cr_core::{
    AccountService, ApplicationRepository, ApplicationService, BlobStore, CredentialHasher,
    EmailVerificationRepository, MailServiceTrait, MediaService, MessageRepository,
    MessageService, StatisticsService, UserRepository, VerificationService,
};
use cr_infra::{
    DatabasePool, MySqlApplicationRepository, MySqlEmailVerificationRepository,
    MySqlMessageRepository, MySqlUserRepository,
};

pub type Accounts = AccountService<dyn UserRepository, dyn CredentialHasher>;
pub type Verification = VerificationService<
    dyn EmailVerificationRepository,
    dyn UserRepository,
    dyn MailServiceTrait,
    dyn CredentialHasher,
>;
pub type Applications = ApplicationService<dyn ApplicationRepository>;
pub type Messages = MessageService<dyn MessageRepository>;
pub type Statistics = StatisticsService<dyn UserRepository, dyn ApplicationRepository>;
pub type Media = MediaService<dyn BlobStore>;

/// One handle per persisted entity
#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub applications: Arc<dyn ApplicationRepository>,
    pub messages: Arc<dyn MessageRepository>,
    pub verifications: Arc<dyn EmailVerificationRepository>,
}

impl Repositories {
    /// MySQL repositories sharing one pool
    pub fn mysql(pool: &DatabasePool) -> Self {
        let pool = pool.get_pool();
        Self {
            users: Arc::new(MySqlUserRepository::new(pool.clone())),
            applications: Arc::new(MySqlApplicationRepository::new(pool.clone())),
            messages: Arc::new(MySqlMessageRepository::new(pool.clone())),
            verifications: Arc::new(MySqlEmailVerificationRepository::new(pool.clone())),
        }
    }

    /// Fresh, empty in-memory repositories
    pub fn in_memory() -> Self {
        Self {
            users: Arc::new(MockUserRepository::new()),
            applications: Arc::new(MockApplicationRepository::new()),
            messages: Arc::new(MockMessageRepository::new()),
            verifications: Arc::new(MockEmailVerificationRepository::new()),
        }
    }
}

/// Outbound adapters and process-wide helpers
#[derive(Clone)]
pub struct Adapters {
    pub mail: Arc<dyn MailServiceTrait>,
    pub blob_store: Arc<dyn BlobStore>,
    pub hasher: Arc<dyn CredentialHasher>,
    pub clock: Arc<dyn Clock + Send + Sync>,
}

pub struct AppState {
    pub accounts: Accounts,
    pub verification: Verification,
    pub applications: Applications,
    pub messages: Messages,
    pub statistics: Statistics,
    pub media: Media,
    /// Probed by `/health` when present
    pub database: Option<DatabasePool>,
}

impl AppState {
    pub fn new(
        repositories: Repositories,
        adapters: Adapters,
        verification_config: VerificationServiceConfig,
    ) -> Self {
        let Repositories {
            users,
            applications,
            messages,
            verifications,
        } = repositories;

        Self {
            accounts: AccountService::new(users.clone(), adapters.hasher.clone()),
            verification: VerificationService::new(
                verifications,
                users.clone(),
                adapters.mail,
                adapters.hasher,
                adapters.clock,
                verification_config,
            ),
            applications: ApplicationService::new(applications.clone()),
            messages: MessageService::new(messages),
            statistics: StatisticsService::new(users, applications),
            media: MediaService::new(adapters.blob_store),
            database: None,
        }
    }

    pub fn with_database(mut self, pool: DatabasePool) -> Self {
        self.database = Some(pool);
        self
    }
}
