//! Shared fixtures for the HTTP integration tests
//!
//! Every test gets its own in-memory repositories, a recording mailer, a clock
//! it can move and a throwaway static directory.

#![allow(dead_code)]

use actix_web::web;
use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use mockable::Clock;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

use cr_api::state::{Adapters, AppState, Repositories};
use cr_core::services::VerificationServiceConfig;
use cr_core::BcryptHasher;
use cr_infra::{LocalBlobStore, MockMailService};
use cr_shared::AppConfig;

/// Clock that only moves when told to
pub struct MutableClock(Mutex<DateTime<Utc>>);

impl MutableClock {
    pub fn advance_seconds(&self, seconds: i64) {
        *self.0.lock().unwrap() += Duration::seconds(seconds);
    }
}

impl Clock for MutableClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *self.0.lock().unwrap()
    }
}

pub struct TestContext {
    pub state: web::Data<AppState>,
    pub config: AppConfig,
    pub repositories: Repositories,
    pub mail: MockMailService,
    pub clock: Arc<MutableClock>,
    pub static_dir: TempDir,
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_verification(VerificationServiceConfig::default())
    }

    pub fn with_verification(verification: VerificationServiceConfig) -> Self {
        let static_dir = tempfile::tempdir().unwrap();
        let mut config = AppConfig::default();
        config.storage.static_dir = static_dir.path().display().to_string();

        let repositories = Repositories::in_memory();
        let mail = MockMailService::new();
        let clock = Arc::new(MutableClock(Mutex::new(
            Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
        )));

        let adapters = Adapters {
            mail: Arc::new(mail.clone()),
            blob_store: Arc::new(LocalBlobStore::from_config(&config.storage)),
            // Minimum cost keeps the suite fast
            hasher: Arc::new(BcryptHasher::new(4)),
            clock: clock.clone(),
        };
        let state = web::Data::new(AppState::new(
            repositories.clone(),
            adapters,
            verification,
        ));

        Self {
            state,
            config,
            repositories,
            mail,
            clock,
            static_dir,
        }
    }
}

/// A tiny JPEG header, unpadded base64
pub const JPEG_BASE64: &str = "/9j/4AAQSkZJRg";
