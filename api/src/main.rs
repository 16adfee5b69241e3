use actix_web::{web, HttpServer};
use anyhow::Context;
use mockable::DefaultClock;
use std::sync::Arc;
use std::time::Duration;

use cr_api::state::{Adapters, AppState, Repositories};
use cr_api::telemetry::init_tracing;
use cr_api::create_app;
use cr_core::services::VerificationServiceConfig;
use cr_core::BcryptHasher;
use cr_infra::{create_mail_service, DatabasePool, LocalBlobStore};
use cr_shared::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;
    init_tracing(&config.logging)?;

    tracing::info!(
        environment = ?config.environment,
        bind = %config.server.bind_address(),
        "Starting CityReport API server"
    );

    let pool = DatabasePool::new(config.database.clone())
        .await
        .context("Failed to connect to the database")?;
    if config.database.run_migrations {
        pool.run_migrations().await?;
    }

    tokio::fs::create_dir_all(&config.storage.static_dir)
        .await
        .with_context(|| format!("Failed to create {}", config.storage.static_dir))?;

    let adapters = Adapters {
        mail: create_mail_service(&config.mail)?,
        blob_store: Arc::new(LocalBlobStore::from_config(&config.storage)),
        hasher: Arc::new(BcryptHasher::new(config.auth.bcrypt_cost)),
        clock: Arc::new(DefaultClock),
    };
    let state = web::Data::new(
        AppState::new(
            Repositories::mysql(&pool),
            adapters,
            VerificationServiceConfig::from(&config.auth.verification),
        )
        .with_database(pool.clone()),
    );

    if config.auth.verification.purge_enabled() {
        spawn_purge_task(
            state.clone(),
            Duration::from_secs(config.auth.verification.purge_interval_secs),
        );
    }

    let server_config = config.server.clone();
    let app_config = config.clone();
    let mut server = HttpServer::new(move || create_app(state.clone(), &app_config))
        .keep_alive(Duration::from_secs(server_config.keep_alive));
    // Zero keeps actix's default of one worker per core
    if server_config.workers > 0 {
        server = server.workers(server_config.workers);
    }
    server.bind(server_config.bind_address())?.run().await?;

    pool.close().await;
    Ok(())
}

/// Periodically delete verification codes that can no longer be used
fn spawn_purge_task(state: web::Data<AppState>, interval: Duration) {
    tracing::info!(interval_secs = interval.as_secs(), "Verification code purge enabled");
    actix_web::rt::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        loop {
            ticker.tick().await;
            if let Err(e) = state.verification.purge_expired().await {
                tracing::error!(error = %e, event = "verification_purge_failed", "Purge failed");
            }
        }
    });
}
