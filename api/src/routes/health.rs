use actix_web::{web, HttpResponse};
use std::collections::HashMap;

use cr_shared::types::{HealthResponse, HealthStatus};

use crate::state::AppState;

/// Handler for GET /health
///
/// Answers 503 when the database is configured but unreachable.
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let mut services = HashMap::new();

    if let Some(database) = &state.database {
        let status = match database.health_check().await {
            Ok(true) => HealthStatus::Healthy,
            _ => HealthStatus::Unhealthy,
        };
        services.insert("database".to_string(), status);
    }

    let response = HealthResponse::from_checks(services, env!("CARGO_PKG_VERSION"));
    if response.is_healthy() {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}
