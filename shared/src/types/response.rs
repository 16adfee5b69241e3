//! Response bodies shared by the HTTP handlers

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Plain acknowledgement body, e.g. `{"message": "Password updated"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall health status
    pub status: HealthStatus,

    /// Individual dependency checks, keyed by name
    pub services: HashMap<String, HealthStatus>,

    /// Server timestamp
    pub timestamp: DateTime<Utc>,

    /// Server version
    pub version: String,
}

impl HealthResponse {
    /// Build a response whose overall status is the worst of its checks
    pub fn from_checks(services: HashMap<String, HealthStatus>, version: impl Into<String>) -> Self {
        let status = if services.values().all(|s| *s == HealthStatus::Healthy) {
            HealthStatus::Healthy
        } else {
            HealthStatus::Unhealthy
        };
        Self {
            status,
            services,
            timestamp: Utc::now(),
            version: version.into(),
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.status == HealthStatus::Healthy
    }
}

/// Health status enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_response_worst_status() {
        let mut checks = HashMap::new();
        checks.insert("database".to_string(), HealthStatus::Unhealthy);
        let response = HealthResponse::from_checks(checks, "0.1.0");
        assert!(!response.is_healthy());

        let mut checks = HashMap::new();
        checks.insert("database".to_string(), HealthStatus::Healthy);
        assert!(HealthResponse::from_checks(checks, "0.1.0").is_healthy());
    }
}
