//! Health check endpoints
//!
//! Liveness and readiness probes for deployment monitoring. The
//! service has no hard runtime dependency that can degrade silently
//! (storage errors surface per-request), so readiness reports the
//! application component only.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::SystemTime;

/// Health check status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// Service is healthy and ready
    Healthy,
    /// Service is degraded but operational
    Degraded,
    /// Service is unhealthy
    Unhealthy,
}

/// Individual component health
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentHealth {
    /// Component status
    pub status: HealthStatus,
    /// Optional message with details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ComponentHealth {
    /// Create a healthy component
    #[must_use]
    pub const fn healthy() -> Self {
        Self {
            status: HealthStatus::Healthy,
            message: None,
        }
    }

    /// Create an unhealthy component
    #[must_use]
    pub fn unhealthy(message: impl Into<String>) -> Self {
        Self {
            status: HealthStatus::Unhealthy,
            message: Some(message.into()),
        }
    }
}

/// Overall health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    /// Overall status
    pub status: HealthStatus,
    /// Application version
    pub version: String,
    /// Timestamp of health check (Unix epoch)
    pub timestamp: u64,
    /// Individual component healths
    pub components: HashMap<String, ComponentHealth>,
}

impl HealthCheckResponse {
    /// Create new health check response
    #[must_use]
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            status: HealthStatus::Healthy,
            version: version.into(),
            timestamp: SystemTime::now()
                .duration_since(SystemTime::UNIX_EPOCH)
                .map_or(0, |d| d.as_secs()),
            components: HashMap::new(),
        }
    }

    /// Add component health
    pub fn add_component(&mut self, name: impl Into<String>, health: ComponentHealth) {
        self.components.insert(name.into(), health);
        self.recalculate_status();
    }

    fn recalculate_status(&mut self) {
        if self
            .components
            .values()
            .any(|c| c.status == HealthStatus::Unhealthy)
        {
            self.status = HealthStatus::Unhealthy;
        } else if self
            .components
            .values()
            .any(|c| c.status == HealthStatus::Degraded)
        {
            self.status = HealthStatus::Degraded;
        } else {
            self.status = HealthStatus::Healthy;
        }
    }

    /// Get HTTP status code based on health
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self.status {
            HealthStatus::Healthy | HealthStatus::Degraded => StatusCode::OK,
            HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for HealthCheckResponse {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(self)).into_response()
    }
}

/// Liveness probe handler: 200 OK while the process runs
#[allow(clippy::unused_async)]
pub async fn liveness() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// Readiness probe handler
#[allow(clippy::unused_async)]
pub async fn readiness() -> impl IntoResponse {
    let mut response = HealthCheckResponse::new(env!("CARGO_PKG_VERSION"));
    response.add_component("application", ComponentHealth::healthy());
    response
}

/// Comprehensive health check handler
#[allow(clippy::unused_async)]
pub async fn health_check() -> impl IntoResponse {
    let mut response = HealthCheckResponse::new(env!("CARGO_PKG_VERSION"));
    response.add_component("application", ComponentHealth::healthy());
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unhealthy_component_flips_overall_status() {
        let mut response = HealthCheckResponse::new("1.0.0");
        response.add_component("application", ComponentHealth::healthy());
        assert_eq!(response.status, HealthStatus::Healthy);
        assert_eq!(response.status_code(), StatusCode::OK);

        response.add_component("database", ComponentHealth::unhealthy("Connection failed"));
        assert_eq!(response.status, HealthStatus::Unhealthy);
        assert_eq!(response.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn probes_return_ok() {
        let response = liveness().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let response = readiness().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let response = health_check().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
