//! Health check controller.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use pricegate_core::HealthStatus;
use serde::Serialize;
use utoipa::ToSchema;

/// Health of a single dependency.
#[derive(Debug, Serialize, ToSchema)]
pub struct ComponentHealth {
    /// `healthy`, `degraded` or `unhealthy`.
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl From<HealthStatus> for ComponentHealth {
    fn from(status: HealthStatus) -> Self {
        let label = status.label().to_string();
        let detail = match status {
            HealthStatus::Healthy => None,
            HealthStatus::Degraded(reason) | HealthStatus::Unhealthy(reason) => Some(reason),
        };
        Self { status: label, detail }
    }
}

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Health status.
    pub status: String,
    /// Application version.
    pub version: String,
    /// Cache store status.
    pub cache: ComponentHealth,
}

/// Creates the health router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        .route("/live", get(liveness_check))
}

/// Health check endpoint.
///
/// An unreachable cache only degrades the service; prices are still served
/// from the source, so the endpoint answers 200 either way.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let cache = state.cache_health.check().await;
    let status = if cache.is_unhealthy() { "degraded" } else { "healthy" };

    Json(HealthResponse {
        status: status.to_string(),
        version: state.version.to_string(),
        cache: cache.into(),
    })
}

/// Readiness check endpoint.
#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    responses(
        (status = 200, description = "Service is ready")
    )
)]
pub async fn readiness_check() -> impl IntoResponse {
    StatusCode::OK
}

/// Liveness check endpoint.
#[utoipa::path(
    get,
    path = "/live",
    tag = "health",
    responses(
        (status = 200, description = "Service is alive")
    )
)]
pub async fn liveness_check() -> impl IntoResponse {
    StatusCode::OK
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_health_from_status() {
        let healthy = ComponentHealth::from(HealthStatus::Healthy);
        assert_eq!(healthy.status, "healthy");
        assert!(healthy.detail.is_none());

        let down = ComponentHealth::from(HealthStatus::Unhealthy("connection refused".into()));
        assert_eq!(down.status, "unhealthy");
        assert_eq!(down.detail.as_deref(), Some("connection refused"));
    }
}
