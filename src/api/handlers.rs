//! HTTP API handlers.
//!
//! Both handlers return literal payloads. Nothing from the request is read.

use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use crate::metrics;

/// Root status response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct RootStatus {
    /// Always "OK".
    #[schema(value_type = String, example = "OK")]
    pub status: &'static str,
    /// Always 200.
    #[schema(example = 200)]
    pub code: u16,
}

impl RootStatus {
    /// The one root payload.
    pub const OK: Self = Self {
        status: "OK",
        code: 200,
    };
}

/// Health check response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct HealthStatus {
    /// Always "healthy".
    #[schema(value_type = String, example = "healthy")]
    pub status: &'static str,
}

impl HealthStatus {
    /// The one health payload.
    pub const HEALTHY: Self = Self { status: "healthy" };
}

/// Root handler - always returns 200 with the status payload.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is up", body = RootStatus)
    ),
    tag = "Status"
)]
pub async fn root() -> Json<RootStatus> {
    metrics::inc_http_requests("/");
    Json(RootStatus::OK)
}

/// Health check handler - always returns 200.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthStatus)
    ),
    tag = "Health"
)]
pub async fn health() -> Json<HealthStatus> {
    metrics::inc_http_requests("/health");
    Json(HealthStatus::HEALTHY)
}
