//! HTTP API route definitions.

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use super::docs::{self, DOCS_PATH, OPENAPI_PATH};
use super::handlers::{health, root};
use crate::config::Config;

/// Registered routes as (method, path, description), for the `routes` command.
pub const ROUTE_TABLE: &[(&str, &str, &str)] = &[
    ("GET", "/", "root status payload"),
    ("GET", "/health", "health payload"),
    ("GET", OPENAPI_PATH, "OpenAPI document (ENABLE_DOCS)"),
    ("GET", DOCS_PATH, "Swagger UI (ENABLE_DOCS)"),
];

/// Create the status router: `GET /` and `GET /health`, nothing else.
pub fn create_router() -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
}

/// Create the full application: status routes, optional docs routes, and
/// request tracing.
pub fn create_app(config: &Config) -> Router {
    let mut router = create_router();

    if config.enable_docs {
        router = router.merge(docs::docs_router());
    }

    router.layer(TraceLayer::new_for_http())
}
