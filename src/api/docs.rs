//! OpenAPI description and the Swagger UI.

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{self, HealthStatus, RootStatus};

/// Path of the machine-readable API description.
pub const OPENAPI_PATH: &str = "/openapi.json";

/// Path of the Swagger UI. `/docs` redirects to `/docs/`.
pub const DOCS_PATH: &str = "/docs";

/// OpenAPI document for the status routes.
#[derive(OpenApi)]
#[openapi(
    info(title = "status-server", description = "Static status and health endpoints"),
    paths(handlers::root, handlers::health),
    components(schemas(RootStatus, HealthStatus)),
    tags(
        (name = "Status", description = "Service status"),
        (name = "Health", description = "Liveness probe")
    )
)]
pub struct ApiDoc;

/// Router with the description routes only: the OpenAPI document and the
/// Swagger UI pointed at it.
pub fn docs_router() -> Router {
    Router::new().merge(SwaggerUi::new(DOCS_PATH).url(OPENAPI_PATH, ApiDoc::openapi()))
}
