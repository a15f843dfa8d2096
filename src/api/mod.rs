//! HTTP API module: the status routes plus the API description surfaces.

pub mod docs;
pub mod handlers;
pub mod routes;

pub use routes::{create_app, create_router};
