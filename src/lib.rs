//! Minimal HTTP status service.
//!
//! Two routes, both returning literal JSON payloads:
//!
//! ```text
//! GET /        -> {"status":"OK","code":200}
//! GET /health  -> {"status":"healthy"}
//! ```
//!
//! Anything else is answered by the router's defaults (404, 405).
//!
//! # Modules
//!
//! - [`api`]: Routes, handlers, and the OpenAPI description
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`metrics`]: Request counters and Prometheus exporter
//! - [`server`]: Listener and graceful shutdown
//! - [`telemetry`]: Logging setup
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod server;
pub mod telemetry;
pub mod utils;

pub use config::Config;
pub use error::{Result, ServerError};
