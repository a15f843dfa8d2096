//! Unified error types for the status server.

use thiserror::Error;

/// Unified error type for the status server.
///
/// Request handling never produces one of these: unmatched routes and
/// malformed requests are answered by the router itself. These cover startup.
#[derive(Error, Debug)]
pub enum ServerError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Configuration loaded but failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Prometheus exporter could not be installed.
    #[error("metrics error: {0}")]
    Metrics(String),

    /// IO error (bind, accept).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, ServerError>;
