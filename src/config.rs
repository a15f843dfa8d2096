//! Application configuration loaded from environment variables.

use std::net::{IpAddr, SocketAddr};

use serde::Deserialize;
use strum::{Display, EnumString};

use crate::error::{Result, ServerError};

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Default)]
#[strum(ascii_case_insensitive)]
pub enum LogFormat {
    /// Human-readable, multi-field lines.
    #[strum(to_string = "pretty", serialize = "text")]
    #[default]
    Pretty,
    /// One JSON object per event.
    #[strum(to_string = "json")]
    Json,
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Server Configuration ===
    /// Address to bind the HTTP listener on.
    #[serde(default = "default_host")]
    pub host: String,

    /// HTTP server port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Serve `/openapi.json` and `/docs`.
    #[serde(default = "default_true")]
    pub enable_docs: bool,

    // === Observability ===
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,

    /// Log format: pretty or json.
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Port for the Prometheus exporter. Metrics are not exported when unset.
    #[serde(default)]
    pub metrics_port: Option<u16>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            enable_docs: default_true(),
            rust_log: default_log_level(),
            log_format: default_log_format(),
            metrics_port: None,
        }
    }
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Ok(envy::from_env()?)
    }

    /// Apply command-line overrides. A flag that is present wins over the
    /// environment; an absent one keeps the loaded value.
    pub fn with_overrides(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port {
            self.port = port;
        }
        self
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            return Err(ServerError::InvalidConfig("PORT must not be 0".to_string()));
        }

        self.ip()?;

        if self.log_format.parse::<LogFormat>().is_err() {
            return Err(ServerError::InvalidConfig(format!(
                "LOG_FORMAT must be 'pretty' or 'json', got '{}'",
                self.log_format
            )));
        }

        match self.metrics_port {
            Some(0) => {
                return Err(ServerError::InvalidConfig(
                    "METRICS_PORT must not be 0".to_string(),
                ))
            }
            Some(p) if p == self.port => {
                return Err(ServerError::InvalidConfig(
                    "METRICS_PORT must differ from PORT".to_string(),
                ))
            }
            _ => {}
        }

        Ok(())
    }

    /// Parsed bind address.
    pub fn ip(&self) -> Result<IpAddr> {
        self.host
            .parse()
            .map_err(|_| ServerError::InvalidConfig(format!("HOST is not an IP address: {}", self.host)))
    }

    /// Socket address for the HTTP listener.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        Ok(SocketAddr::new(self.ip()?, self.port))
    }

    /// Socket address for the Prometheus exporter, if enabled.
    pub fn metrics_addr(&self) -> Result<Option<SocketAddr>> {
        match self.metrics_port {
            Some(port) => Ok(Some(SocketAddr::new(self.ip()?, port))),
            None => Ok(None),
        }
    }

    /// Effective log format. Falls back to pretty on unrecognized values.
    pub fn log_format(&self) -> LogFormat {
        self.log_format.parse().unwrap_or_default()
    }
}
