//! Prometheus metrics for request counting.
//!
//! Recording goes through the `metrics` facade. Until a recorder is installed
//! every call here is a no-op.

use std::net::SocketAddr;

use metrics::{counter, describe_counter};
use metrics_exporter_prometheus::PrometheusBuilder;
use tracing::{debug, info};

use crate::error::{Result, ServerError};

// === Metric Name Constants ===

/// Requests served counter metric name.
pub const METRIC_HTTP_REQUESTS: &str = "http_requests_total";

/// Install the exporter when an address is given, then register metric
/// descriptions. Call once at startup.
pub fn setup(exporter: Option<SocketAddr>) -> Result<()> {
    if let Some(addr) = exporter {
        install_exporter(addr)?;
    }

    init_metrics();
    Ok(())
}

/// Initialize all metric descriptions.
///
/// Descriptions go to the recorder current at call time, so this runs after
/// [`install_exporter`].
pub fn init_metrics() {
    describe_counter!(
        METRIC_HTTP_REQUESTS,
        "Total number of requests answered by a registered route"
    );

    debug!("Metrics initialized");
}

/// Install the Prometheus recorder with its own HTTP listener.
///
/// Must be called from within a tokio runtime.
pub fn install_exporter(addr: SocketAddr) -> Result<()> {
    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .map_err(|e| ServerError::Metrics(e.to_string()))?;

    info!("Prometheus exporter listening on {}", addr);
    Ok(())
}

/// Increment the request counter for a route.
pub fn inc_http_requests(route: &'static str) {
    counter!(METRIC_HTTP_REQUESTS, "route" => route).increment(1);
}
