//! Process-level serving: metrics exporter, listener, graceful shutdown.

use std::future::Future;

use tokio::net::TcpListener;
use tracing::{info, instrument};

use crate::api::create_app;
use crate::config::Config;
use crate::error::Result;
use crate::metrics;
use crate::utils::shutdown_signal;

/// Bind the configured address and serve until a shutdown signal.
#[instrument(skip(config), fields(host = %config.host, port = config.port))]
pub async fn serve(config: Config) -> Result<()> {
    metrics::setup(config.metrics_addr()?)?;

    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    info!("HTTP server listening on {}", listener.local_addr()?);

    serve_on(listener, &config, shutdown_signal()).await
}

/// Serve the application on an already bound listener until `shutdown`
/// resolves.
pub async fn serve_on<F>(listener: TcpListener, config: &Config, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = create_app(config);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("HTTP server stopped");
    Ok(())
}
