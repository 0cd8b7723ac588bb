//! Startup orchestration.
//!
//! # Responsibilities
//! - Start the metrics exporter, if configured
//! - Bind the listener and serve until a termination signal
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - The listener binds last, so traffic only arrives once ready

use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::{ConfigError, RelayConfig};
use crate::http::HttpServer;
use crate::lifecycle::shutdown::Shutdown;
use crate::lifecycle::signals::shutdown_on_signal;
use crate::observability::metrics;

/// Errors that stop the relay from serving.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to install metrics exporter: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),

    #[error("failed to bind {address}: {source}")]
    Bind {
        address: std::net::SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Run a relay with a validated configuration until Ctrl+C or SIGTERM.
pub async fn serve(config: RelayConfig) -> Result<(), StartupError> {
    match serde_json::to_string(&config) {
        Ok(options) => tracing::info!(options = %options, "Relay options"),
        Err(e) => tracing::warn!(error = %e, "Could not serialize relay options"),
    }

    if let Some(addr) = config.metrics_address {
        metrics::install_exporter(addr)?;
    }

    let address = config.listen_address();
    let server = HttpServer::new(config)?;

    let listener = TcpListener::bind(address)
        .await
        .map_err(|source| StartupError::Bind { address, source })?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.signal();
    tokio::spawn(shutdown_on_signal(shutdown));

    server.run(listener, server_shutdown).await.map_err(StartupError::Serve)?;

    tracing::info!("Shutdown complete");
    Ok(())
}
