//! Metrics collection and exposition.
//!
//! # Metrics
//! - `relay_requests_total` (counter): requests by mode and response status
//! - `relay_request_duration_seconds` (histogram): time until the response
//!   head is ready, by mode
//!
//! Nothing is exported unless [`install_exporter`] was called.

use axum::http::StatusCode;
use metrics::{counter, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};
use std::net::SocketAddr;
use std::time::Instant;

/// Serve Prometheus metrics on `addr`. Must run inside a Tokio runtime.
pub fn install_exporter(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

/// Record one relayed request.
pub fn record_request(mode: &'static str, status: StatusCode, start_time: Instant) {
    counter!(
        "relay_requests_total",
        "mode" => mode,
        "status" => status.as_u16().to_string()
    )
    .increment(1);

    histogram!("relay_request_duration_seconds", "mode" => mode).record(start_time.elapsed().as_secs_f64());
}
