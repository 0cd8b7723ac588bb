//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Relay handler produces:
//!     → logging.rs (structured log events via `tracing`)
//!     → metrics.rs (request counter, latency histogram)
//!
//! Consumers:
//!     → stdout (tracing-subscriber fmt layer)
//!     → Metrics endpoint (Prometheus scrape), when enabled
//! ```
//!
//! # Design Decisions
//! - Request ID flows through every relay log line
//! - Metrics are cheap no-ops until an exporter is installed

pub mod logging;
pub mod metrics;
