//! CORS Relay Library
//!
//! Forwards browser requests to an upstream so that the browser's
//! same-origin policy does not get in the way.
//!
//! ```text
//!     Browser ──▶ http::server ──▶ relay::destination ──▶ relay::upstream ──▶ Upstream
//!        ▲                                                       │
//!        └──────── relay::headers (allow-lists, CORS) ◀─────────┘
//! ```

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod relay;

pub use config::RelayConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
