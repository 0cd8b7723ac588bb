//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, CORS header on every response)
//!     → request.rs (request ID for log correlation)
//!     → relay handler (preflight, destination, upstream)
//!     → streamed response to the caller
//! ```

pub mod request;
pub mod server;

pub use request::{request_id_layer, X_REQUEST_ID};
pub use server::HttpServer;
