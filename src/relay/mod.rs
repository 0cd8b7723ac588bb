//! Relay core: what crosses the forwarding boundary and where it goes.
//!
//! # Data Flow
//! ```text
//! inbound request
//!     → destination.rs (fixed endpoint + path, or X-Forward-To URL)
//!     → headers.rs (request allow-list)
//!     → upstream.rs (outbound GET)
//!     → headers.rs (response allow-list)
//!     → streamed back to the caller
//! ```
//!
//! # Design Decisions
//! - Stateless: nothing but the immutable config is shared between requests
//! - No retries; every failure is terminal for its request
//! - The upstream body is streamed, never buffered

pub mod destination;
pub mod error;
pub mod headers;
pub mod upstream;

pub use destination::resolve_destination;
pub use error::{RelayError, UpstreamError};
pub use headers::{FORWARDED_REQUEST_HEADERS, FORWARDED_RESPONSE_HEADERS, X_FORWARD_TO};
pub use upstream::UpstreamClient;
