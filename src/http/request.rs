//! Inbound request identification.
//!
//! Every inbound request gets an `x-request-id` (UUID v4) unless the caller
//! already sent one. The id only feeds the relay's own logs; it is not on
//! the request allow-list and therefore never reaches the upstream.

use axum::http::{HeaderName, Request};
use tower_http::request_id::{MakeRequestUuid, RequestId, SetRequestIdLayer};

pub const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Layer stamping request ids onto inbound requests.
pub fn request_id_layer() -> SetRequestIdLayer<MakeRequestUuid> {
    SetRequestIdLayer::x_request_id(MakeRequestUuid)
}

/// Request id for log lines, `"unknown"` if none was set.
pub fn request_id_of<B>(request: &Request<B>) -> String {
    request
        .extensions()
        .get::<RequestId>()
        .map(RequestId::header_value)
        .or_else(|| request.headers().get(X_REQUEST_ID))
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string()
}
