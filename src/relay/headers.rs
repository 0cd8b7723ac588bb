//! Header allow-lists and CORS headers.
//!
//! Only the headers named here cross the relay, in either direction.
//! Everything else is dropped without notice.

use axum::http::header::{
    self, HeaderMap, HeaderName, HeaderValue, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
};

/// Header carrying the absolute destination URL in dynamic-header mode.
pub const X_FORWARD_TO: HeaderName = HeaderName::from_static("x-forward-to");

/// Inbound request headers copied onto the outbound request.
pub const FORWARDED_REQUEST_HEADERS: [HeaderName; 2] = [header::CACHE_CONTROL, header::USER_AGENT];

/// Upstream response headers copied onto the response to the caller.
pub const FORWARDED_RESPONSE_HEADERS: [HeaderName; 7] = [
    header::DATE,
    header::CONTENT_LENGTH,
    header::CONTENT_TYPE,
    header::EXPIRES,
    header::LOCATION,
    header::PRAGMA,
    header::SERVER,
];

/// Value of `Access-Control-Allow-Origin` on every response.
pub const ALLOW_ANY_ORIGIN: HeaderValue = HeaderValue::from_static("*");

/// Copy the allow-listed headers of `source` into a fresh map.
///
/// Missing headers are skipped, as are empty values. Repeated headers keep
/// all their values in order.
pub fn filter_headers(source: &HeaderMap, allow_list: &[HeaderName]) -> HeaderMap {
    let mut filtered = HeaderMap::new();
    for name in allow_list {
        for value in source.get_all(name) {
            if !value.is_empty() {
                filtered.append(name.clone(), value.clone());
            }
        }
    }
    filtered
}

/// Headers sent upstream for an inbound request.
pub fn forwarded_request_headers(inbound: &HeaderMap) -> HeaderMap {
    filter_headers(inbound, &FORWARDED_REQUEST_HEADERS)
}

/// Headers relayed back to the caller from an upstream response.
pub fn forwarded_response_headers(upstream: &HeaderMap) -> HeaderMap {
    filter_headers(upstream, &FORWARDED_RESPONSE_HEADERS)
}

/// Headers answering a CORS preflight.
pub fn preflight_headers() -> [(HeaderName, HeaderValue); 2] {
    [
        (ACCESS_CONTROL_ALLOW_HEADERS, HeaderValue::from_static("x-forward-to")),
        (ACCESS_CONTROL_ALLOW_METHODS, HeaderValue::from_static("GET")),
    ]
}
