//! Destination resolution.
//!
//! - Fixed endpoint: `{protocol}://{host}{path?query}` of the inbound request
//! - Dynamic header: the absolute URL in `X-Forward-To`
//!
//! No restriction is placed on the hosts a dynamic destination may name.

use axum::http::{HeaderMap, Uri};
use url::Url;

use crate::config::schema::{FixedEndpoint, RelayMode};
use crate::relay::error::RelayError;
use crate::relay::headers::X_FORWARD_TO;

/// Work out where an inbound request should be relayed to.
pub fn resolve_destination(mode: &RelayMode, uri: &Uri, headers: &HeaderMap) -> Result<Url, RelayError> {
    match mode {
        RelayMode::FixedEndpoint(endpoint) => fixed_destination(endpoint, uri),
        RelayMode::DynamicHeader => header_destination(headers),
    }
}

fn fixed_destination(endpoint: &FixedEndpoint, uri: &Uri) -> Result<Url, RelayError> {
    let path = uri.path_and_query().map(|p| p.as_str()).unwrap_or("/");
    let raw = format!("{}://{}{}", endpoint.protocol, endpoint.host, path);

    Url::parse(&raw).map_err(|source| RelayError::EndpointUrl { raw, source })
}

fn header_destination(headers: &HeaderMap) -> Result<Url, RelayError> {
    let value = match headers.get(X_FORWARD_TO) {
        Some(value) if !value.is_empty() => value,
        _ => return Err(RelayError::MissingDestination),
    };

    let raw = value.to_str().map_err(|_| RelayError::InvalidDestinationUrl {
        reason: "header value is not visible ASCII".into(),
    })?;

    Url::parse(raw).map_err(|e| RelayError::InvalidDestinationUrl { reason: e.to_string() })
}
