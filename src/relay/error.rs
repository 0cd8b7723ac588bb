//! Per-request failure taxonomy.
//!
//! | Variant                 | Status | Body                                     |
//! |-------------------------|--------|------------------------------------------|
//! | `MissingDestination`    | 422    | `mandatory X-Forward-To header missing`  |
//! | `InvalidDestinationUrl` | 422    | `parsing of forward URL failed.`         |
//! | `EndpointUrl`           | 500    | empty                                    |
//! | `UpstreamTransport`     | 500    | empty                                    |

use axum::http::uri::InvalidUri;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// A failure that ends one relayed request. The relay keeps serving.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("mandatory X-Forward-To header missing")]
    MissingDestination,

    #[error("parsing of forward URL failed.")]
    InvalidDestinationUrl { reason: String },

    /// The fixed endpoint and the inbound path do not form a URL.
    #[error("cannot build upstream URL from '{raw}': {source}")]
    EndpointUrl {
        raw: String,
        #[source]
        source: url::ParseError,
    },

    #[error("upstream request to {destination} failed: {source}")]
    UpstreamTransport {
        destination: Url,
        #[source]
        source: UpstreamError,
    },
}

/// Why the outbound exchange could not be carried out.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error(transparent)]
    Http(#[from] hyper_util::client::legacy::Error),

    #[error("invalid request URI: {0}")]
    Uri(#[source] InvalidUri),

    #[error("no response head within {0:?}")]
    Timeout(Duration),

    #[error("no protocol handler for scheme '{0}'")]
    UnsupportedScheme(String),
}

impl RelayError {
    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::MissingDestination | RelayError::InvalidDestinationUrl { .. } => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            RelayError::EndpointUrl { .. } | RelayError::UpstreamTransport { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// True for errors caused by the caller's request rather than the upstream.
    pub fn is_client_error(&self) -> bool {
        self.status().is_client_error()
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            RelayError::EndpointUrl { .. } | RelayError::UpstreamTransport { .. } => status.into_response(),
            client_error => (status, client_error.to_string()).into_response(),
        }
    }
}
