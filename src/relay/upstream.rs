//! Outbound side of the relay.
//!
//! # Responsibilities
//! - Issue the outbound GET with the allow-listed request headers
//! - Convert the upstream response into the caller's response
//! - Stream the body chunk by chunk, in order
//!
//! # Design Decisions
//! - The client adds nothing but `Host`; no `Accept`, no `User-Agent`
//! - Redirects are not followed; `Location` is relayed to the caller
//! - A body error after the head was sent aborts the caller's response

use axum::body::Body;
use axum::http::{HeaderMap, Request, Response, Uri};
use futures_util::TryStreamExt;
use hyper::body::Incoming;
use hyper_rustls::{HttpsConnector, HttpsConnectorBuilder};
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};
use std::time::Duration;
use url::Url;

use crate::config::schema::UpstreamProtocol;
use crate::relay::error::{RelayError, UpstreamError};
use crate::relay::headers::forwarded_response_headers;

/// HTTP client shared by every request of a relay.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    client: Client<HttpsConnector<HttpConnector>, Body>,
    timeout: Option<Duration>,
}

impl UpstreamClient {
    /// Build the client. `timeout` bounds the wait for the response head,
    /// connection setup included.
    pub fn new(timeout: Option<Duration>) -> Self {
        let connector = HttpsConnectorBuilder::new()
            .with_webpki_roots()
            .https_or_http()
            .enable_http1()
            .build();

        Self {
            client: Client::builder(TokioExecutor::new()).build(connector),
            timeout,
        }
    }

    /// Send a GET to `destination` and wait for the response head.
    pub async fn get(&self, destination: &Url, headers: HeaderMap) -> Result<Response<Incoming>, RelayError> {
        let transport_error = |source: UpstreamError| RelayError::UpstreamTransport {
            destination: destination.clone(),
            source,
        };

        let protocol = UpstreamProtocol::from_scheme(destination.scheme())
            .ok_or_else(|| transport_error(UpstreamError::UnsupportedScheme(destination.scheme().to_string())))?;

        let mut target = destination.clone();
        target.set_fragment(None);
        let uri: Uri = target.as_str().parse().map_err(|e| transport_error(UpstreamError::Uri(e)))?;

        let mut request = Request::new(Body::empty());
        *request.uri_mut() = uri;
        *request.headers_mut() = headers;

        tracing::debug!(destination = %destination, protocol = %protocol, "Sending upstream request");

        let response = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, self.client.request(request))
                .await
                .map_err(|_| transport_error(UpstreamError::Timeout(limit)))?,
            None => self.client.request(request).await,
        };

        response.map_err(|e| transport_error(e.into()))
    }
}

/// Turn an upstream response into the response for the caller.
///
/// The status is copied, headers pass through the response allow-list and
/// the body is streamed as it arrives.
pub fn relay_response(destination: &Url, upstream: Response<Incoming>) -> Response<Body> {
    let (parts, incoming) = upstream.into_parts();
    let destination = destination.clone();

    let body = Body::new(incoming).into_data_stream().inspect_err(move |e| {
        tracing::error!(destination = %destination, error = %e, "Upstream body stream failed");
    });

    let mut response = Response::new(Body::from_stream(body));
    *response.status_mut() = parts.status;
    *response.headers_mut() = forwarded_response_headers(&parts.headers);
    response
}
