//! HTTP server setup and the relay handler.
//!
//! # Responsibilities
//! - Create the Axum router (every path, every method goes to the relay)
//! - Wire up middleware (tracing, request ID, CORS origin header)
//! - Answer CORS preflights in dynamic-header mode
//! - Resolve the destination, forward, stream the response back
//! - Serve until shutdown is signalled

use axum::{
    body::Body,
    extract::State,
    http::{header::ACCESS_CONTROL_ALLOW_ORIGIN, Method, Request, StatusCode},
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use std::sync::Arc;
use std::time::Instant;
use tokio::net::TcpListener;
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};

use crate::config::{validate_config, ConfigError, RelayConfig, RelayMode};
use crate::http::request::{request_id_layer, request_id_of};
use crate::lifecycle::shutdown::ShutdownSignal;
use crate::observability::metrics;
use crate::relay::{
    headers::{forwarded_request_headers, preflight_headers, ALLOW_ANY_ORIGIN},
    resolve_destination,
    upstream::relay_response,
    RelayError, UpstreamClient,
};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<RelayConfig>,
    pub upstream: UpstreamClient,
}

/// The relay's HTTP server. Built once at startup.
pub struct HttpServer {
    router: Router,
    config: Arc<RelayConfig>,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: RelayConfig) -> Result<Self, ConfigError> {
        validate_config(&config)?;
        let upstream = UpstreamClient::new(config.upstream_timeout());
        let config = Arc::new(config);

        let state = AppState {
            config: config.clone(),
            upstream,
        };

        Ok(Self {
            router: Self::build_router(state),
            config,
        })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/{*path}", any(relay_handler))
            .route("/", any(relay_handler))
            .with_state(state)
            .layer(request_id_layer())
            .layer(TraceLayer::new_for_http())
            .layer(SetResponseHeaderLayer::overriding(ACCESS_CONTROL_ALLOW_ORIGIN, ALLOW_ANY_ORIGIN))
    }

    /// Run the server until `shutdown` fires.
    pub async fn run(self, listener: TcpListener, shutdown: ShutdownSignal) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            mode = self.config.mode.label(),
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.wait().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// The router, for driving the relay without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &RelayConfig {
        &self.config
    }
}

/// Relay one inbound request.
async fn relay_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    let start_time = Instant::now();
    let request_id = request_id_of(&request);
    let mode = state.config.mode.label();

    tracing::debug!(
        request_id = %request_id,
        method = %request.method(),
        uri = %request.uri(),
        "Relaying request"
    );

    let response = match relay(&state, request).await {
        Ok(response) => response,
        Err(e) => {
            if e.is_client_error() {
                tracing::warn!(request_id = %request_id, error = %e, "Rejected request");
            } else {
                tracing::error!(request_id = %request_id, error = %e, "Upstream error");
            }
            e.into_response()
        }
    };

    metrics::record_request(mode, response.status(), start_time);
    response
}

async fn relay(state: &AppState, request: Request<Body>) -> Result<Response, RelayError> {
    let (parts, _body) = request.into_parts();

    if matches!(state.config.mode, RelayMode::DynamicHeader) && parts.method == Method::OPTIONS {
        return Ok((StatusCode::NO_CONTENT, preflight_headers()).into_response());
    }

    let destination = resolve_destination(&state.config.mode, &parts.uri, &parts.headers)?;
    let headers = forwarded_request_headers(&parts.headers);

    let upstream = state.upstream.get(&destination, headers).await?;
    tracing::info!(destination = %destination, status = %upstream.status(), "Relayed");

    Ok(relay_response(&destination, upstream))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UpstreamProtocol;
    use axum::body::to_bytes;
    use tower::ServiceExt;

    fn dynamic_router() -> Router {
        HttpServer::new(RelayConfig::dynamic_header(9090)).unwrap().router()
    }

    async fn send(router: Router, request: Request<Body>) -> (Response, String) {
        let response = router.oneshot(request).await.unwrap();
        let (parts, body) = response.into_parts();
        let bytes = to_bytes(body, usize::MAX).await.unwrap();
        (
            Response::from_parts(parts, Body::empty()),
            String::from_utf8(bytes.to_vec()).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_preflight_is_answered_locally() {
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/")
            .header("x-forward-to", "http://127.0.0.1:1/never")
            .body(Body::empty())
            .unwrap();

        let (response, body) = send(dynamic_router(), request).await;

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert_eq!(response.headers()["access-control-allow-origin"], "*");
        assert_eq!(response.headers()["access-control-allow-headers"], "x-forward-to");
        assert_eq!(response.headers()["access-control-allow-methods"], "GET");
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_missing_forward_to() {
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();

        let (response, body) = send(dynamic_router(), request).await;

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(response.headers()["access-control-allow-origin"], "*");
        assert_eq!(body, "mandatory X-Forward-To header missing");
    }

    #[tokio::test]
    async fn test_unparseable_forward_to() {
        let request = Request::builder()
            .uri("/some/path")
            .header("x-forward-to", "not a url")
            .body(Body::empty())
            .unwrap();

        let (response, body) = send(dynamic_router(), request).await;

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(response.headers()["access-control-allow-origin"], "*");
        assert_eq!(body, "parsing of forward URL failed.");
    }

    #[tokio::test]
    async fn test_unsupported_scheme_is_a_transport_error() {
        let request = Request::builder()
            .uri("/")
            .header("x-forward-to", "ftp://example.com/listing.xml")
            .body(Body::empty())
            .unwrap();

        let (response, body) = send(dynamic_router(), request).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.headers()["access-control-allow-origin"], "*");
        assert!(body.is_empty());
    }

    #[test]
    fn test_server_keeps_config() {
        let server = HttpServer::new(RelayConfig::dynamic_header(9090)).unwrap();
        assert_eq!(server.config().mode, RelayMode::DynamicHeader);
    }

    #[test]
    fn test_server_refuses_unusable_endpoint() {
        let config = RelayConfig::fixed_endpoint("example.com:99999", UpstreamProtocol::Https, 8080);
        assert!(matches!(HttpServer::new(config), Err(ConfigError::InvalidEndpoint { .. })));
    }
}
