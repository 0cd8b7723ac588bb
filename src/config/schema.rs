//! Configuration schema definitions.
//!
//! All types derive Serde traits so the effective configuration can be
//! logged at startup.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

/// Root configuration for a relay process.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RelayConfig {
    /// Port the relay accepts browser connections on.
    pub listen_port: u16,

    /// Interface to bind (default: all interfaces).
    pub bind_address: IpAddr,

    /// How the destination of each request is determined.
    pub mode: RelayMode,

    /// Upper bound for a whole upstream exchange, in seconds.
    /// `None` waits for the upstream indefinitely.
    pub upstream_timeout_secs: Option<u64>,

    /// Address to serve Prometheus metrics on, if any.
    pub metrics_address: Option<SocketAddr>,
}

impl RelayConfig {
    /// Relay everything to `protocol://host`, keeping the inbound path.
    pub fn fixed_endpoint(host: impl Into<String>, protocol: UpstreamProtocol, listen_port: u16) -> Self {
        Self::with_mode(
            RelayMode::FixedEndpoint(FixedEndpoint {
                host: host.into(),
                protocol,
            }),
            listen_port,
        )
    }

    /// Relay each request to the URL given in its `X-Forward-To` header.
    pub fn dynamic_header(listen_port: u16) -> Self {
        Self::with_mode(RelayMode::DynamicHeader, listen_port)
    }

    fn with_mode(mode: RelayMode, listen_port: u16) -> Self {
        Self {
            listen_port,
            bind_address: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            mode,
            upstream_timeout_secs: None,
            metrics_address: None,
        }
    }

    /// Socket address the listener binds to.
    pub fn listen_address(&self) -> SocketAddr {
        SocketAddr::new(self.bind_address, self.listen_port)
    }

    pub fn upstream_timeout(&self) -> Option<Duration> {
        self.upstream_timeout_secs.map(Duration::from_secs)
    }
}

/// Destination resolution strategy.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RelayMode {
    /// Host fixed at startup; path and query come from the inbound request.
    FixedEndpoint(FixedEndpoint),
    /// Absolute destination URL supplied per request in `X-Forward-To`.
    DynamicHeader,
}

impl RelayMode {
    /// Short label used in logs and metrics.
    pub fn label(&self) -> &'static str {
        match self {
            RelayMode::FixedEndpoint(_) => "fixed_endpoint",
            RelayMode::DynamicHeader => "dynamic_header",
        }
    }
}

/// The single upstream of a fixed-endpoint relay.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FixedEndpoint {
    /// Upstream authority, `host[:port]`.
    pub host: String,

    /// Scheme used to reach the upstream.
    pub protocol: UpstreamProtocol,
}

/// Outbound protocol handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum UpstreamProtocol {
    Http,
    #[default]
    Https,
}

impl UpstreamProtocol {
    /// Pick the handler for a URL scheme. Only `http` and `https` have one.
    pub fn from_scheme(scheme: &str) -> Option<Self> {
        match scheme {
            "http" => Some(UpstreamProtocol::Http),
            "https" => Some(UpstreamProtocol::Https),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UpstreamProtocol::Http => "http",
            UpstreamProtocol::Https => "https",
        }
    }
}

impl fmt::Display for UpstreamProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
