//! Command line arguments for the two relay binaries.

use clap::{Args, Parser};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::config::schema::{RelayConfig, UpstreamProtocol};
use crate::config::validation::{validate_config, ConfigError};

/// `cors-relay`: relay every request to one fixed upstream endpoint.
#[derive(Debug, Parser)]
#[command(name = "cors-relay")]
#[command(about = "Relay requests to a fixed upstream endpoint with CORS enabled", long_about = None)]
pub struct FixedEndpointArgs {
    /// Upstream host, optionally with port (e.g. `example.com:8443`)
    #[arg(long, value_name = "HOST[:PORT]")]
    pub endpoint: String,

    /// Port to listen on
    #[arg(long, value_name = "PORT")]
    pub listen: u16,

    /// Protocol used to reach the upstream
    #[arg(long, value_enum, default_value_t = UpstreamProtocol::Https)]
    pub protocol: UpstreamProtocol,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// `cors-forward`: relay each request to the URL in its `X-Forward-To` header.
#[derive(Debug, Parser)]
#[command(name = "cors-forward")]
#[command(about = "Relay requests to the URL given in the X-Forward-To header with CORS enabled", long_about = None)]
pub struct DynamicHeaderArgs {
    /// Port to listen on
    #[arg(long, value_name = "PORT")]
    pub listen: u16,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Options shared by both relays.
#[derive(Debug, Args)]
pub struct CommonArgs {
    /// Interface to bind
    #[arg(long, value_name = "IP", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub bind: IpAddr,

    /// Abort upstream exchanges that take longer than this many seconds
    #[arg(long, value_name = "SECS")]
    pub upstream_timeout: Option<u64>,

    /// Serve Prometheus metrics on this address
    #[arg(long, value_name = "IP:PORT")]
    pub metrics_address: Option<SocketAddr>,
}

impl CommonArgs {
    fn apply(self, config: &mut RelayConfig) {
        config.bind_address = self.bind;
        config.upstream_timeout_secs = self.upstream_timeout;
        config.metrics_address = self.metrics_address;
    }
}

impl TryFrom<FixedEndpointArgs> for RelayConfig {
    type Error = ConfigError;

    fn try_from(args: FixedEndpointArgs) -> Result<Self, Self::Error> {
        let mut config = RelayConfig::fixed_endpoint(args.endpoint, args.protocol, args.listen);
        args.common.apply(&mut config);
        validate_config(&config)?;
        Ok(config)
    }
}

impl TryFrom<DynamicHeaderArgs> for RelayConfig {
    type Error = ConfigError;

    fn try_from(args: DynamicHeaderArgs) -> Result<Self, Self::Error> {
        let mut config = RelayConfig::dynamic_header(args.listen);
        args.common.apply(&mut config);
        validate_config(&config)?;
        Ok(config)
    }
}
