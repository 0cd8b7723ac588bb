//! `cors-relay`: fixed-endpoint CORS relay.
//!
//! ```text
//! cors-relay --endpoint example.com --listen 8080 [--protocol https]
//!
//!     GET http://relay:8080/api/foo  ──▶  GET https://example.com/api/foo
//! ```
//!
//! Every response carries `Access-Control-Allow-Origin: *`, so browser code
//! on any origin can read it.

use clap::Parser;

use cors_relay::config::cli::FixedEndpointArgs;
use cors_relay::config::RelayConfig;
use cors_relay::lifecycle;
use cors_relay::observability::logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = FixedEndpointArgs::parse();

    logging::init_logging();
    tracing::info!("cors-relay v{} starting", env!("CARGO_PKG_VERSION"));

    let config = RelayConfig::try_from(args)?;
    lifecycle::serve(config).await?;

    Ok(())
}
