//! `cors-forward`: CORS relay with a per-request destination.
//!
//! ```text
//! cors-forward --listen 9090
//!
//!     GET http://relay:9090/
//!     X-Forward-To: https://example.com/data.json  ──▶  GET https://example.com/data.json
//! ```
//!
//! Preflight `OPTIONS` requests are answered by the relay itself.

use clap::Parser;

use cors_relay::config::cli::DynamicHeaderArgs;
use cors_relay::config::RelayConfig;
use cors_relay::lifecycle;
use cors_relay::observability::logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = DynamicHeaderArgs::parse();

    logging::init_logging();
    tracing::info!("cors-forward v{} starting", env!("CARGO_PKG_VERSION"));

    let config = RelayConfig::try_from(args)?;
    lifecycle::serve(config).await?;

    Ok(())
}
