//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (clap handles syntactic)
//! - Check the fixed endpoint is a bare `host[:port]` authority that forms
//!   a valid URL with its protocol
//! - Validate value ranges (port, timeout)
//!
//! # Design Decisions
//! - Validation is a pure function: &RelayConfig → Result<(), ConfigError>
//! - Runs before the listener is bound; any error is fatal

use axum::http::uri::Authority;
use thiserror::Error;
use url::Url;

use crate::config::schema::{FixedEndpoint, RelayConfig, RelayMode};

/// Startup configuration errors. The process does not start serving.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("--listen: port must be between 1 and 65535")]
    InvalidListenPort,

    #[error("--endpoint: '{endpoint}' is not a valid host[:port]")]
    InvalidEndpoint { endpoint: String },

    #[error("--upstream-timeout: must be at least one second")]
    ZeroUpstreamTimeout,
}

/// Check a configuration before it is accepted.
pub fn validate_config(config: &RelayConfig) -> Result<(), ConfigError> {
    if config.listen_port == 0 {
        return Err(ConfigError::InvalidListenPort);
    }

    if config.upstream_timeout_secs == Some(0) {
        return Err(ConfigError::ZeroUpstreamTimeout);
    }

    if let RelayMode::FixedEndpoint(endpoint) = &config.mode {
        validate_endpoint(endpoint)?;
    }

    Ok(())
}

fn validate_endpoint(endpoint: &FixedEndpoint) -> Result<(), ConfigError> {
    let invalid = || ConfigError::InvalidEndpoint {
        endpoint: endpoint.host.clone(),
    };

    let authority: Authority = endpoint.host.parse().map_err(|_| invalid())?;
    // Userinfo would be silently sent upstream as credentials.
    if authority.as_str().contains('@') || authority.host().is_empty() {
        return Err(invalid());
    }

    // Authority does not range-check the port; the URL parser does.
    Url::parse(&format!("{}://{}/", endpoint.protocol, endpoint.host)).map_err(|_| invalid())?;
    Ok(())
}
