//! HTTP client initialization.

use std::sync::Arc;
use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::{Config, OUTBOUND_USER_AGENT};

/// Initializes the shared HTTP client used for location lookups.
///
/// Creates a `reqwest::Client` configured with:
/// - A fixed User-Agent identifying this service
/// - Per-request timeout from the configuration
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(config: &Config) -> Result<Arc<reqwest::Client>, reqwest::Error> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(config.lookup_timeout_seconds))
        .user_agent(OUTBOUND_USER_AGENT)
        .build()?;
    Ok(Arc::new(client))
}
