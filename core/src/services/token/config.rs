//! Configuration for the token service

use std::time::Duration;

use ot_shared::config::token::{TokenConfig, DEFAULT_SEND_TIMEOUT_SECS};

/// Configuration for the token service
///
/// The token band is a property of the generator, not of the service.
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// Upper bound on a single SMS send
    pub send_timeout: Duration,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            send_timeout: Duration::from_secs(DEFAULT_SEND_TIMEOUT_SECS),
        }
    }
}

impl From<&TokenConfig> for TokenServiceConfig {
    fn from(config: &TokenConfig) -> Self {
        Self {
            send_timeout: Duration::from_secs(config.send_timeout_secs),
        }
    }
}
