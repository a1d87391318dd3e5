//! Configuration module
//!
//! This module organizes configuration into logical areas:
//! - `environment` - Environment detection and logging configuration
//! - `server` - HTTP server bind settings
//! - `sms` - SMS transport selection and simulation knobs
//! - `token` - Token band and delivery timeout

pub mod environment;
pub mod server;
pub mod sms;
pub mod token;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use server::ServerConfig;
pub use sms::SmsConfig;
pub use token::{TokenConfig, TokenRange};

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Token generation and delivery configuration
    pub token: TokenConfig,

    /// SMS transport configuration
    pub sms: SmsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            server: ServerConfig::default(),
            token: TokenConfig::default(),
            sms: SmsConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment
    ///
    /// Logging defaults follow the detected environment; `LOG_LEVEL` and
    /// `LOG_FORMAT` override them when present.
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        Self {
            environment,
            server: ServerConfig::from_env(),
            token: TokenConfig::from_env(),
            sms: SmsConfig::from_env(),
            logging: LoggingConfig::from_env(environment),
        }
    }
}
