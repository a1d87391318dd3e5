//! # Infrastructure Layer
//!
//! Concrete implementations behind the core contracts:
//! - **SMS**: the simulated transport and the provider factory
//! - **Wiring**: [`initialize`] assembles a ready [`SharedTokenService`] from
//!   application configuration

use std::sync::Arc;

use ot_core::{
    MessageSender, RandomTokenGenerator, TokenGenerator, TokenService, TokenServiceConfig,
};
use ot_shared::config::AppConfig;

/// SMS service module - SMS transports
pub mod sms;

/// Token service over trait objects, as built by [`initialize`]
pub type SharedTokenService = TokenService<dyn TokenGenerator, dyn MessageSender>;

/// Infrastructure service container
#[derive(Clone)]
pub struct InfrastructureServices {
    /// Ready-to-use token service
    pub token_service: Arc<SharedTokenService>,
}

/// Build infrastructure services from configuration
///
/// This function sets up:
/// - The random token generator for the configured band
/// - The SMS transport named by `config.sms.provider`
/// - The token service composing the two
pub fn initialize(config: &AppConfig) -> Result<InfrastructureServices, InfrastructureError> {
    tracing::info!("Initializing infrastructure services...");

    let service_config = TokenServiceConfig::from(&config.token);
    let generator: Arc<dyn TokenGenerator> =
        Arc::new(RandomTokenGenerator::new(config.token.range));
    let sender = sms::create_message_sender(&config.sms)?;

    tracing::info!(
        provider = sender.provider_name(),
        token_range = %config.token.range,
        send_timeout = ?service_config.send_timeout,
        "Infrastructure services initialized successfully"
    );

    Ok(InfrastructureServices {
        token_service: Arc::new(TokenService::new(generator, sender, service_config)),
    })
}

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
