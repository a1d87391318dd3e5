//! Traits for token generation and SMS delivery

use async_trait::async_trait;

use crate::domain::entities::token::Token;
use crate::errors::{DeliveryError, GenerationError};

/// Source of one-time tokens
#[async_trait]
pub trait TokenGenerator: Send + Sync {
    /// Produce a fresh token
    async fn generate(&self) -> Result<Token, GenerationError>;
}

/// SMS transport
///
/// Any implementation can be handed to [`super::TokenService`]; the service
/// does not depend on a concrete provider.
#[async_trait]
pub trait MessageSender: Send + Sync {
    /// Send `payload` to `destination`, returning the transport's confirmation
    async fn send_sms(&self, payload: &str, destination: &str) -> Result<String, DeliveryError>;

    /// Name of the provider behind this sender, used in logs
    fn provider_name(&self) -> &str {
        "unknown"
    }
}
