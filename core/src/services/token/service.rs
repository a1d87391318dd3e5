//! Token service implementation

use std::sync::Arc;

use ot_shared::utils::phone::mask_phone_number;

use crate::errors::{DeliveryError, DomainResult};

use super::config::TokenServiceConfig;
use super::traits::{MessageSender, TokenGenerator};

/// Generates a one-time token and delivers it by SMS
///
/// Holds no per-call state: every [`send`](Self::send) draws a fresh token and
/// threads it straight into the sender, so a single instance can be shared
/// behind an `Arc` across concurrent requests.
pub struct TokenService<G: ?Sized, M: ?Sized> {
    /// Token source
    generator: Arc<G>,
    /// SMS transport
    sender: Arc<M>,
    /// Service configuration
    config: TokenServiceConfig,
}

impl<G, M> TokenService<G, M>
where
    G: TokenGenerator + ?Sized,
    M: MessageSender + ?Sized,
{
    /// Create a new token service
    ///
    /// # Arguments
    ///
    /// * `generator` - Token generator implementation
    /// * `sender` - SMS transport implementation
    /// * `config` - Service configuration
    pub fn new(generator: Arc<G>, sender: Arc<M>, config: TokenServiceConfig) -> Self {
        Self {
            generator,
            sender,
            config,
        }
    }

    /// Generate a token and send it to `destination`
    ///
    /// The generator runs to completion before the sender is called, and the
    /// sender receives exactly the token generated here. Errors from either
    /// step are returned unchanged; a generation failure means the sender is
    /// never called, and a delivery failure discards the token without retry.
    /// A sender that outlives `config.send_timeout` yields
    /// [`DeliveryError::Timeout`].
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The sender's delivery confirmation
    /// * `Err(DomainError)` - The generation or delivery error
    pub async fn send(&self, destination: &str) -> DomainResult<String> {
        let masked = mask_phone_number(destination);

        let token = self.generator.generate().await.map_err(|e| {
            tracing::error!(
                destination = %masked,
                error = %e,
                event = "token_generation_failed",
                "Failed to generate one-time token"
            );
            e
        })?;

        let timeout = self.config.send_timeout;
        let timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        let delivery = self.sender.send_sms(token.as_str(), destination);

        let confirmation = match tokio::time::timeout(timeout, delivery).await {
            Ok(Ok(confirmation)) => confirmation,
            Ok(Err(e)) => {
                tracing::error!(
                    destination = %masked,
                    provider = self.sender.provider_name(),
                    error = %e,
                    event = "token_delivery_failed",
                    "Failed to deliver one-time token"
                );
                return Err(e.into());
            }
            Err(_) => {
                tracing::warn!(
                    destination = %masked,
                    provider = self.sender.provider_name(),
                    timeout_ms,
                    event = "token_delivery_timeout",
                    "SMS transport did not answer in time"
                );
                return Err(DeliveryError::Timeout { millis: timeout_ms }.into());
            }
        };

        tracing::info!(
            destination = %masked,
            provider = self.sender.provider_name(),
            event = "token_sent",
            "One-time token sent"
        );

        Ok(confirmation)
    }

    /// The service configuration
    pub fn config(&self) -> &TokenServiceConfig {
        &self.config
    }
}
