//! Simulated SMS transport
//!
//! Stands in for a real gateway: nothing leaves the process, and every send
//! answers with a confirmation that embeds the payload and destination.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

use ot_core::{DeliveryError, MessageSender};
use ot_shared::utils::phone::mask_phone_number;

/// Confirmation returned by the simulated transport
pub fn confirmation_message(payload: &str, destination: &str) -> String {
    format!("O SMS [{}] foi enviado para {}", payload, destination)
}

/// Simulated SMS transport for development and testing
///
/// This implementation:
/// - Returns [`confirmation_message`] for every send
/// - Tracks message count for testing
/// - Optionally waits a fixed latency per send
/// - Optionally reports the transport as unavailable
#[derive(Clone, Default)]
pub struct SimulatedSmsSender {
    /// Counter for tracking number of messages sent
    message_count: Arc<AtomicU64>,
    /// Delay applied before answering
    latency: Duration,
    /// Whether to simulate failures
    simulate_failure: bool,
}

impl SimulatedSmsSender {
    /// Create a simulated sender that answers immediately and never fails
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a simulated sender with configurable latency and failure
    pub fn with_options(latency: Duration, simulate_failure: bool) -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            latency,
            simulate_failure,
        }
    }

    /// Get the total number of messages sent
    pub fn get_message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }

    /// Reset the message counter
    pub fn reset_counter(&self) {
        self.message_count.store(0, Ordering::SeqCst);
    }

    /// Enable or disable failure simulation
    pub fn set_simulate_failure(&mut self, simulate: bool) {
        self.simulate_failure = simulate;
    }
}

#[async_trait]
impl MessageSender for SimulatedSmsSender {
    async fn send_sms(&self, payload: &str, destination: &str) -> Result<String, DeliveryError> {
        let masked = mask_phone_number(destination);

        if self.simulate_failure {
            warn!(
                target: "sms_service",
                provider = "simulated",
                destination = %masked,
                "Simulated SMS transport failing on purpose"
            );
            return Err(DeliveryError::Unavailable {
                message: "Simulated SMS sending failure".to_string(),
            });
        }

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;

        info!(
            target: "sms_service",
            provider = "simulated",
            destination = %masked,
            message_number = count,
            message_length = payload.len(),
            "SMS sent successfully (simulated)"
        );

        Ok(confirmation_message(payload, destination))
    }

    fn provider_name(&self) -> &str {
        "Simulated"
    }
}
