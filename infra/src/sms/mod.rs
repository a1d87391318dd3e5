//! SMS Service Module
//!
//! SMS transports implementing [`ot_core::MessageSender`]. Only the simulated
//! transport ships; real providers plug in behind the same trait.

use std::sync::Arc;
use std::time::Duration;

use ot_core::MessageSender;
use ot_shared::config::SmsConfig;

use crate::InfrastructureError;

pub mod simulated_sms;

pub use simulated_sms::{confirmation_message, SimulatedSmsSender};

#[cfg(test)]
mod tests;

/// Create the SMS transport named by `config.provider`
///
/// `"simulated"` (alias `"mock"`) builds a [`SimulatedSmsSender`] honouring the
/// latency and failure knobs. Any other name is a configuration error.
pub fn create_message_sender(
    config: &SmsConfig,
) -> Result<Arc<dyn MessageSender>, InfrastructureError> {
    match config.provider.to_lowercase().as_str() {
        "simulated" | "mock" => {
            if config.simulate_failure {
                tracing::warn!("Simulated SMS transport configured to fail every send");
            }
            Ok(Arc::new(SimulatedSmsSender::with_options(
                Duration::from_millis(config.latency_ms),
                config.simulate_failure,
            )))
        }
        other => {
            tracing::error!(provider = other, "Unknown SMS provider");
            Err(InfrastructureError::Config(format!(
                "Unknown SMS provider '{}'",
                config.provider
            )))
        }
    }
}
