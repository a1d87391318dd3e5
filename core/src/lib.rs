//! # OiToken Core
//!
//! Domain layer for one-time token issuance: the [`Token`] entity, the
//! [`TokenGenerator`] and [`MessageSender`] contracts, and the
//! [`TokenService`] that generates a token and hands it to the sender.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
