//! Token issuance module
//!
//! This module provides the one-time token workflow:
//! - Random 6-digit token generation over a configurable band
//! - The transport contract used to deliver a token by SMS
//! - The service that generates a token and hands it to the transport

mod config;
mod generator;
mod service;
mod traits;

#[cfg(test)]
mod tests;

pub use config::TokenServiceConfig;
pub use generator::{scale_unit, token_band, RandomTokenGenerator};
pub use service::TokenService;
pub use traits::{MessageSender, TokenGenerator};

pub use ot_shared::config::token::TokenRange;
