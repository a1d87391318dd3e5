//! Domain error types.
//!
//! Generation and delivery failures are kept as separate enums so callers can
//! tell which step of a send failed. [`DomainError`] wraps both without
//! altering them.

use thiserror::Error;

/// Token generation failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("Random source unavailable: {message}")]
    RandomSource { message: String },

    #[error("Generated token is malformed: {value}")]
    Malformed { value: String },
}

/// SMS delivery failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeliveryError {
    #[error("SMS transport rejected the message: {message}")]
    Rejected { message: String },

    #[error("SMS transport unavailable: {message}")]
    Unavailable { message: String },

    #[error("SMS delivery timed out after {millis} ms")]
    Timeout { millis: u64 },
}

/// Errors surfaced by [`crate::services::TokenService::send`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error(transparent)]
    Delivery(#[from] DeliveryError),
}

pub type DomainResult<T> = Result<T, DomainError>;
