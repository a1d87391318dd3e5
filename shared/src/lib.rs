//! Shared utilities and common types for the OiToken server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - Error and response structures for the HTTP layer
//! - Utility functions (phone masking)

pub mod config;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, Environment, LogFormat, LoggingConfig, ServerConfig, SmsConfig, TokenConfig,
    TokenRange,
};
pub use errors::{error_codes, ErrorResponse};
pub use types::{ApiResponse, HealthResponse};
pub use utils::phone;
