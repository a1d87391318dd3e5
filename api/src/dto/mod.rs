//! Request and response bodies

pub mod token;

pub use token::{SendTokenRequest, SendTokenResponse};
