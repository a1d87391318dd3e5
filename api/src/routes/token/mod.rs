//! One-time token routes

pub mod send;

pub use send::send_token;
