//! # OiToken API
//!
//! actix-web surface over [`ot_core::TokenService`]: a health check and
//! `POST /api/v1/token/send`.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod routes;
pub mod telemetry;

pub use app::{create_app, AppState};
