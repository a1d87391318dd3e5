//! Application state and factory
//!
//! This module holds the shared application state and provides the factory
//! for creating the actix-web application.

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App, HttpResponse};
use tracing_actix_web::TracingLogger;

use ot_core::{MessageSender, TokenGenerator, TokenService};
use ot_shared::errors::{error_codes, ErrorResponse};
use ot_shared::types::HealthResponse;

use crate::handlers::error::ApiError;
use crate::handlers::request_id;
use crate::routes::token::send_token;

/// Application state that holds shared services
pub struct AppState<G: ?Sized, M: ?Sized> {
    pub token_service: Arc<TokenService<G, M>>,
}

impl<G: ?Sized, M: ?Sized> AppState<G, M> {
    pub fn new(token_service: Arc<TokenService<G, M>>) -> Self {
        Self { token_service }
    }
}

/// Create and configure the application with all dependencies
pub fn create_app<G, M>(
    app_state: web::Data<AppState<G, M>>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    G: TokenGenerator + ?Sized + 'static,
    M: MessageSender + ?Sized + 'static,
{
    // Malformed JSON gets the same error body as every other failure
    let json_config = web::JsonConfig::default().error_handler(|err, req| {
        ApiError::validation(err.to_string())
            .with_request_id(request_id(req))
            .into()
    });

    App::new()
        .app_data(app_state)
        .app_data(json_config)
        .wrap(TracingLogger::default())
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // API v1 routes
        .service(
            web::scope("/api/v1").service(
                web::scope("/token").route("/send", web::post().to(send_token::<G, M>)),
            ),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse::healthy(
        "oitoken-api",
        env!("CARGO_PKG_VERSION"),
    ))
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
