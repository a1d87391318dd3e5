use actix_web::{web, HttpRequest, HttpResponse};
use std::time::Instant;
use validator::Validate;

use ot_core::{MessageSender, TokenGenerator};
use ot_shared::types::ApiResponse;
use ot_shared::utils::phone::mask_phone_number;

use crate::app::AppState;
use crate::dto::token::{SendTokenRequest, SendTokenResponse};
use crate::handlers::error::ApiError;
use crate::handlers::{request_id, REQUEST_ID_HEADER};

/// Handler for POST /api/v1/token/send
///
/// Generates a one-time token and sends it to the requested destination.
///
/// # Request Body
///
/// ```json
/// { "destination": "21999999999" }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "success": true,
///     "data": { "confirmation": "O SMS [123456] foi enviado para 21999999999" },
///     "timestamp": "2026-10-17T10:00:00Z",
///     "request_id": "550e8400-e29b-41d4-a716-446655440000"
/// }
/// ```
///
/// ## Errors
/// - 400 `VALIDATION_ERROR`: missing, empty or oversized destination
/// - 500 `TOKEN_GENERATION_FAILED`
/// - 502 `SMS_DELIVERY_FAILED`, 503 `SMS_UNAVAILABLE`, 504 `SMS_TIMEOUT`
pub async fn send_token<G, M>(
    req: HttpRequest,
    state: web::Data<AppState<G, M>>,
    request: web::Json<SendTokenRequest>,
) -> Result<HttpResponse, ApiError>
where
    G: TokenGenerator + ?Sized + 'static,
    M: MessageSender + ?Sized + 'static,
{
    let request_id = request_id(&req);
    let start_time = Instant::now();

    if let Err(validation_errors) = request.validate() {
        let fields: Vec<&str> = validation_errors.field_errors().keys().copied().collect();
        tracing::warn!(
            request_id = %request_id,
            fields = ?fields,
            "Validation failed for send_token request"
        );
        return Err(ApiError::invalid_fields(&validation_errors).with_request_id(request_id));
    }

    let destination = request.into_inner().destination;
    tracing::info!(
        request_id = %request_id,
        destination = %mask_phone_number(&destination),
        "Processing send_token request"
    );

    let confirmation = state
        .token_service
        .send(&destination)
        .await
        .map_err(|e| ApiError::from(e).with_request_id(request_id.clone()))?;

    tracing::info!(
        request_id = %request_id,
        elapsed_ms = start_time.elapsed().as_millis() as u64,
        "send_token request completed"
    );

    let body =
        ApiResponse::success(SendTokenResponse { confirmation }).with_request_id(&request_id);
    Ok(HttpResponse::Ok()
        .insert_header((REQUEST_ID_HEADER, request_id))
        .json(body))
}
