//! Mapping from domain errors to HTTP responses

use std::collections::BTreeMap;
use std::fmt;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

use ot_core::{DeliveryError, DomainError};
use ot_shared::errors::{error_codes, ErrorResponse};
use validator::ValidationErrors;

use super::REQUEST_ID_HEADER;

/// What went wrong while serving a request
#[derive(Debug, thiserror::Error)]
pub enum ApiErrorKind {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Invalid request: {0}")]
    Validation(String),
}

/// Error returned by handlers, rendered as a JSON [`ErrorResponse`]
#[derive(Debug)]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub request_id: Option<String>,
    /// Failed validation codes per request field
    pub field_errors: BTreeMap<String, Vec<String>>,
}

impl ApiError {
    pub fn new(kind: impl Into<ApiErrorKind>) -> Self {
        Self {
            kind: kind.into(),
            request_id: None,
            field_errors: BTreeMap::new(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Validation(message.into()))
    }

    /// Validation error listing the failed rule codes of every field
    pub fn invalid_fields(errors: &ValidationErrors) -> Self {
        let mut error = Self::validation(errors.to_string());
        error.field_errors = errors
            .field_errors()
            .into_iter()
            .map(|(field, errs)| {
                let codes = errs.iter().map(|e| e.code.to_string()).collect();
                (field.to_string(), codes)
            })
            .collect();
        error
    }

    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    /// Error code and HTTP status for this error
    pub fn code_and_status(&self) -> (&'static str, StatusCode) {
        match &self.kind {
            ApiErrorKind::Validation(_) => {
                (error_codes::VALIDATION_ERROR, StatusCode::BAD_REQUEST)
            }
            ApiErrorKind::Domain(DomainError::Generation(_)) => (
                error_codes::TOKEN_GENERATION_FAILED,
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            ApiErrorKind::Domain(DomainError::Delivery(e)) => match e {
                DeliveryError::Rejected { .. } => {
                    (error_codes::SMS_DELIVERY_FAILED, StatusCode::BAD_GATEWAY)
                }
                DeliveryError::Unavailable { .. } => {
                    (error_codes::SMS_UNAVAILABLE, StatusCode::SERVICE_UNAVAILABLE)
                }
                DeliveryError::Timeout { .. } => {
                    (error_codes::SMS_TIMEOUT, StatusCode::GATEWAY_TIMEOUT)
                }
            },
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        Self::new(error)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        self.code_and_status().1
    }

    fn error_response(&self) -> HttpResponse {
        let (code, status) = self.code_and_status();

        if status.is_server_error() {
            tracing::error!(
                request_id = ?self.request_id,
                code,
                error = %self.kind,
                "Request failed"
            );
        } else {
            tracing::warn!(
                request_id = ?self.request_id,
                code,
                error = %self.kind,
                "Request rejected"
            );
        }

        let mut body = ErrorResponse::new(code, self.kind.to_string());
        for (field, codes) in &self.field_errors {
            body = body.add_detail(field.clone(), codes);
        }
        let mut response = HttpResponse::build(status);
        if let Some(request_id) = &self.request_id {
            body = body.with_request_id(request_id.clone());
            response.insert_header((REQUEST_ID_HEADER, request_id.clone()));
        }
        response.json(body)
    }
}
