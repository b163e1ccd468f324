//! HTTP mapping of [`OrderError`]

use crate::core::error::{FieldValidationError, OrderError};
use axum::Json;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Client-visible message for a missing invoice
pub const NOT_FOUND_MESSAGE: &str = "order not found.";

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: &'static str,
    /// Human-readable error message
    pub message: String,
    /// Underlying store message, only where an endpoint echoes it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Field-level validation details
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldValidationError>,
}

/// An [`OrderError`] plus the endpoint's client-facing message
///
/// Store failures are logged here with full detail; the client only sees
/// `message`, unless [`with_detail`](Self::with_detail) was applied.
#[derive(Debug)]
pub struct ApiError {
    error: OrderError,
    message: &'static str,
    expose_detail: bool,
}

impl ApiError {
    pub fn new(error: OrderError, message: &'static str) -> Self {
        Self {
            error,
            message,
            expose_detail: false,
        }
    }

    /// Echo the underlying error message in the response body
    pub fn with_detail(mut self) -> Self {
        self.expose_detail = true;
        self
    }

    /// Build the response body without consuming the error
    pub fn to_response(&self) -> ErrorResponse {
        match &self.error {
            OrderError::Validation(err) => ErrorResponse {
                code: self.error.error_code(),
                message: err.to_string(),
                error: None,
                fields: err.fields().to_vec(),
            },
            OrderError::NotFound { .. } => ErrorResponse {
                code: self.error.error_code(),
                message: NOT_FOUND_MESSAGE.to_string(),
                error: None,
                fields: Vec::new(),
            },
            OrderError::Store(err) => ErrorResponse {
                code: self.error.error_code(),
                message: self.message.to_string(),
                error: self.expose_detail.then(|| err.to_string()),
                fields: Vec::new(),
            },
        }
    }
}

impl From<OrderError> for ApiError {
    fn from(error: OrderError) -> Self {
        Self::new(error, "server error")
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.error.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self.error, "{}", self.message);
        } else {
            tracing::debug!(error = %self.error, status = status.as_u16(), "request rejected");
        }

        (status, Json(self.to_response())).into_response()
    }
}
