//! Typed error handling for invoice operations
//!
//! Three failure categories reach the HTTP layer:
//!
//! - [`ValidationError`]: client-supplied data failed the required-field checks (400)
//! - [`OrderError::NotFound`]: the referenced invoice does not exist (404)
//! - [`StoreError`]: anything that went wrong inside the persistence layer (500)
//!
//! None of them are retried; each one terminates the current request.
//!
//! # Example
//!
//! ```rust,ignore
//! match repository.delete_by_id(id).await {
//!     Ok(()) => println!("deleted"),
//!     Err(OrderError::NotFound { id }) => println!("no invoice {}", id),
//!     Err(e) => eprintln!("store failure: {}", e),
//! }
//! ```

use axum::http::StatusCode;
use serde::Serialize;

/// The main error type for invoice and report operations
#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    /// Request data failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No invoice with the given identifier
    #[error("order '{id}' not found")]
    NotFound { id: String },

    /// Persistence layer failure
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl OrderError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            OrderError::Validation(_) => StatusCode::BAD_REQUEST,
            OrderError::NotFound { .. } => StatusCode::NOT_FOUND,
            OrderError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            OrderError::Validation(_) => "VALIDATION_ERROR",
            OrderError::NotFound { .. } => "ORDER_NOT_FOUND",
            OrderError::Store(_) => "STORE_ERROR",
        }
    }

    /// Shorthand for a not-found error
    pub fn not_found(id: impl Into<String>) -> Self {
        OrderError::NotFound { id: id.into() }
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// A single field validation error
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldValidationError {
    pub field: String,
    pub message: String,
}

/// Errors related to input validation
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// One or more required fields are absent or empty
    #[error("Missing required fields: {}", format_fields(.0))]
    MissingFields(Vec<FieldValidationError>),

    /// Body is not valid JSON or does not match the request schema
    #[error("Invalid request body: {message}")]
    InvalidBody { message: String },
}

impl ValidationError {
    /// Field-level details, if any
    pub fn fields(&self) -> &[FieldValidationError] {
        match self {
            ValidationError::MissingFields(fields) => fields,
            ValidationError::InvalidBody { .. } => &[],
        }
    }
}

fn format_fields(fields: &[FieldValidationError]) -> String {
    fields
        .iter()
        .map(|f| f.field.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors related to storage backends
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Could not reach the backend
    #[error("Failed to connect to {backend}: {message}")]
    Connection { backend: String, message: String },

    /// A query, insert or delete failed
    #[error("{backend} query error: {message}")]
    Query { backend: String, message: String },

    /// A document could not be converted to or from the domain model
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl StoreError {
    pub fn query(backend: &str, message: impl ToString) -> Self {
        StoreError::Query {
            backend: backend.to_string(),
            message: message.to_string(),
        }
    }

    pub fn serialization(message: impl ToString) -> Self {
        StoreError::Serialization {
            message: message.to_string(),
        }
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::serialization(err)
    }
}

// =============================================================================
// Result type alias
// =============================================================================

/// A specialized Result type for invoice operations
pub type OrderResult<T> = Result<T, OrderError>;
