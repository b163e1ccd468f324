//! Axum extractor that turns malformed JSON bodies into 400 validation errors

use crate::core::error::{OrderError, ValidationError};
use crate::server::error::ApiError;
use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

/// JSON body extractor with a validation-error rejection
///
/// Axum's own `Json` rejects schema mismatches with 422; this service
/// reports every unusable body, including unknown fields, as 400.
///
/// ```rust,ignore
/// pub async fn create_order(
///     ValidatedJson(request): ValidatedJson<CreateInvoiceRequest>,
/// ) -> Result<..., ApiError> { ... }
/// ```
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ValidatedJson(value)),
            Err(rejection) => Err(ApiError::new(
                OrderError::Validation(ValidationError::InvalidBody {
                    message: rejection.body_text(),
                }),
                "Invalid request body.",
            )),
        }
    }
}
