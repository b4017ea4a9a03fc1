//! API error responses
//!
//! Maps the workflow error taxonomy onto HTTP status classes and the
//! `{success: false, message, error}` response envelope. This is the
//! only place that mapping lives; the workflow itself knows nothing
//! about HTTP.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::dto::OrderErrorDto;
use crate::workflow::OrderError;

/// An API-level error response
///
/// Wraps the workflow error so handlers can use `?` and let the
/// `IntoResponse` implementation pick the status code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiError(OrderError);

impl ApiError {
    /// Returns the wrapped workflow error
    #[must_use]
    pub const fn inner(&self) -> &OrderError {
        &self.0
    }

    /// Returns the HTTP status for the wrapped error
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self.0 {
            OrderError::EmptyCart
            | OrderError::BelowMinimumOrder { .. }
            | OrderError::InvalidTransition { .. }
            | OrderError::CancellationWindowExpired { .. }
            | OrderError::TerminalStateViolation { .. }
            | OrderError::Validation(_) => StatusCode::BAD_REQUEST,
            OrderError::AccessDenied => StatusCode::FORBIDDEN,
            OrderError::OrderNotFound | OrderError::ProviderNotFound => StatusCode::NOT_FOUND,
            OrderError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl From<OrderError> for ApiError {
    fn from(error: OrderError) -> Self {
        Self(error)
    }
}

/// The error response body
#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    message: String,
    error: OrderErrorDto,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let error = OrderErrorDto::from_domain(&self.0);
        let body = ErrorBody {
            success: false,
            message: self.0.to_string(),
            error,
        };
        (self.status_code(), Json(body)).into_response()
    }
}
