//! Order workflow error types
//!
//! Every failure an order operation can surface to its caller. All
//! variants are recoverable-by-caller business conditions except
//! [`OrderError::Unavailable`], which stands for a transient storage
//! fault and is always safe to retry. The mapping from error kind to
//! HTTP status class lives in the `api` module, not here.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::simple_types::ValidationError;
use crate::store::StoreError;
use crate::workflow::status::OrderStatus;

/// The error taxonomy of the order workflows
///
/// # Examples
///
/// ```
/// use food_order_service::workflow::OrderError;
///
/// let error = OrderError::EmptyCart;
/// assert!(error.to_string().contains("at least one item"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum OrderError {
    /// The submitted cart has no line items
    #[error("Cart must contain at least one item")]
    EmptyCart,

    /// The cart subtotal is below the provider's minimum order amount
    #[error("Minimum order amount is {minimum}")]
    BelowMinimumOrder {
        /// The provider's minimum order amount, for display to the customer
        minimum: Decimal,
    },

    /// The referenced restaurant or tiffin plan does not exist
    #[error("Provider not found")]
    ProviderNotFound,

    /// The referenced order does not exist
    #[error("Order not found")]
    OrderNotFound,

    /// The actor may not read or mutate this order
    #[error("Access denied")]
    AccessDenied,

    /// The requested status change is not allowed from the current status
    #[error("Cannot move order from '{from}' to '{to}'")]
    InvalidTransition {
        /// Status the order is currently in
        from: OrderStatus,
        /// Status that was requested
        to: OrderStatus,
    },

    /// The owner's cancellation grace window has elapsed
    #[error("Orders can only be cancelled within {window_minutes} minutes of placement")]
    CancellationWindowExpired {
        /// Length of the grace window in minutes
        window_minutes: i64,
    },

    /// The order is in a terminal status and can never leave it
    #[error("Order is already {status} and can no longer change")]
    TerminalStateViolation {
        /// The terminal status the order is in
        status: OrderStatus,
    },

    /// A field of the request failed validation
    #[error("Validation error: {0}")]
    Validation(ValidationError),

    /// The storage layer is temporarily unavailable; safe to retry
    #[error("Service temporarily unavailable: {0}")]
    Unavailable(String),
}

impl OrderError {
    /// Returns whether this is a `Validation` error
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns whether this error means the caller referenced something
    /// that does not exist
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::OrderNotFound | Self::ProviderNotFound)
    }

    /// Returns whether this is the retryable `Unavailable` condition
    #[must_use]
    pub const fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }
}

impl From<ValidationError> for OrderError {
    fn from(error: ValidationError) -> Self {
        Self::Validation(error)
    }
}

impl From<StoreError> for OrderError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::VersionConflict => {
                Self::Unavailable("order was modified concurrently, retry".to_string())
            }
            StoreError::Unavailable(message) => Self::Unavailable(message),
        }
    }
}
