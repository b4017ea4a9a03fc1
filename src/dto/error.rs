//! Error DTOs
//!
//! Serializes workflow errors for API responses. Adjacently tagged
//! format discriminated by the `type` field, so clients can branch on a
//! stable error kind while showing the human-readable message.

use serde::{Deserialize, Serialize};

use crate::workflow::OrderError;

/// The order error taxonomy as it crosses the wire
///
/// # Examples
///
/// ```
/// use food_order_service::dto::OrderErrorDto;
/// use food_order_service::workflow::OrderError;
///
/// let dto = OrderErrorDto::from_domain(&OrderError::EmptyCart);
/// let json = serde_json::to_string(&dto).unwrap();
/// assert!(json.contains("\"type\":\"EmptyCart\""));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum OrderErrorDto {
    /// The cart had no line items
    EmptyCart {
        /// Error message
        message: String,
    },
    /// The subtotal was below the provider's minimum
    BelowMinimumOrder {
        /// The minimum order amount, as a decimal string
        minimum: String,
        /// Error message
        message: String,
    },
    /// Unknown restaurant or tiffin plan
    ProviderNotFound {
        /// Error message
        message: String,
    },
    /// Unknown order
    OrderNotFound {
        /// Error message
        message: String,
    },
    /// The actor may not perform this operation
    AccessDenied {
        /// Error message
        message: String,
    },
    /// Disallowed status transition
    InvalidTransition {
        /// Current status
        from: String,
        /// Requested status
        to: String,
        /// Error message
        message: String,
    },
    /// The owner's cancellation window has elapsed
    CancellationWindowExpired {
        /// Error message
        message: String,
    },
    /// The order is in a terminal status
    TerminalStateViolation {
        /// The terminal status
        status: String,
        /// Error message
        message: String,
    },
    /// A request field failed validation
    Validation {
        /// Field that failed
        field_name: String,
        /// Error message
        message: String,
    },
    /// Transient failure; the request may be retried
    Unavailable {
        /// Error message
        message: String,
    },
}

impl OrderErrorDto {
    /// Creates an `OrderErrorDto` from the domain error
    ///
    /// A pure conversion; the message is the error's display text.
    #[must_use]
    pub fn from_domain(error: &OrderError) -> Self {
        let message = error.to_string();
        match error {
            OrderError::EmptyCart => Self::EmptyCart { message },
            OrderError::BelowMinimumOrder { minimum } => Self::BelowMinimumOrder {
                minimum: minimum.to_string(),
                message,
            },
            OrderError::ProviderNotFound => Self::ProviderNotFound { message },
            OrderError::OrderNotFound => Self::OrderNotFound { message },
            OrderError::AccessDenied => Self::AccessDenied { message },
            OrderError::InvalidTransition { from, to } => Self::InvalidTransition {
                from: from.value().to_string(),
                to: to.value().to_string(),
                message,
            },
            OrderError::CancellationWindowExpired { .. } => {
                Self::CancellationWindowExpired { message }
            }
            OrderError::TerminalStateViolation { status } => Self::TerminalStateViolation {
                status: status.value().to_string(),
                message,
            },
            OrderError::Validation(validation) => Self::Validation {
                field_name: validation.field_name.clone(),
                message: validation.message.clone(),
            },
            OrderError::Unavailable(_) => Self::Unavailable { message },
        }
    }

    /// Returns the human-readable message
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::EmptyCart { message }
            | Self::BelowMinimumOrder { message, .. }
            | Self::ProviderNotFound { message }
            | Self::OrderNotFound { message }
            | Self::AccessDenied { message }
            | Self::InvalidTransition { message, .. }
            | Self::CancellationWindowExpired { message }
            | Self::TerminalStateViolation { message, .. }
            | Self::Validation { message, .. }
            | Self::Unavailable { message } => message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simple_types::ValidationError;
    use crate::workflow::OrderStatus;
    use rstest::rstest;
    use rust_decimal::Decimal;

    #[rstest]
    fn test_below_minimum_carries_minimum() {
        let error = OrderError::BelowMinimumOrder {
            minimum: Decimal::from(250),
        };
        let dto = OrderErrorDto::from_domain(&error);

        match &dto {
            OrderErrorDto::BelowMinimumOrder { minimum, message } => {
                assert_eq!(minimum, "250");
                assert!(message.contains("250"));
            }
            other => panic!("Expected BelowMinimumOrder, got {other:?}"),
        }
    }

    #[rstest]
    fn test_validation_carries_field_name() {
        let error = OrderError::Validation(ValidationError::new("Quantity", "Must not be less than 1"));
        let dto = OrderErrorDto::from_domain(&error);

        match &dto {
            OrderErrorDto::Validation {
                field_name,
                message,
            } => {
                assert_eq!(field_name, "Quantity");
                assert_eq!(message, "Must not be less than 1");
            }
            other => panic!("Expected Validation, got {other:?}"),
        }
    }

    #[rstest]
    fn test_invalid_transition_serializes_statuses() {
        let error = OrderError::InvalidTransition {
            from: OrderStatus::Preparing,
            to: OrderStatus::Cancelled,
        };
        let json = serde_json::to_string(&OrderErrorDto::from_domain(&error)).unwrap();

        assert!(json.contains("\"type\":\"InvalidTransition\""));
        assert!(json.contains("\"from\":\"preparing\""));
        assert!(json.contains("\"to\":\"cancelled\""));
    }

    #[rstest]
    fn test_tagged_serialization() {
        let json = serde_json::to_string(&OrderErrorDto::from_domain(&OrderError::AccessDenied))
            .unwrap();

        assert!(json.contains("\"type\":\"AccessDenied\""));
    }

    #[rstest]
    fn test_message_accessor() {
        let dto = OrderErrorDto::from_domain(&OrderError::OrderNotFound);

        assert_eq!(dto.message(), "Order not found");
    }
}
