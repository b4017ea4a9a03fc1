//! Order status and its fixed description table

use std::fmt;

use crate::simple_types::ValidationError;

/// The lifecycle status of an order
///
/// Forward progression runs `Pending` through `Delivered`; `Cancelled`
/// and `Refunded` are side-exits. `Delivered`, `Cancelled`, and
/// `Refunded` are terminal: no transition ever leaves them.
///
/// # Examples
///
/// ```
/// use food_order_service::workflow::OrderStatus;
///
/// let status = OrderStatus::create("Status", "out_for_delivery").unwrap();
/// assert_eq!(status.value(), "out_for_delivery");
/// assert!(!status.is_terminal());
/// assert!(OrderStatus::Delivered.is_terminal());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    /// Order received, awaiting confirmation
    Pending,
    /// Confirmed by the provider
    Confirmed,
    /// Food is being prepared
    Preparing,
    /// Packed and waiting for a rider
    ReadyForDelivery,
    /// With the rider
    OutForDelivery,
    /// Handed to the customer (terminal)
    Delivered,
    /// Cancelled (terminal)
    Cancelled,
    /// Refunded (terminal)
    Refunded,
}

impl OrderStatus {
    /// Creates an `OrderStatus` from its wire string
    ///
    /// # Arguments
    ///
    /// * `field_name` - Field name used in error messages
    /// * `value` - Input string
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for strings outside the status enum.
    pub fn create(field_name: &str, value: &str) -> Result<Self, ValidationError> {
        match value {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "preparing" => Ok(Self::Preparing),
            "ready_for_delivery" => Ok(Self::ReadyForDelivery),
            "out_for_delivery" => Ok(Self::OutForDelivery),
            "delivered" => Ok(Self::Delivered),
            "cancelled" => Ok(Self::Cancelled),
            "refunded" => Ok(Self::Refunded),
            _ => Err(ValidationError::new(field_name, "Is not a valid status")),
        }
    }

    /// Returns the `OrderStatus` as its wire string
    #[must_use]
    pub const fn value(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Preparing => "preparing",
            Self::ReadyForDelivery => "ready_for_delivery",
            Self::OutForDelivery => "out_for_delivery",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
            Self::Refunded => "refunded",
        }
    }

    /// Returns whether the status permits no further transitions
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Delivered | Self::Cancelled | Self::Refunded)
    }

    /// Returns the fixed human-readable description for the status
    ///
    /// Statuses without a table entry fall back to a generic description.
    ///
    /// # Examples
    ///
    /// ```
    /// use food_order_service::workflow::OrderStatus;
    ///
    /// assert_eq!(
    ///     OrderStatus::Preparing.description(),
    ///     "Food is being prepared"
    /// );
    /// // No table entry for refunded: generic fallback
    /// assert_eq!(OrderStatus::Refunded.description(), "Order status updated");
    /// ```
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Pending => "Order received and being processed",
            Self::Confirmed => "Order confirmed by restaurant",
            Self::Preparing => "Food is being prepared",
            Self::ReadyForDelivery => "Order is ready for delivery",
            Self::OutForDelivery => "Order is out for delivery",
            Self::Delivered => "Order has been delivered",
            Self::Cancelled => "Order has been cancelled",
            Self::Refunded => "Order status updated",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.value())
    }
}
