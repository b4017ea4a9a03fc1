//! Payment and order-kind type definitions
//!
//! Defines `PaymentMethod`, `PaymentStatus`, and `OrderType`.

use super::error::ValidationError;

// =============================================================================
// PaymentMethod
// =============================================================================

/// The payment method chosen at checkout
///
/// One of card, cash, upi, or netbanking.
///
/// # Examples
///
/// ```
/// use food_order_service::simple_types::PaymentMethod;
///
/// let method = PaymentMethod::create("PaymentMethod", "upi").unwrap();
/// assert!(matches!(method, PaymentMethod::Upi));
/// assert_eq!(method.value(), "upi");
///
/// // Unknown methods are rejected
/// assert!(PaymentMethod::create("PaymentMethod", "cheque").is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PaymentMethod {
    /// Debit or credit card
    Card,
    /// Cash on delivery
    Cash,
    /// UPI transfer
    Upi,
    /// Net banking
    Netbanking,
}

impl PaymentMethod {
    /// Creates a `PaymentMethod` from a string
    ///
    /// # Arguments
    ///
    /// * `field_name` - Field name used in error messages
    /// * `value` - Input string
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for values other than "card", "cash",
    /// "upi", "netbanking".
    pub fn create(field_name: &str, value: &str) -> Result<Self, ValidationError> {
        match value {
            "card" => Ok(Self::Card),
            "cash" => Ok(Self::Cash),
            "upi" => Ok(Self::Upi),
            "netbanking" => Ok(Self::Netbanking),
            _ => Err(ValidationError::new(
                field_name,
                "Must be one of 'card', 'cash', 'upi', 'netbanking'",
            )),
        }
    }

    /// Returns the `PaymentMethod` as its wire string
    #[must_use]
    pub const fn value(&self) -> &'static str {
        match self {
            Self::Card => "card",
            Self::Cash => "cash",
            Self::Upi => "upi",
            Self::Netbanking => "netbanking",
        }
    }
}

// =============================================================================
// PaymentStatus
// =============================================================================

/// The payment state of an order
///
/// Orders start in `Pending` and move to `Paid`, `Failed`, or `Refunded`
/// as the external payment flow progresses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PaymentStatus {
    /// Payment has not completed yet
    Pending,
    /// Payment captured
    Paid,
    /// Payment attempt failed
    Failed,
    /// Payment returned to the customer
    Refunded,
}

impl PaymentStatus {
    /// Creates a `PaymentStatus` from a string
    ///
    /// # Arguments
    ///
    /// * `field_name` - Field name used in error messages
    /// * `value` - Input string
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for values other than "pending", "paid",
    /// "failed", "refunded".
    pub fn create(field_name: &str, value: &str) -> Result<Self, ValidationError> {
        match value {
            "pending" => Ok(Self::Pending),
            "paid" => Ok(Self::Paid),
            "failed" => Ok(Self::Failed),
            "refunded" => Ok(Self::Refunded),
            _ => Err(ValidationError::new(
                field_name,
                "Must be one of 'pending', 'paid', 'failed', 'refunded'",
            )),
        }
    }

    /// Returns the `PaymentStatus` as its wire string
    #[must_use]
    pub const fn value(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
            Self::Failed => "failed",
            Self::Refunded => "refunded",
        }
    }
}

// =============================================================================
// OrderType
// =============================================================================

/// The kind of provider an order was placed against
///
/// # Examples
///
/// ```
/// use food_order_service::simple_types::OrderType;
///
/// let restaurant = OrderType::create("OrderType", "restaurant").unwrap();
/// assert!(matches!(restaurant, OrderType::Restaurant));
///
/// let tiffin = OrderType::create("OrderType", "tiffin").unwrap();
/// assert_eq!(tiffin.value(), "tiffin");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OrderType {
    /// A one-off restaurant order
    Restaurant,
    /// A tiffin meal-plan order
    Tiffin,
}

impl OrderType {
    /// Creates an `OrderType` from a string
    ///
    /// # Arguments
    ///
    /// * `field_name` - Field name used in error messages
    /// * `value` - Input string
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for values other than "restaurant",
    /// "tiffin".
    pub fn create(field_name: &str, value: &str) -> Result<Self, ValidationError> {
        match value {
            "restaurant" => Ok(Self::Restaurant),
            "tiffin" => Ok(Self::Tiffin),
            _ => Err(ValidationError::new(
                field_name,
                "Must be one of 'restaurant', 'tiffin'",
            )),
        }
    }

    /// Returns the `OrderType` as its wire string
    #[must_use]
    pub const fn value(&self) -> &'static str {
        match self {
            Self::Restaurant => "restaurant",
            Self::Tiffin => "tiffin",
        }
    }
}
