//! ID type definitions
//!
//! Defines the string ID newtypes referenced by an order (`OrderId`,
//! `UserId`, `RestaurantId`, `TiffinPlanId`, `AddressId`, `RiderId`) and
//! the customer-facing `OrderNumber`.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use uuid::Uuid;

use super::constrained_type;
use super::error::ValidationError;

/// Maximum character count shared by all string ID types
const ID_MAX_LENGTH: usize = 50;

macro_rules! string_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash)]
        pub struct $name(String);

        impl $name {
            /// Creates the ID from a string
            ///
            /// # Arguments
            ///
            /// * `field_name` - Field name used in error messages
            /// * `value` - Input string
            ///
            /// # Errors
            ///
            /// Returns `ValidationError` when the string is empty or exceeds
            /// 50 characters.
            pub fn create(field_name: &str, value: &str) -> Result<Self, ValidationError> {
                constrained_type::create_string(field_name, $name, ID_MAX_LENGTH, value)
            }

            /// Returns a reference to the inner ID string
            #[must_use]
            pub fn value(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id! {
    /// An ID type that uniquely identifies an order record
    ///
    /// A non-empty string of 50 characters or fewer.
    ///
    /// # Examples
    ///
    /// ```
    /// use food_order_service::simple_types::OrderId;
    ///
    /// let order_id = OrderId::create("OrderId", "ord-2026-001").unwrap();
    /// assert_eq!(order_id.value(), "ord-2026-001");
    ///
    /// // Empty string causes an error
    /// assert!(OrderId::create("OrderId", "").is_err());
    /// ```
    OrderId
}

string_id! {
    /// An ID type that identifies the user who placed an order
    UserId
}

string_id! {
    /// An ID type that identifies a restaurant provider
    RestaurantId
}

string_id! {
    /// An ID type that identifies a tiffin plan provider
    TiffinPlanId
}

string_id! {
    /// An ID type that references a stored delivery address
    AddressId
}

string_id! {
    /// An ID type that identifies the rider assigned to a delivery
    RiderId
}

impl OrderId {
    /// Generates a fresh random `OrderId`
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

// =============================================================================
// OrderNumber
// =============================================================================

/// Regex pattern for `OrderNumber`
static ORDER_NUMBER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^ORD-\d+-[0-9a-f]{4}$").expect("Invalid order number regex pattern")
});

/// The customer-facing order number
///
/// Matches `ORD-<millis>-<suffix>` where the millisecond part is the
/// creation timestamp and the suffix is a random hex fragment. Generated
/// once at order creation and immutable afterwards.
///
/// # Examples
///
/// ```
/// use food_order_service::simple_types::OrderNumber;
///
/// let number = OrderNumber::create("OrderNumber", "ORD-1712000000000-a1b2").unwrap();
/// assert_eq!(number.value(), "ORD-1712000000000-a1b2");
///
/// assert!(OrderNumber::create("OrderNumber", "42").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct OrderNumber(String);

impl OrderNumber {
    /// Creates an `OrderNumber` from a string
    ///
    /// # Arguments
    ///
    /// * `field_name` - Field name used in error messages
    /// * `value` - Input string
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` when the string is empty or does not match
    /// the `ORD-<millis>-<suffix>` pattern.
    pub fn create(field_name: &str, value: &str) -> Result<Self, ValidationError> {
        constrained_type::create_like(field_name, OrderNumber, &ORDER_NUMBER_PATTERN, value)
    }

    /// Generates a fresh `OrderNumber` for an order created at `now`
    ///
    /// # Arguments
    ///
    /// * `now` - Creation timestamp embedded in the number
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::Utc;
    /// use food_order_service::simple_types::OrderNumber;
    ///
    /// let number = OrderNumber::generate(Utc::now());
    /// assert!(number.value().starts_with("ORD-"));
    /// ```
    #[must_use]
    pub fn generate(now: DateTime<Utc>) -> Self {
        let suffix = Uuid::new_v4().simple().to_string();
        Self(format!("ORD-{}-{}", now.timestamp_millis(), &suffix[..4]))
    }

    /// Returns a reference to the inner order number string
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}
