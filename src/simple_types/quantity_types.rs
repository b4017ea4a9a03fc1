//! Quantity type definition

use super::constrained_type;
use super::error::ValidationError;

/// Minimum quantity per order line
const QUANTITY_MIN: u32 = 1;

/// Maximum quantity per order line
const QUANTITY_MAX: u32 = 100;

/// A per-line item quantity
///
/// A positive integer constrained to the range 1 to 100.
///
/// # Examples
///
/// ```
/// use food_order_service::simple_types::Quantity;
///
/// let quantity = Quantity::create("Quantity", 2).unwrap();
/// assert_eq!(quantity.value(), 2);
///
/// // Zero is rejected
/// assert!(Quantity::create("Quantity", 0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Quantity(u32);

impl Quantity {
    /// Creates a `Quantity` from an integer
    ///
    /// # Arguments
    ///
    /// * `field_name` - Field name used in error messages
    /// * `value` - Input integer
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` when the value is 0 or greater than 100.
    pub fn create(field_name: &str, value: u32) -> Result<Self, ValidationError> {
        constrained_type::create_integer(field_name, Quantity, QUANTITY_MIN, QUANTITY_MAX, value)
    }

    /// Returns the inner integer value
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.0
    }
}
