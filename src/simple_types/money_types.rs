//! Monetary type definitions
//!
//! Defines `Price` (a unit price) and `OrderAmount` (a monetary amount on
//! an order: subtotal, delivery fee, tax, total).

use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

use super::constrained_type;
use super::error::ValidationError;

// =============================================================================
// Price
// =============================================================================

/// A unit price for a single catalog item
///
/// Constrained to the range 0.00 to 100000.00.
///
/// # Examples
///
/// ```
/// use food_order_service::simple_types::Price;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let price = Price::create(Decimal::from_str("99.99").unwrap()).unwrap();
/// assert_eq!(price.value(), Decimal::from_str("99.99").unwrap());
///
/// // Out of range is an error
/// assert!(Price::create(Decimal::from_str("-1.0").unwrap()).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Price(Decimal);

impl Price {
    /// Field name for `Price`
    const FIELD_NAME: &'static str = "Price";

    /// Returns the minimum value of `Price`
    fn min_value() -> Decimal {
        Decimal::from_str("0.0").expect("Valid decimal literal")
    }

    /// Returns the maximum value of `Price`
    fn max_value() -> Decimal {
        Decimal::from_str("100000.00").expect("Valid decimal literal")
    }

    /// Creates a `Price` from a decimal
    ///
    /// # Arguments
    ///
    /// * `value` - Input decimal
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` when the value is below 0.00 or above
    /// 100000.00.
    pub fn create(value: Decimal) -> Result<Self, ValidationError> {
        constrained_type::create_decimal(
            Self::FIELD_NAME,
            Price,
            Self::min_value(),
            Self::max_value(),
            value,
        )
    }

    /// Creates a `Price` without validation
    ///
    /// Use only when the value is certain to be valid.
    ///
    /// # Panics
    ///
    /// Panics when given an out-of-range value.
    #[must_use]
    pub fn unsafe_create(value: Decimal) -> Self {
        Self::create(value)
            .unwrap_or_else(|error| panic!("Not expecting Price to be out of bounds: {error}"))
    }

    /// Returns the inner decimal value
    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.0
    }
}

// =============================================================================
// OrderAmount
// =============================================================================

/// A monetary amount carried on an order
///
/// Constrained to the range 0.00 to 1000000.00. Used for the subtotal,
/// delivery fee, tax, and total of a price breakdown.
///
/// # Examples
///
/// ```
/// use food_order_service::simple_types::OrderAmount;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let amount = OrderAmount::create(Decimal::from_str("230.00").unwrap()).unwrap();
/// assert_eq!(amount.value(), Decimal::from_str("230.00").unwrap());
///
/// assert!(OrderAmount::create(Decimal::from_str("-1.0").unwrap()).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct OrderAmount(Decimal);

impl OrderAmount {
    /// Field name for `OrderAmount`
    const FIELD_NAME: &'static str = "OrderAmount";

    /// Returns the minimum value of `OrderAmount`
    fn min_value() -> Decimal {
        Decimal::from_str("0.0").expect("Valid decimal literal")
    }

    /// Returns the maximum value of `OrderAmount`
    fn max_value() -> Decimal {
        Decimal::from_str("1000000.00").expect("Valid decimal literal")
    }

    /// Creates an `OrderAmount` from a decimal
    ///
    /// # Arguments
    ///
    /// * `value` - Input decimal
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` when the value is below 0.00 or above
    /// 1000000.00.
    pub fn create(value: Decimal) -> Result<Self, ValidationError> {
        constrained_type::create_decimal(
            Self::FIELD_NAME,
            OrderAmount,
            Self::min_value(),
            Self::max_value(),
            value,
        )
    }

    /// Creates an `OrderAmount` rounded half-up to the currency minor unit
    ///
    /// Rounding happens once here, at the point a breakdown field is
    /// produced, never at intermediate line-total steps.
    ///
    /// # Arguments
    ///
    /// * `value` - Raw decimal to round to 2 decimal places
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` when the rounded value is out of range.
    ///
    /// # Examples
    ///
    /// ```
    /// use food_order_service::simple_types::OrderAmount;
    /// use rust_decimal::Decimal;
    /// use std::str::FromStr;
    ///
    /// let amount = OrderAmount::create_rounded(Decimal::from_str("10.005").unwrap()).unwrap();
    /// assert_eq!(amount.value(), Decimal::from_str("10.01").unwrap());
    /// ```
    pub fn create_rounded(value: Decimal) -> Result<Self, ValidationError> {
        Self::create(value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
    }

    /// Adds another amount, producing a new `OrderAmount`
    ///
    /// # Arguments
    ///
    /// * `other` - Amount to add
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` when the sum exceeds 1000000.00.
    pub fn add(&self, other: Self) -> Result<Self, ValidationError> {
        Self::create(self.0 + other.0)
    }

    /// Returns the inner decimal value
    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.0
    }

    /// Returns the zero amount
    #[must_use]
    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // =========================================================================
    // Price Tests
    // =========================================================================

    #[rstest]
    fn test_price_create_valid() {
        let value = Decimal::from_str("120.50").unwrap();
        let result = Price::create(value);

        assert!(result.is_ok());
        assert_eq!(result.unwrap().value(), value);
    }

    #[rstest]
    fn test_price_create_min() {
        let result = Price::create(Decimal::ZERO);

        assert!(result.is_ok());
    }

    #[rstest]
    fn test_price_create_below_min() {
        let value = Decimal::from_str("-0.01").unwrap();
        let result = Price::create(value);

        assert!(result.is_err());
        let error = result.unwrap_err();
        assert_eq!(error.field_name, "Price");
        assert!(error.message.contains("Must not be less than"));
    }

    #[rstest]
    fn test_price_create_above_max() {
        let value = Decimal::from_str("100000.01").unwrap();
        let result = Price::create(value);

        assert!(result.is_err());
    }

    #[rstest]
    #[should_panic(expected = "Not expecting Price to be out of bounds")]
    fn test_price_unsafe_create_panic() {
        let value = Decimal::from_str("-5.0").unwrap();
        let _price = Price::unsafe_create(value);
    }

    // =========================================================================
    // OrderAmount Tests
    // =========================================================================

    #[rstest]
    fn test_order_amount_create_valid() {
        let value = Decimal::from_str("230.00").unwrap();
        let result = OrderAmount::create(value);

        assert!(result.is_ok());
        assert_eq!(result.unwrap().value(), value);
    }

    #[rstest]
    fn test_order_amount_create_below_min() {
        let result = OrderAmount::create(Decimal::from_str("-0.01").unwrap());

        assert!(result.is_err());
        assert_eq!(result.unwrap_err().field_name, "OrderAmount");
    }

    #[rstest]
    fn test_order_amount_create_above_max() {
        let result = OrderAmount::create(Decimal::from_str("1000000.01").unwrap());

        assert!(result.is_err());
    }

    #[rstest]
    #[case("10.005", "10.01")]
    #[case("10.004", "10.00")]
    #[case("10.0", "10.0")]
    #[case("0.125", "0.13")]
    fn test_order_amount_create_rounded_half_up(#[case] raw: &str, #[case] expected: &str) {
        let result = OrderAmount::create_rounded(Decimal::from_str(raw).unwrap());

        assert!(result.is_ok());
        assert_eq!(
            result.unwrap().value(),
            Decimal::from_str(expected).unwrap()
        );
    }

    #[rstest]
    fn test_order_amount_add() {
        let left = OrderAmount::create(Decimal::from_str("200.00").unwrap()).unwrap();
        let right = OrderAmount::create(Decimal::from_str("30.00").unwrap()).unwrap();

        let sum = left.add(right).unwrap();
        assert_eq!(sum.value(), Decimal::from_str("230.00").unwrap());
    }

    #[rstest]
    fn test_order_amount_add_overflow() {
        let left = OrderAmount::create(Decimal::from_str("999999.00").unwrap()).unwrap();
        let right = OrderAmount::create(Decimal::from_str("2.00").unwrap()).unwrap();

        assert!(left.add(right).is_err());
    }

    #[rstest]
    fn test_order_amount_zero() {
        assert_eq!(OrderAmount::zero().value(), Decimal::ZERO);
    }
}
