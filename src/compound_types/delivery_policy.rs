//! Provider delivery policy

use rust_decimal::Decimal;

use crate::simple_types::{OrderAmount, ValidationError};

/// The delivery terms a provider attaches to its orders
///
/// Holds the minimum order amount and the flat delivery fee. The policy
/// is owned by the provider (restaurant or tiffin plan) and is read-only
/// to the order that consumes it. Tiffin plans carry the zero policy: no
/// fee, no minimum.
///
/// # Examples
///
/// ```
/// use food_order_service::compound_types::DeliveryPolicy;
/// use rust_decimal::Decimal;
///
/// let policy = DeliveryPolicy::create(Decimal::from(150), Decimal::from(20)).unwrap();
/// assert_eq!(policy.minimum_order().value(), Decimal::from(150));
/// assert_eq!(policy.flat_fee().value(), Decimal::from(20));
///
/// let free = DeliveryPolicy::zero();
/// assert_eq!(free.flat_fee().value(), Decimal::ZERO);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeliveryPolicy {
    minimum_order: OrderAmount,
    flat_fee: OrderAmount,
}

impl DeliveryPolicy {
    /// Creates a `DeliveryPolicy` from raw decimals
    ///
    /// # Arguments
    ///
    /// * `minimum_order` - Minimum order amount (non-negative)
    /// * `flat_fee` - Flat delivery fee (non-negative)
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` when either amount is out of range.
    pub fn create(minimum_order: Decimal, flat_fee: Decimal) -> Result<Self, ValidationError> {
        Ok(Self {
            minimum_order: OrderAmount::create(minimum_order)?,
            flat_fee: OrderAmount::create(flat_fee)?,
        })
    }

    /// Creates a `DeliveryPolicy` from already-validated parts
    #[must_use]
    pub const fn new(minimum_order: OrderAmount, flat_fee: OrderAmount) -> Self {
        Self {
            minimum_order,
            flat_fee,
        }
    }

    /// Returns the zero policy: no minimum, no fee
    #[must_use]
    pub fn zero() -> Self {
        Self {
            minimum_order: OrderAmount::zero(),
            flat_fee: OrderAmount::zero(),
        }
    }

    /// Returns the minimum order amount
    #[must_use]
    pub const fn minimum_order(&self) -> &OrderAmount {
        &self.minimum_order
    }

    /// Returns the flat delivery fee
    #[must_use]
    pub const fn flat_fee(&self) -> &OrderAmount {
        &self.flat_fee
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[rstest]
    fn test_delivery_policy_create_valid() {
        let policy = DeliveryPolicy::create(Decimal::from(150), Decimal::from(20));

        assert!(policy.is_ok());
    }

    #[rstest]
    fn test_delivery_policy_create_negative_minimum() {
        let result = DeliveryPolicy::create(Decimal::from_str("-1.0").unwrap(), Decimal::from(20));

        assert!(result.is_err());
    }

    #[rstest]
    fn test_delivery_policy_create_negative_fee() {
        let result = DeliveryPolicy::create(Decimal::ZERO, Decimal::from_str("-0.01").unwrap());

        assert!(result.is_err());
    }

    #[rstest]
    fn test_delivery_policy_zero() {
        let policy = DeliveryPolicy::zero();

        assert_eq!(policy.minimum_order().value(), Decimal::ZERO);
        assert_eq!(policy.flat_fee().value(), Decimal::ZERO);
    }
}
