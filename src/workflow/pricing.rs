//! Cart pricing
//!
//! Derives the monetary breakdown of a cart from its line items and the
//! provider's delivery policy. Pure functions only; the breakdown is
//! stamped onto the order at creation and never recomputed afterwards.

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::compound_types::{DeliveryPolicy, LineItem};
use crate::simple_types::OrderAmount;
use crate::workflow::error_types::OrderError;

/// Returns the fixed tax rate applied to the subtotal
///
/// 5% GST. A policy constant, not configurable per provider.
#[must_use]
pub fn tax_rate() -> Decimal {
    Decimal::from_str("0.05").expect("Valid decimal literal")
}

// =============================================================================
// PriceBreakdown
// =============================================================================

/// The monetary breakdown of an order
///
/// Construction computes the total from the other three fields, so the
/// invariant `total = subtotal + delivery fee + tax` holds by
/// construction and cannot be violated by independent mutation.
///
/// # Examples
///
/// ```
/// use food_order_service::simple_types::OrderAmount;
/// use food_order_service::workflow::PriceBreakdown;
/// use rust_decimal::Decimal;
///
/// let breakdown = PriceBreakdown::new(
///     OrderAmount::create(Decimal::from(200)).unwrap(),
///     OrderAmount::create(Decimal::from(20)).unwrap(),
///     OrderAmount::create(Decimal::from(10)).unwrap(),
/// )
/// .unwrap();
/// assert_eq!(breakdown.total().value(), Decimal::from(230));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PriceBreakdown {
    subtotal: OrderAmount,
    delivery_fee: OrderAmount,
    tax: OrderAmount,
    total: OrderAmount,
}

impl PriceBreakdown {
    /// Creates a `PriceBreakdown`, deriving the total
    ///
    /// # Arguments
    ///
    /// * `subtotal` - Sum of line totals
    /// * `delivery_fee` - Flat delivery fee charged
    /// * `tax` - Tax on the subtotal
    ///
    /// # Errors
    ///
    /// Returns `OrderError::Validation` when the total exceeds the
    /// `OrderAmount` range.
    pub fn new(
        subtotal: OrderAmount,
        delivery_fee: OrderAmount,
        tax: OrderAmount,
    ) -> Result<Self, OrderError> {
        let total = subtotal.add(delivery_fee)?.add(tax)?;
        Ok(Self {
            subtotal,
            delivery_fee,
            tax,
            total,
        })
    }

    /// Returns the subtotal
    #[must_use]
    pub const fn subtotal(&self) -> &OrderAmount {
        &self.subtotal
    }

    /// Returns the delivery fee
    #[must_use]
    pub const fn delivery_fee(&self) -> &OrderAmount {
        &self.delivery_fee
    }

    /// Returns the tax
    #[must_use]
    pub const fn tax(&self) -> &OrderAmount {
        &self.tax
    }

    /// Returns the grand total
    #[must_use]
    pub const fn total(&self) -> &OrderAmount {
        &self.total
    }
}

// =============================================================================
// price_cart
// =============================================================================

/// Prices a cart against a provider's delivery policy
///
/// Deterministic and side-effect free:
///
/// 1. an empty cart is rejected before anything else;
/// 2. the subtotal is the sum of line totals, rounded half-up to the
///    currency minor unit (line totals themselves are not rounded);
/// 3. a subtotal below the policy minimum rejects the cart, reporting
///    the minimum so the caller can display it;
/// 4. the flat fee is charged unconditionally once the minimum check
///    passes;
/// 5. tax is 5% of the subtotal, rounded half-up;
/// 6. the total is the exact sum of the three rounded parts.
///
/// # Arguments
///
/// * `items` - Cart line items, in display order
/// * `policy` - The chosen provider's delivery policy
///
/// # Errors
///
/// * [`OrderError::EmptyCart`] - no line items
/// * [`OrderError::BelowMinimumOrder`] - subtotal under the policy minimum
/// * [`OrderError::Validation`] - an amount fell outside the representable
///   range
///
/// # Examples
///
/// ```
/// use food_order_service::compound_types::{DeliveryPolicy, LineItem};
/// use food_order_service::workflow::pricing::price_cart;
/// use rust_decimal::Decimal;
///
/// let items = vec![LineItem::create("Thali", Decimal::from(100), 2, "").unwrap()];
/// let policy = DeliveryPolicy::create(Decimal::from(150), Decimal::from(20)).unwrap();
///
/// let breakdown = price_cart(&items, &policy).unwrap();
/// assert_eq!(breakdown.subtotal().value(), Decimal::from(200));
/// assert_eq!(breakdown.delivery_fee().value(), Decimal::from(20));
/// assert_eq!(breakdown.tax().value(), Decimal::from(10));
/// assert_eq!(breakdown.total().value(), Decimal::from(230));
/// ```
pub fn price_cart(
    items: &[LineItem],
    policy: &DeliveryPolicy,
) -> Result<PriceBreakdown, OrderError> {
    if items.is_empty() {
        return Err(OrderError::EmptyCart);
    }

    let raw_subtotal: Decimal = items.iter().map(LineItem::line_total).sum();
    let subtotal = OrderAmount::create_rounded(raw_subtotal)?;

    if subtotal.value() < policy.minimum_order().value() {
        return Err(OrderError::BelowMinimumOrder {
            minimum: policy.minimum_order().value(),
        });
    }

    let delivery_fee = OrderAmount::create_rounded(policy.flat_fee().value())?;
    let tax = OrderAmount::create_rounded(subtotal.value() * tax_rate())?;

    PriceBreakdown::new(subtotal, delivery_fee, tax)
}
