//! Pricing scenarios and invariants
//!
//! Exercises the cart pricing breakdown: the documented scenarios plus
//! property tests over arbitrary valid carts.

use food_order_service::compound_types::{DeliveryPolicy, LineItem};
use food_order_service::workflow::{OrderError, price_cart};
use proptest::prelude::*;
use rstest::rstest;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

// =============================================================================
// Test data factory
// =============================================================================

fn item(price: &str, quantity: u32) -> LineItem {
    LineItem::create("Test Item", Decimal::from_str(price).unwrap(), quantity, "").unwrap()
}

fn policy(minimum: &str, fee: &str) -> DeliveryPolicy {
    DeliveryPolicy::create(
        Decimal::from_str(minimum).unwrap(),
        Decimal::from_str(fee).unwrap(),
    )
    .unwrap()
}

// =============================================================================
// Documented scenarios
// =============================================================================

#[rstest]
fn test_scenario_subtotal_above_minimum() {
    // [{price: 100, qty: 2}], minOrder 150, flatFee 20
    let breakdown = price_cart(&[item("100", 2)], &policy("150", "20")).unwrap();

    assert_eq!(breakdown.subtotal().value(), Decimal::from(200));
    assert_eq!(breakdown.delivery_fee().value(), Decimal::from(20));
    assert_eq!(breakdown.tax().value(), Decimal::from_str("10.00").unwrap());
    assert_eq!(breakdown.total().value(), Decimal::from_str("230.00").unwrap());
}

#[rstest]
fn test_scenario_below_minimum_reports_minimum() {
    // Same items, minOrder 250: rejected, minimum reported
    let result = price_cart(&[item("100", 2)], &policy("250", "20"));

    assert_eq!(
        result,
        Err(OrderError::BelowMinimumOrder {
            minimum: Decimal::from(250)
        })
    );
}

#[rstest]
fn test_empty_cart_rejected_before_minimum_check() {
    let result = price_cart(&[], &policy("250", "20"));

    assert_eq!(result, Err(OrderError::EmptyCart));
}

#[rstest]
fn test_boundary_subtotal_equals_minimum() {
    let breakdown = price_cart(&[item("125", 2)], &policy("250", "20")).unwrap();

    assert_eq!(breakdown.subtotal().value(), Decimal::from(250));
    assert_eq!(breakdown.delivery_fee().value(), Decimal::from(20));
}

#[rstest]
fn test_fractional_prices_round_at_the_breakdown_not_per_line() {
    // 3 x 33.335 = 100.005 raw; rounds half-up to 100.01 once
    let breakdown = price_cart(&[item("33.335", 3)], &policy("0", "0")).unwrap();

    assert_eq!(
        breakdown.subtotal().value(),
        Decimal::from_str("100.01").unwrap()
    );
}

#[rstest]
fn test_zero_priced_item_allowed() {
    let breakdown = price_cart(&[item("0", 1)], &policy("0", "10")).unwrap();

    assert_eq!(breakdown.subtotal().value(), Decimal::ZERO);
    assert_eq!(breakdown.total().value(), Decimal::from(10));
}

// =============================================================================
// Invariants over arbitrary carts
// =============================================================================

fn cart_strategy() -> impl Strategy<Value = Vec<LineItem>> {
    // Unit prices up to 100.00 in paise, quantities up to 10, at most
    // 10 lines: keeps every total inside the representable range
    prop::collection::vec((1u32..=10_000, 1u32..=10), 1..=10).prop_map(|lines| {
        lines
            .into_iter()
            .map(|(paise, quantity)| {
                LineItem::create(
                    "Property Item",
                    Decimal::new(i64::from(paise), 2),
                    quantity,
                    "",
                )
                .unwrap()
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn prop_total_is_exact_sum_of_parts(items in cart_strategy(), fee_paise in 0u32..=5_000) {
        let delivery = DeliveryPolicy::create(
            Decimal::ZERO,
            Decimal::new(i64::from(fee_paise), 2),
        )
        .unwrap();

        let breakdown = price_cart(&items, &delivery).unwrap();

        prop_assert_eq!(
            breakdown.total().value(),
            breakdown.subtotal().value()
                + breakdown.delivery_fee().value()
                + breakdown.tax().value()
        );
    }

    #[test]
    fn prop_tax_is_five_percent_rounded_half_up(items in cart_strategy()) {
        let breakdown = price_cart(&items, &DeliveryPolicy::zero()).unwrap();

        let expected_tax = (breakdown.subtotal().value() * Decimal::from_str("0.05").unwrap())
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        prop_assert_eq!(breakdown.tax().value(), expected_tax);
    }

    #[test]
    fn prop_subtotal_is_sum_of_line_totals(items in cart_strategy()) {
        let breakdown = price_cart(&items, &DeliveryPolicy::zero()).unwrap();

        let raw: Decimal = items.iter().map(LineItem::line_total).sum();
        let expected = raw.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        prop_assert_eq!(breakdown.subtotal().value(), expected);
    }

    #[test]
    fn prop_below_minimum_always_rejects(items in cart_strategy()) {
        // A minimum above any representable subtotal for this strategy
        let delivery = DeliveryPolicy::create(
            Decimal::from(20_000),
            Decimal::from(20),
        )
        .unwrap();

        let result = price_cart(&items, &delivery);

        prop_assert_eq!(
            result,
            Err(OrderError::BelowMinimumOrder {
                minimum: Decimal::from(20_000)
            })
        );
    }

    #[test]
    fn prop_all_fields_non_negative(items in cart_strategy()) {
        let breakdown = price_cart(&items, &DeliveryPolicy::zero()).unwrap();

        prop_assert!(breakdown.subtotal().value() >= Decimal::ZERO);
        prop_assert!(breakdown.delivery_fee().value() >= Decimal::ZERO);
        prop_assert!(breakdown.tax().value() >= Decimal::ZERO);
        prop_assert!(breakdown.total().value() >= Decimal::ZERO);
    }
}
