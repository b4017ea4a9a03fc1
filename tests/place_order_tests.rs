//! Place-order workflow tests
//!
//! Runs the checkout workflow against the in-memory store and checks
//! what gets persisted, and what never does.

use chrono::Utc;
use food_order_service::compound_types::{Actor, ActorRole, DeliveryPolicy};
use food_order_service::simple_types::{PaymentStatus, UserId};
use food_order_service::store::{InMemoryStore, OrderFilter, OrderStore, Page};
use food_order_service::workflow::{
    OrderError, OrderStatus, UnvalidatedLineItem, UnvalidatedOrder, place_order,
};
use rstest::rstest;
use rust_decimal::Decimal;
use std::str::FromStr;

// =============================================================================
// Test data factory
// =============================================================================

fn customer(id: &str) -> Actor {
    Actor::new(UserId::create("UserId", id).unwrap(), ActorRole::Customer)
}

fn seeded_store() -> InMemoryStore {
    let store = InMemoryStore::new();
    store.register_restaurant(
        "rest-001",
        DeliveryPolicy::create(Decimal::from(150), Decimal::from(20)).unwrap(),
    );
    store.register_tiffin_plan("tiffin-001");
    store
}

fn restaurant_request() -> UnvalidatedOrder {
    UnvalidatedOrder {
        order_type: "restaurant".to_string(),
        items: vec![UnvalidatedLineItem {
            name: "Thali".to_string(),
            price: "100".to_string(),
            quantity: 2,
            instructions: String::new(),
        }],
        restaurant_id: "rest-001".to_string(),
        tiffin_plan_id: String::new(),
        delivery_address: "addr-1".to_string(),
        payment_method: "upi".to_string(),
        delivery_instructions: "Ring twice".to_string(),
    }
}

fn owned_orders(store: &InMemoryStore, user: &str) -> u64 {
    store
        .find_by_user(
            &UserId::create("UserId", user).unwrap(),
            &OrderFilter::default(),
            Page::default(),
        )
        .unwrap()
        .total
}

// =============================================================================
// Successful placement
// =============================================================================

#[rstest]
fn test_place_order_persists_with_breakdown_and_tracking() {
    let store = seeded_store();

    let order = place_order(
        &store,
        &store,
        &customer("user-1"),
        &restaurant_request(),
        Utc::now(),
    )
    .unwrap();

    assert_eq!(order.status(), OrderStatus::Pending);
    assert_eq!(order.payment_status(), PaymentStatus::Pending);
    assert_eq!(order.breakdown().subtotal().value(), Decimal::from(200));
    assert_eq!(order.breakdown().delivery_fee().value(), Decimal::from(20));
    assert_eq!(
        order.breakdown().tax().value(),
        Decimal::from_str("10.00").unwrap()
    );
    assert_eq!(
        order.breakdown().total().value(),
        Decimal::from_str("230.00").unwrap()
    );

    // First tracking entry carries the placement description
    assert_eq!(order.tracking().len(), 1);
    assert_eq!(order.tracking()[0].status(), OrderStatus::Pending);
    assert_eq!(order.tracking()[0].description(), "Order placed successfully");

    // Persisted under the owner
    assert_eq!(owned_orders(&store, "user-1"), 1);
    let stored = store.find(order.order_id()).unwrap().unwrap();
    assert_eq!(stored, order);
}

#[rstest]
fn test_place_order_generates_order_number() {
    let store = seeded_store();

    let order = place_order(
        &store,
        &store,
        &customer("user-1"),
        &restaurant_request(),
        Utc::now(),
    )
    .unwrap();

    assert!(order.order_number().value().starts_with("ORD-"));
}

#[rstest]
fn test_place_tiffin_order_charges_no_fee_or_minimum() {
    let store = seeded_store();
    let mut request = restaurant_request();
    request.order_type = "tiffin".to_string();
    request.tiffin_plan_id = "tiffin-001".to_string();
    request.restaurant_id = String::new();
    request.items[0].price = "60".to_string();
    request.items[0].quantity = 1;

    let order = place_order(&store, &store, &customer("user-1"), &request, Utc::now()).unwrap();

    assert_eq!(order.breakdown().delivery_fee().value(), Decimal::ZERO);
    assert_eq!(order.breakdown().subtotal().value(), Decimal::from(60));
    assert!(order.provider().tiffin_plan_id().is_some());
    assert!(order.provider().restaurant_id().is_none());
}

#[rstest]
fn test_place_order_keeps_item_display_order() {
    let store = seeded_store();
    let mut request = restaurant_request();
    request.items = vec![
        UnvalidatedLineItem {
            name: "Starter".to_string(),
            price: "80".to_string(),
            quantity: 1,
            instructions: String::new(),
        },
        UnvalidatedLineItem {
            name: "Main".to_string(),
            price: "120".to_string(),
            quantity: 1,
            instructions: String::new(),
        },
    ];

    let order = place_order(&store, &store, &customer("user-1"), &request, Utc::now()).unwrap();

    assert_eq!(order.items()[0].name().value(), "Starter");
    assert_eq!(order.items()[1].name().value(), "Main");
}

// =============================================================================
// Rejections persist nothing
// =============================================================================

#[rstest]
fn test_below_minimum_rejection_persists_nothing() {
    let store = seeded_store();
    let mut request = restaurant_request();
    request.items[0].quantity = 1; // subtotal 100 < 150

    let result = place_order(&store, &store, &customer("user-1"), &request, Utc::now());

    assert_eq!(
        result,
        Err(OrderError::BelowMinimumOrder {
            minimum: Decimal::from(150)
        })
    );
    assert_eq!(owned_orders(&store, "user-1"), 0);
}

#[rstest]
fn test_empty_cart_rejection_persists_nothing() {
    let store = seeded_store();
    let mut request = restaurant_request();
    request.items.clear();

    let result = place_order(&store, &store, &customer("user-1"), &request, Utc::now());

    assert_eq!(result, Err(OrderError::EmptyCart));
    assert_eq!(owned_orders(&store, "user-1"), 0);
}

#[rstest]
fn test_unknown_restaurant_rejected() {
    let store = seeded_store();
    let mut request = restaurant_request();
    request.restaurant_id = "rest-404".to_string();

    let result = place_order(&store, &store, &customer("user-1"), &request, Utc::now());

    assert_eq!(result, Err(OrderError::ProviderNotFound));
    assert_eq!(owned_orders(&store, "user-1"), 0);
}

#[rstest]
fn test_unknown_tiffin_plan_rejected() {
    let store = seeded_store();
    let mut request = restaurant_request();
    request.order_type = "tiffin".to_string();
    request.tiffin_plan_id = "tiffin-404".to_string();

    let result = place_order(&store, &store, &customer("user-1"), &request, Utc::now());

    assert_eq!(result, Err(OrderError::ProviderNotFound));
}

#[rstest]
fn test_invalid_fields_rejected_with_field_name() {
    let store = seeded_store();
    let mut request = restaurant_request();
    request.payment_method = "cheque".to_string();

    let result = place_order(&store, &store, &customer("user-1"), &request, Utc::now());

    assert!(
        matches!(result, Err(OrderError::Validation(ref e)) if e.field_name == "PaymentMethod")
    );
    assert_eq!(owned_orders(&store, "user-1"), 0);
}

// =============================================================================
// Price immutability
// =============================================================================

#[rstest]
fn test_breakdown_survives_later_policy_change() {
    let store = seeded_store();
    let order = place_order(
        &store,
        &store,
        &customer("user-1"),
        &restaurant_request(),
        Utc::now(),
    )
    .unwrap();

    // The restaurant raises its fee after the order was placed
    store.register_restaurant(
        "rest-001",
        DeliveryPolicy::create(Decimal::from(150), Decimal::from(99)).unwrap(),
    );

    let stored = store.find(order.order_id()).unwrap().unwrap();
    assert_eq!(stored.breakdown().delivery_fee().value(), Decimal::from(20));
}
