//! Place-order workflow
//!
//! Turns an unvalidated checkout request into a persisted order:
//! validate → resolve the provider's delivery policy → price the cart →
//! build the order with its first tracking entry → insert.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::compound_types::{Actor, LineItem};
use crate::simple_types::{
    AddressId, OrderType, PaymentMethod, RestaurantId, String200, TiffinPlanId, ValidationError,
};
use crate::store::{OrderStore, ProviderCatalog};
use crate::workflow::error_types::OrderError;
use crate::workflow::order_types::{Order, ProviderRef};
use crate::workflow::pricing;

// =============================================================================
// Unvalidated input
// =============================================================================

/// One raw checkout line, exactly as it crossed the wire
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnvalidatedLineItem {
    /// Item name
    pub name: String,
    /// Unit price as a decimal string
    pub price: String,
    /// Quantity
    pub quantity: u32,
    /// Per-item instructions, empty for none
    pub instructions: String,
}

/// A raw checkout request, before any validation
///
/// Field values are plain strings; `validate_order` turns them into the
/// typed cart or reports the first field that fails.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnvalidatedOrder {
    /// "restaurant" or "tiffin"
    pub order_type: String,
    /// Cart lines in display order
    pub items: Vec<UnvalidatedLineItem>,
    /// Restaurant ID; used when `order_type` is "restaurant"
    pub restaurant_id: String,
    /// Tiffin plan ID; used when `order_type` is "tiffin"
    pub tiffin_plan_id: String,
    /// Stored delivery address reference
    pub delivery_address: String,
    /// "card", "cash", "upi", or "netbanking"
    pub payment_method: String,
    /// Delivery note, empty for none
    pub delivery_instructions: String,
}

// =============================================================================
// Validated cart
// =============================================================================

/// A checkout request with every field validated into its domain type
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidatedCart {
    provider: ProviderRef,
    items: Vec<LineItem>,
    delivery_address: AddressId,
    payment_method: PaymentMethod,
    delivery_instructions: Option<String200>,
}

impl ValidatedCart {
    /// Returns the chosen provider
    #[must_use]
    pub const fn provider(&self) -> &ProviderRef {
        &self.provider
    }

    /// Returns the validated line items
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }
}

// =============================================================================
// validate_order
// =============================================================================

/// Validates a raw checkout request into a typed cart
///
/// The provider reference is built from the ID field matching the order
/// type, so a request can never carry both a restaurant and a tiffin
/// plan into the domain.
///
/// # Arguments
///
/// * `unvalidated` - The raw request
///
/// # Errors
///
/// Returns [`OrderError::Validation`] naming the first field that fails
/// its constraint.
pub fn validate_order(unvalidated: &UnvalidatedOrder) -> Result<ValidatedCart, OrderError> {
    let order_type = OrderType::create("OrderType", &unvalidated.order_type)?;

    let provider = match order_type {
        OrderType::Restaurant => ProviderRef::Restaurant(RestaurantId::create(
            "RestaurantId",
            &unvalidated.restaurant_id,
        )?),
        OrderType::Tiffin => ProviderRef::Tiffin(TiffinPlanId::create(
            "TiffinPlanId",
            &unvalidated.tiffin_plan_id,
        )?),
    };

    let items = unvalidated
        .items
        .iter()
        .map(validate_line_item)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ValidatedCart {
        provider,
        items,
        delivery_address: AddressId::create("DeliveryAddress", &unvalidated.delivery_address)?,
        payment_method: PaymentMethod::create("PaymentMethod", &unvalidated.payment_method)?,
        delivery_instructions: String200::create_option(
            "DeliveryInstructions",
            &unvalidated.delivery_instructions,
        )?,
    })
}

/// Validates one raw cart line
fn validate_line_item(line: &UnvalidatedLineItem) -> Result<LineItem, ValidationError> {
    let price = Decimal::from_str(&line.price)
        .map_err(|_| ValidationError::new("Price", "Must be a decimal number"))?;
    LineItem::create(&line.name, price, line.quantity, &line.instructions)
}

// =============================================================================
// place_order
// =============================================================================

/// Places an order for the acting user
///
/// # Arguments
///
/// * `orders` - Order storage
/// * `providers` - Provider catalog used to resolve the delivery policy
/// * `actor` - The authenticated user placing the order (becomes owner)
/// * `unvalidated` - The raw checkout request
/// * `now` - Placement timestamp
///
/// # Errors
///
/// * [`OrderError::Validation`] - a request field failed validation
/// * [`OrderError::ProviderNotFound`] - unknown restaurant or tiffin plan
/// * [`OrderError::EmptyCart`] / [`OrderError::BelowMinimumOrder`] -
///   pricing rejections; nothing is persisted
/// * [`OrderError::Unavailable`] - storage failure
pub fn place_order<S, C>(
    orders: &S,
    providers: &C,
    actor: &Actor,
    unvalidated: &UnvalidatedOrder,
    now: DateTime<Utc>,
) -> Result<Order, OrderError>
where
    S: OrderStore + ?Sized,
    C: ProviderCatalog + ?Sized,
{
    let cart = validate_order(unvalidated)?;

    let policy = providers
        .delivery_policy(cart.provider())?
        .ok_or(OrderError::ProviderNotFound)?;

    let breakdown = pricing::price_cart(cart.items(), &policy)?;

    let order = Order::place(
        actor.user_id().clone(),
        cart.provider,
        cart.items,
        breakdown,
        cart.payment_method,
        cart.delivery_address,
        cart.delivery_instructions,
        now,
    );
    orders.insert(&order)?;

    Ok(order)
}
