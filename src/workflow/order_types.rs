//! The order aggregate

use chrono::{DateTime, Utc};

use crate::compound_types::LineItem;
use crate::simple_types::{
    AddressId, OrderId, OrderNumber, OrderType, PaymentMethod, PaymentStatus, RestaurantId,
    RiderId, String200, TiffinPlanId, UserId,
};
use crate::workflow::pricing::PriceBreakdown;
use crate::workflow::status::OrderStatus;
use crate::workflow::tracking::TrackingEntry;

// =============================================================================
// ProviderRef
// =============================================================================

/// The provider an order was placed against
///
/// Exactly one of a restaurant or a tiffin plan. Using an enum makes the
/// "one or the other, never both" rule unrepresentable any other way.
///
/// # Examples
///
/// ```
/// use food_order_service::simple_types::{OrderType, RestaurantId};
/// use food_order_service::workflow::ProviderRef;
///
/// let provider = ProviderRef::Restaurant(
///     RestaurantId::create("RestaurantId", "rest-001").unwrap(),
/// );
/// assert_eq!(provider.order_type(), OrderType::Restaurant);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ProviderRef {
    /// A restaurant order
    Restaurant(RestaurantId),
    /// A tiffin plan order
    Tiffin(TiffinPlanId),
}

impl ProviderRef {
    /// Returns the order type implied by the provider kind
    #[must_use]
    pub const fn order_type(&self) -> OrderType {
        match self {
            Self::Restaurant(_) => OrderType::Restaurant,
            Self::Tiffin(_) => OrderType::Tiffin,
        }
    }

    /// Returns the restaurant ID when this is a restaurant order
    #[must_use]
    pub const fn restaurant_id(&self) -> Option<&RestaurantId> {
        match self {
            Self::Restaurant(id) => Some(id),
            Self::Tiffin(_) => None,
        }
    }

    /// Returns the tiffin plan ID when this is a tiffin order
    #[must_use]
    pub const fn tiffin_plan_id(&self) -> Option<&TiffinPlanId> {
        match self {
            Self::Restaurant(_) => None,
            Self::Tiffin(id) => Some(id),
        }
    }
}

// =============================================================================
// Order
// =============================================================================

/// Description recorded on the first tracking entry of every order
const PLACED_DESCRIPTION: &str = "Order placed successfully";

/// A placed order
///
/// Created atomically with its first tracking entry; afterwards mutated
/// only through status transitions. Orders are never deleted;
/// cancellation is a terminal status, not a removal. The price breakdown
/// is stamped at creation and never recomputed, so later catalog price
/// changes cannot alter a placed order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Order {
    order_id: OrderId,
    order_number: OrderNumber,
    user: UserId,
    provider: ProviderRef,
    items: Vec<LineItem>,
    breakdown: PriceBreakdown,
    status: OrderStatus,
    payment_method: PaymentMethod,
    payment_status: PaymentStatus,
    delivery_address: AddressId,
    delivery_instructions: Option<String200>,
    expected_delivery: Option<DateTime<Utc>>,
    delivered_at: Option<DateTime<Utc>>,
    rider: Option<RiderId>,
    tracking: Vec<TrackingEntry>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    version: u64,
}

impl Order {
    /// Places a new order
    ///
    /// The order starts in `pending` with a pending payment, carries the
    /// given price breakdown, and records its first tracking entry in the
    /// same construction.
    ///
    /// # Arguments
    ///
    /// * `user` - The placing user (owner)
    /// * `provider` - The chosen restaurant or tiffin plan
    /// * `items` - Cart line items in display order
    /// * `breakdown` - Price breakdown computed for this cart
    /// * `payment_method` - Payment method chosen at checkout
    /// * `delivery_address` - Stored address reference
    /// * `delivery_instructions` - Optional delivery note
    /// * `now` - Placement timestamp
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn place(
        user: UserId,
        provider: ProviderRef,
        items: Vec<LineItem>,
        breakdown: PriceBreakdown,
        payment_method: PaymentMethod,
        delivery_address: AddressId,
        delivery_instructions: Option<String200>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            order_id: OrderId::generate(),
            order_number: OrderNumber::generate(now),
            user,
            provider,
            items,
            breakdown,
            status: OrderStatus::Pending,
            payment_method,
            payment_status: PaymentStatus::Pending,
            delivery_address,
            delivery_instructions,
            expected_delivery: None,
            delivered_at: None,
            rider: None,
            tracking: vec![TrackingEntry::new(
                OrderStatus::Pending,
                PLACED_DESCRIPTION.to_string(),
                now,
            )],
            created_at: now,
            updated_at: now,
            version: 0,
        }
    }

    /// Applies an accepted status transition
    ///
    /// Sets the status, appends exactly one tracking entry, stamps
    /// `delivered_at` when the order reaches `delivered`, and bumps the
    /// version for the storage compare-and-swap. The caller is
    /// responsible for having validated the transition first.
    pub(crate) fn apply_transition(
        &mut self,
        status: OrderStatus,
        description: String,
        now: DateTime<Utc>,
    ) {
        self.status = status;
        self.tracking.push(TrackingEntry::new(status, description, now));
        if status == OrderStatus::Delivered {
            self.delivered_at = Some(now);
        }
        self.updated_at = now;
        self.version += 1;
    }

    /// Returns the order record ID
    #[must_use]
    pub const fn order_id(&self) -> &OrderId {
        &self.order_id
    }

    /// Returns the customer-facing order number
    #[must_use]
    pub const fn order_number(&self) -> &OrderNumber {
        &self.order_number
    }

    /// Returns the owning user's ID
    #[must_use]
    pub const fn user(&self) -> &UserId {
        &self.user
    }

    /// Returns the provider reference
    #[must_use]
    pub const fn provider(&self) -> &ProviderRef {
        &self.provider
    }

    /// Returns the order type
    #[must_use]
    pub const fn order_type(&self) -> OrderType {
        self.provider.order_type()
    }

    /// Returns the line items in display order
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Returns the price breakdown stamped at creation
    #[must_use]
    pub const fn breakdown(&self) -> &PriceBreakdown {
        &self.breakdown
    }

    /// Returns the current status
    #[must_use]
    pub const fn status(&self) -> OrderStatus {
        self.status
    }

    /// Returns the payment method
    #[must_use]
    pub const fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }

    /// Returns the payment status
    #[must_use]
    pub const fn payment_status(&self) -> PaymentStatus {
        self.payment_status
    }

    /// Returns the delivery address reference
    #[must_use]
    pub const fn delivery_address(&self) -> &AddressId {
        &self.delivery_address
    }

    /// Returns the delivery instructions
    #[must_use]
    pub const fn delivery_instructions(&self) -> Option<&String200> {
        self.delivery_instructions.as_ref()
    }

    /// Returns the expected delivery time, when one has been set
    #[must_use]
    pub const fn expected_delivery(&self) -> Option<DateTime<Utc>> {
        self.expected_delivery
    }

    /// Returns when the order was delivered, once it has been
    #[must_use]
    pub const fn delivered_at(&self) -> Option<DateTime<Utc>> {
        self.delivered_at
    }

    /// Returns the assigned rider, when one has been assigned
    #[must_use]
    pub const fn rider(&self) -> Option<&RiderId> {
        self.rider.as_ref()
    }

    /// Returns the tracking history, oldest first
    #[must_use]
    pub fn tracking(&self) -> &[TrackingEntry] {
        &self.tracking
    }

    /// Returns when the order was placed
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns when the order was last mutated
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns the storage version used for compare-and-swap updates
    #[must_use]
    pub const fn version(&self) -> u64 {
        self.version
    }
}
