//! Order lifecycle manager
//!
//! Owns every mutation and read of a placed order: the permission-gated
//! status transition, the dedicated cancellation path, and the owner
//! projections. Each accepted transition updates the status and appends
//! its tracking entry in one compare-and-swap against the stored order,
//! so racing requests cannot both succeed from the same prior status.
//!
//! Cancellation deliberately exists twice with different eligibility:
//! [`update_status`] applies the owner's 5-minute grace window, while
//! [`cancel_order`] (the dedicated endpoint) only requires the order to
//! still be pending or confirmed. The two rules disagree on purpose —
//! they mirror two long-standing entry points whose behaviors are both
//! documented, and unifying them silently would change one of them.

use chrono::{DateTime, Utc};

use crate::compound_types::{Actor, ActorRole};
use crate::simple_types::{OrderId, OrderNumber, RiderId};
use crate::store::{OrderFilter, OrderPage, OrderStore, Page};
use crate::workflow::error_types::OrderError;
use crate::workflow::order_types::Order;
use crate::workflow::permissions;
use crate::workflow::status::OrderStatus;
use crate::workflow::tracking::TrackingEntry;

/// Description recorded when the customer cancels through the dedicated
/// cancellation path
const CANCELLED_BY_CUSTOMER: &str = "Order cancelled by customer";

// =============================================================================
// update_status
// =============================================================================

/// Applies a status transition to an order
///
/// Looks up the order, checks ownership for customers, consults the
/// permission table, then applies the transition: the status change and
/// its tracking entry land through one versioned update. Moving into
/// `delivered` stamps the delivered-at timestamp.
///
/// # Arguments
///
/// * `orders` - Order storage
/// * `order_id` - The order to transition
/// * `requested` - The status being requested
/// * `actor` - The authenticated acting user
/// * `now` - Transition request timestamp
///
/// # Errors
///
/// * [`OrderError::OrderNotFound`] - unknown order
/// * [`OrderError::AccessDenied`] - a customer touching someone else's
///   order, or requesting anything but cancellation
/// * [`OrderError::TerminalStateViolation`] - the order is delivered,
///   cancelled, or refunded
/// * [`OrderError::InvalidTransition`] /
///   [`OrderError::CancellationWindowExpired`] - owner cancellation rules
/// * [`OrderError::Unavailable`] - storage failure or concurrent update
pub fn update_status<S>(
    orders: &S,
    order_id: &OrderId,
    requested: OrderStatus,
    actor: &Actor,
    now: DateTime<Utc>,
) -> Result<Order, OrderError>
where
    S: OrderStore + ?Sized,
{
    let order = orders.find(order_id)?.ok_or(OrderError::OrderNotFound)?;

    if actor.role() == ActorRole::Customer && order.user() != actor.user_id() {
        return Err(OrderError::AccessDenied);
    }

    let elapsed = now - order.created_at();
    permissions::check_transition(actor.role(), order.status(), requested, elapsed)?;

    let expected_version = order.version();
    let mut updated = order;
    updated.apply_transition(requested, requested.description().to_string(), now);
    orders.update(&updated, expected_version)?;

    Ok(updated)
}

// =============================================================================
// cancel_order
// =============================================================================

/// Cancels an order through the dedicated cancellation path
///
/// Owner-only — administrators included are refused, matching the
/// endpoint this preserves. The order must still be `pending` or
/// `confirmed`; unlike the owner rule in [`update_status`], no time
/// window applies here.
///
/// # Arguments
///
/// * `orders` - Order storage
/// * `order_id` - The order to cancel
/// * `actor` - The authenticated acting user (must own the order)
/// * `now` - Cancellation request timestamp
///
/// # Errors
///
/// * [`OrderError::OrderNotFound`] - unknown order
/// * [`OrderError::AccessDenied`] - actor does not own the order
/// * [`OrderError::TerminalStateViolation`] - the order already reached a
///   terminal status
/// * [`OrderError::InvalidTransition`] - the order has progressed past
///   `confirmed`
/// * [`OrderError::Unavailable`] - storage failure or concurrent update
pub fn cancel_order<S>(
    orders: &S,
    order_id: &OrderId,
    actor: &Actor,
    now: DateTime<Utc>,
) -> Result<Order, OrderError>
where
    S: OrderStore + ?Sized,
{
    let order = orders.find(order_id)?.ok_or(OrderError::OrderNotFound)?;

    if order.user() != actor.user_id() {
        return Err(OrderError::AccessDenied);
    }

    if order.status().is_terminal() {
        return Err(OrderError::TerminalStateViolation {
            status: order.status(),
        });
    }
    if !matches!(order.status(), OrderStatus::Pending | OrderStatus::Confirmed) {
        return Err(OrderError::InvalidTransition {
            from: order.status(),
            to: OrderStatus::Cancelled,
        });
    }

    let expected_version = order.version();
    let mut updated = order;
    updated.apply_transition(
        OrderStatus::Cancelled,
        CANCELLED_BY_CUSTOMER.to_string(),
        now,
    );
    orders.update(&updated, expected_version)?;

    Ok(updated)
}

// =============================================================================
// get_order
// =============================================================================

/// Fetches a full order
///
/// Readable by the owner or an administrator.
///
/// # Arguments
///
/// * `orders` - Order storage
/// * `order_id` - The order to fetch
/// * `actor` - The authenticated acting user
///
/// # Errors
///
/// * [`OrderError::OrderNotFound`] - unknown order
/// * [`OrderError::AccessDenied`] - neither owner nor administrator
/// * [`OrderError::Unavailable`] - storage failure
pub fn get_order<S>(orders: &S, order_id: &OrderId, actor: &Actor) -> Result<Order, OrderError>
where
    S: OrderStore + ?Sized,
{
    let order = orders.find(order_id)?.ok_or(OrderError::OrderNotFound)?;

    if order.user() != actor.user_id() && actor.role() != ActorRole::Admin {
        return Err(OrderError::AccessDenied);
    }

    Ok(order)
}

// =============================================================================
// track_order
// =============================================================================

/// The read-only delivery-tracking projection of an order
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackOrderView {
    order_number: OrderNumber,
    status: OrderStatus,
    tracking: Vec<TrackingEntry>,
    expected_delivery: Option<DateTime<Utc>>,
    rider: Option<RiderId>,
}

impl TrackOrderView {
    /// Returns the customer-facing order number
    #[must_use]
    pub const fn order_number(&self) -> &OrderNumber {
        &self.order_number
    }

    /// Returns the current status
    #[must_use]
    pub const fn status(&self) -> OrderStatus {
        self.status
    }

    /// Returns the tracking history, oldest first
    #[must_use]
    pub fn tracking(&self) -> &[TrackingEntry] {
        &self.tracking
    }

    /// Returns the expected delivery time, when set
    #[must_use]
    pub const fn expected_delivery(&self) -> Option<DateTime<Utc>> {
        self.expected_delivery
    }

    /// Returns the assigned rider, when assigned
    #[must_use]
    pub const fn rider(&self) -> Option<&RiderId> {
        self.rider.as_ref()
    }
}

/// Fetches the tracking projection of an order
///
/// Owner-only: unlike [`get_order`], administrators are not exempted
/// here, matching the endpoint this preserves.
///
/// # Arguments
///
/// * `orders` - Order storage
/// * `order_id` - The order to track
/// * `actor` - The authenticated acting user (must own the order)
///
/// # Errors
///
/// * [`OrderError::OrderNotFound`] - unknown order
/// * [`OrderError::AccessDenied`] - actor does not own the order
/// * [`OrderError::Unavailable`] - storage failure
pub fn track_order<S>(
    orders: &S,
    order_id: &OrderId,
    actor: &Actor,
) -> Result<TrackOrderView, OrderError>
where
    S: OrderStore + ?Sized,
{
    let order = orders.find(order_id)?.ok_or(OrderError::OrderNotFound)?;

    if order.user() != actor.user_id() {
        return Err(OrderError::AccessDenied);
    }

    Ok(TrackOrderView {
        order_number: order.order_number().clone(),
        status: order.status(),
        tracking: order.tracking().to_vec(),
        expected_delivery: order.expected_delivery(),
        rider: order.rider().cloned(),
    })
}

// =============================================================================
// list_orders
// =============================================================================

/// Lists the acting user's own orders, newest first
///
/// # Arguments
///
/// * `orders` - Order storage
/// * `actor` - The authenticated acting user
/// * `filter` - Optional status / order-type filters
/// * `page` - Pagination request
///
/// # Errors
///
/// Returns [`OrderError::Unavailable`] on storage failure.
pub fn list_orders<S>(
    orders: &S,
    actor: &Actor,
    filter: &OrderFilter,
    page: Page,
) -> Result<OrderPage, OrderError>
where
    S: OrderStore + ?Sized,
{
    Ok(orders.find_by_user(actor.user_id(), filter, page)?)
}
