//! Order workflow module
//!
//! The order lifecycle core: pricing a cart, placing an order, and
//! driving the status state machine with permission-gated transitions
//! and append-only tracking history.
//!
//! # State machine
//!
//! ```text
//! pending -> confirmed -> preparing -> ready_for_delivery
//!         -> out_for_delivery -> delivered (terminal)
//!
//! cancelled / refunded: terminal side-exits
//! ```
//!
//! Privileged roles may skip forward states; the owning customer may
//! only cancel, and only early (see [`permissions`]).
//!
//! # Module structure
//!
//! - [`error_types`] - The `OrderError` taxonomy
//! - [`status`] - `OrderStatus` and the fixed description table
//! - [`tracking`] - The append-only `TrackingEntry`
//! - [`permissions`] - The (role, transition) permission table
//! - [`pricing`] - `PriceBreakdown` and the cart pricing function
//! - [`order_types`] - The `Order` aggregate and `ProviderRef`
//! - [`place_order`] - Checkout validation and the place-order workflow
//! - [`lifecycle`] - Status updates, cancellation, projections, listing

pub mod error_types;
pub mod lifecycle;
pub mod order_types;
pub mod permissions;
pub mod place_order;
pub mod pricing;
pub mod status;
pub mod tracking;

pub use error_types::OrderError;
pub use lifecycle::{TrackOrderView, cancel_order, get_order, list_orders, track_order, update_status};
pub use order_types::{Order, ProviderRef};
pub use place_order::{UnvalidatedLineItem, UnvalidatedOrder, ValidatedCart, place_order, validate_order};
pub use pricing::{PriceBreakdown, price_cart};
pub use status::OrderStatus;
pub use tracking::TrackingEntry;
