//! # Food Order Service
//!
//! A food-ordering and tiffin-subscription order service: a typed
//! domain core (cart pricing + order lifecycle state machine) exposed
//! over a thin HTTP boundary.
//!
//! ## Module Structure
//!
//! - `simple_types`: Constrained primitive types (`OrderNumber`, `Price`,
//!   `Quantity`, etc.)
//! - `compound_types`: Compound types (`LineItem`, `DeliveryPolicy`,
//!   `Actor`)
//! - `workflow`: Pricing, order placement, and the lifecycle state
//!   machine
//! - `store`: Storage contracts and the in-memory implementation
//! - `dto`: Serialization types at the API boundary
//! - `api`: axum handlers and error-to-status mapping

#![forbid(unsafe_code)]

pub mod api;
pub mod compound_types;
pub mod dto;
pub mod simple_types;
pub mod store;
pub mod workflow;
