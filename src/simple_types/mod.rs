//! Basic constrained types of the ordering domain
//!
//! Each type uses the smart-constructor pattern so that only validated
//! values exist at runtime, keeping illegal states unrepresentable.
//!
//! # Type categories
//!
//! - **String types**: `String50`, `String200`
//! - **ID types**: `OrderId`, `OrderNumber`, `UserId`, `RestaurantId`,
//!   `TiffinPlanId`, `AddressId`, `RiderId`
//! - **Quantity types**: `Quantity`
//! - **Money types**: `Price`, `OrderAmount`
//! - **Payment/order kinds**: `PaymentMethod`, `PaymentStatus`, `OrderType`
//!
//! # Usage
//!
//! ```
//! use food_order_service::simple_types::{OrderAmount, Price, Quantity};
//! use rust_decimal::Decimal;
//! use std::str::FromStr;
//!
//! let price = Price::create(Decimal::from_str("100.00").unwrap()).unwrap();
//! let quantity = Quantity::create("Quantity", 2).unwrap();
//! let subtotal =
//!     OrderAmount::create_rounded(price.value() * Decimal::from(quantity.value())).unwrap();
//! assert_eq!(subtotal.value(), Decimal::from_str("200.00").unwrap());
//! ```

pub mod constrained_type;
mod error;
mod identifier_types;
mod misc_types;
mod money_types;
mod quantity_types;
mod string_types;

// Error type
pub use error::ValidationError;

// String types
pub use string_types::{String50, String200};

// ID types
pub use identifier_types::{
    AddressId, OrderId, OrderNumber, RestaurantId, RiderId, TiffinPlanId, UserId,
};

// Quantity types
pub use quantity_types::Quantity;

// Money types
pub use money_types::{OrderAmount, Price};

// Payment and order kinds
pub use misc_types::{OrderType, PaymentMethod, PaymentStatus};
