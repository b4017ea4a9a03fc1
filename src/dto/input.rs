//! Input DTOs
//!
//! Types deserialized from API requests. Fields stay raw here;
//! validation happens when they are converted into the workflow's
//! unvalidated types and then validated.

use serde::{Deserialize, Serialize};

use crate::workflow::{UnvalidatedLineItem, UnvalidatedOrder};

// =============================================================================
// LineItemDto
// =============================================================================

/// One cart line as received from the client
///
/// # Examples
///
/// ```
/// use food_order_service::dto::LineItemDto;
///
/// let json = r#"{
///     "name": "Paneer Tikka",
///     "price": "120.50",
///     "quantity": 2,
///     "instructions": "less spicy"
/// }"#;
///
/// let dto: LineItemDto = serde_json::from_str(json).unwrap();
/// assert_eq!(dto.name, "Paneer Tikka");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItemDto {
    /// Item name
    pub name: String,
    /// Unit price as a decimal string
    pub price: String,
    /// Quantity
    pub quantity: u32,
    /// Per-item instructions (empty for none)
    #[serde(default)]
    pub instructions: String,
}

impl LineItemDto {
    /// Converts to the workflow's unvalidated line item
    #[must_use]
    pub fn to_unvalidated(&self) -> UnvalidatedLineItem {
        UnvalidatedLineItem {
            name: self.name.clone(),
            price: self.price.clone(),
            quantity: self.quantity,
            instructions: self.instructions.clone(),
        }
    }
}

// =============================================================================
// CreateOrderDto
// =============================================================================

/// A checkout request as received from the client
///
/// Exactly one of `restaurant_id` / `tiffin_plan_id` is expected,
/// matching `order_type`; the unused field may be omitted.
///
/// # Examples
///
/// ```
/// use food_order_service::dto::CreateOrderDto;
///
/// let json = r#"{
///     "order_type": "restaurant",
///     "items": [{"name": "Thali", "price": "100", "quantity": 2}],
///     "restaurant_id": "rest-001",
///     "delivery_address": "addr-1",
///     "payment_method": "upi"
/// }"#;
///
/// let dto: CreateOrderDto = serde_json::from_str(json).unwrap();
/// assert_eq!(dto.order_type, "restaurant");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateOrderDto {
    /// "restaurant" or "tiffin"
    pub order_type: String,
    /// Cart lines in display order
    pub items: Vec<LineItemDto>,
    /// Restaurant ID (restaurant orders)
    #[serde(default)]
    pub restaurant_id: String,
    /// Tiffin plan ID (tiffin orders)
    #[serde(default)]
    pub tiffin_plan_id: String,
    /// Stored delivery address reference
    pub delivery_address: String,
    /// "card", "cash", "upi", or "netbanking"
    pub payment_method: String,
    /// Delivery note (empty for none)
    #[serde(default)]
    pub delivery_instructions: String,
}

impl CreateOrderDto {
    /// Converts to the workflow's unvalidated order
    ///
    /// A pure conversion; no validation happens here.
    #[must_use]
    pub fn to_unvalidated_order(&self) -> UnvalidatedOrder {
        UnvalidatedOrder {
            order_type: self.order_type.clone(),
            items: self.items.iter().map(LineItemDto::to_unvalidated).collect(),
            restaurant_id: self.restaurant_id.clone(),
            tiffin_plan_id: self.tiffin_plan_id.clone(),
            delivery_address: self.delivery_address.clone(),
            payment_method: self.payment_method.clone(),
            delivery_instructions: self.delivery_instructions.clone(),
        }
    }
}

// =============================================================================
// UpdateStatusDto
// =============================================================================

/// A status update request
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateStatusDto {
    /// The requested status, by wire name
    pub status: String,
}
