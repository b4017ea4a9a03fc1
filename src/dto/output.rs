//! Output DTOs
//!
//! Types serialized into API responses. Each carries a pure
//! `from_domain` conversion; monetary amounts serialize as strings.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::compound_types::LineItem;
use crate::store::OrderPage;
use crate::workflow::{Order, PriceBreakdown, TrackOrderView, TrackingEntry};

// =============================================================================
// LineItemViewDto
// =============================================================================

/// One order line in a response, with its computed line total
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItemViewDto {
    /// Item name
    pub name: String,
    /// Unit price
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    /// Quantity
    pub quantity: u32,
    /// Per-item instructions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    /// Line total (unit price times quantity)
    #[serde(with = "rust_decimal::serde::str")]
    pub item_total: Decimal,
}

impl LineItemViewDto {
    /// Creates a `LineItemViewDto` from a domain line item
    #[must_use]
    pub fn from_domain(item: &LineItem) -> Self {
        Self {
            name: item.name().value().to_string(),
            price: item.unit_price().value(),
            quantity: item.quantity().value(),
            instructions: item
                .instructions()
                .map(|instructions| instructions.value().to_string()),
            item_total: item.line_total(),
        }
    }
}

// =============================================================================
// PriceBreakdownDto
// =============================================================================

/// The monetary breakdown of an order in a response
///
/// # Examples
///
/// ```
/// use food_order_service::compound_types::{DeliveryPolicy, LineItem};
/// use food_order_service::dto::PriceBreakdownDto;
/// use food_order_service::workflow::price_cart;
/// use rust_decimal::Decimal;
///
/// let items = vec![LineItem::create("Thali", Decimal::from(100), 2, "").unwrap()];
/// let policy = DeliveryPolicy::create(Decimal::from(150), Decimal::from(20)).unwrap();
/// let breakdown = price_cart(&items, &policy).unwrap();
///
/// let dto = PriceBreakdownDto::from_domain(&breakdown);
/// let json = serde_json::to_string(&dto).unwrap();
/// assert!(json.contains("\"total\":\"230.00\""));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBreakdownDto {
    /// Sum of line totals
    #[serde(with = "rust_decimal::serde::str")]
    pub subtotal: Decimal,
    /// Flat delivery fee charged
    #[serde(with = "rust_decimal::serde::str")]
    pub delivery_fee: Decimal,
    /// Tax on the subtotal
    #[serde(with = "rust_decimal::serde::str")]
    pub tax: Decimal,
    /// Grand total
    #[serde(with = "rust_decimal::serde::str")]
    pub total: Decimal,
}

impl PriceBreakdownDto {
    /// Creates a `PriceBreakdownDto` from a domain breakdown
    #[must_use]
    pub fn from_domain(breakdown: &PriceBreakdown) -> Self {
        Self {
            subtotal: breakdown.subtotal().value(),
            delivery_fee: breakdown.delivery_fee().value(),
            tax: breakdown.tax().value(),
            total: breakdown.total().value(),
        }
    }
}

// =============================================================================
// TrackingEntryDto
// =============================================================================

/// One tracking history entry in a response
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingEntryDto {
    /// Status reached, by wire name
    pub status: String,
    /// Human-readable description
    pub description: String,
    /// When the change happened
    pub timestamp: DateTime<Utc>,
}

impl TrackingEntryDto {
    /// Creates a `TrackingEntryDto` from a domain tracking entry
    #[must_use]
    pub fn from_domain(entry: &TrackingEntry) -> Self {
        Self {
            status: entry.status().value().to_string(),
            description: entry.description().to_string(),
            timestamp: entry.timestamp(),
        }
    }
}

// =============================================================================
// OrderDto
// =============================================================================

/// A full order in a response
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDto {
    /// Order record ID
    pub id: String,
    /// Customer-facing order number
    pub order_number: String,
    /// Owning user's ID
    pub user: String,
    /// "restaurant" or "tiffin"
    pub order_type: String,
    /// Restaurant reference (restaurant orders)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restaurant_id: Option<String>,
    /// Tiffin plan reference (tiffin orders)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tiffin_plan_id: Option<String>,
    /// Line items in display order
    pub items: Vec<LineItemViewDto>,
    /// Price breakdown stamped at creation
    pub pricing: PriceBreakdownDto,
    /// Current status, by wire name
    pub status: String,
    /// Payment method
    pub payment_method: String,
    /// Payment status
    pub payment_status: String,
    /// Delivery address reference
    pub delivery_address: String,
    /// Delivery note
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_instructions: Option<String>,
    /// Expected delivery time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_delivery: Option<DateTime<Utc>>,
    /// When the order was delivered
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivered_at: Option<DateTime<Utc>>,
    /// Assigned rider
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rider: Option<String>,
    /// Tracking history, oldest first
    pub tracking: Vec<TrackingEntryDto>,
    /// When the order was placed
    pub created_at: DateTime<Utc>,
    /// When the order was last mutated
    pub updated_at: DateTime<Utc>,
}

impl OrderDto {
    /// Creates an `OrderDto` from a domain order
    #[must_use]
    pub fn from_domain(order: &Order) -> Self {
        Self {
            id: order.order_id().value().to_string(),
            order_number: order.order_number().value().to_string(),
            user: order.user().value().to_string(),
            order_type: order.order_type().value().to_string(),
            restaurant_id: order
                .provider()
                .restaurant_id()
                .map(|id| id.value().to_string()),
            tiffin_plan_id: order
                .provider()
                .tiffin_plan_id()
                .map(|id| id.value().to_string()),
            items: order.items().iter().map(LineItemViewDto::from_domain).collect(),
            pricing: PriceBreakdownDto::from_domain(order.breakdown()),
            status: order.status().value().to_string(),
            payment_method: order.payment_method().value().to_string(),
            payment_status: order.payment_status().value().to_string(),
            delivery_address: order.delivery_address().value().to_string(),
            delivery_instructions: order
                .delivery_instructions()
                .map(|instructions| instructions.value().to_string()),
            expected_delivery: order.expected_delivery(),
            delivered_at: order.delivered_at(),
            rider: order.rider().map(|rider| rider.value().to_string()),
            tracking: order
                .tracking()
                .iter()
                .map(TrackingEntryDto::from_domain)
                .collect(),
            created_at: order.created_at(),
            updated_at: order.updated_at(),
        }
    }
}

// =============================================================================
// TrackOrderDto
// =============================================================================

/// The delivery-tracking projection in a response
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackOrderDto {
    /// Customer-facing order number
    pub order_number: String,
    /// Current status, by wire name
    pub status: String,
    /// Tracking history, oldest first
    pub tracking: Vec<TrackingEntryDto>,
    /// Expected delivery time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_delivery: Option<DateTime<Utc>>,
    /// Assigned rider
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rider: Option<String>,
}

impl TrackOrderDto {
    /// Creates a `TrackOrderDto` from the domain projection
    #[must_use]
    pub fn from_domain(view: &TrackOrderView) -> Self {
        Self {
            order_number: view.order_number().value().to_string(),
            status: view.status().value().to_string(),
            tracking: view
                .tracking()
                .iter()
                .map(TrackingEntryDto::from_domain)
                .collect(),
            expected_delivery: view.expected_delivery(),
            rider: view.rider().map(|rider| rider.value().to_string()),
        }
    }
}

// =============================================================================
// OrderListDto
// =============================================================================

/// Pagination metadata echoed with a listing
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationDto {
    /// 1-based page number
    pub page: u32,
    /// Page size
    pub limit: u32,
    /// Total orders matching the filter
    pub total: u64,
    /// Total number of pages
    pub pages: u64,
}

/// One page of a user's order history in a response
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderListDto {
    /// The orders on this page, newest first
    pub orders: Vec<OrderDto>,
    /// Pagination metadata
    pub pagination: PaginationDto,
}

impl OrderListDto {
    /// Creates an `OrderListDto` from a domain order page
    #[must_use]
    pub fn from_domain(page: &OrderPage) -> Self {
        Self {
            orders: page.orders.iter().map(OrderDto::from_domain).collect(),
            pagination: PaginationDto {
                page: page.page.page,
                limit: page.page.limit,
                total: page.total,
                pages: page.pages(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compound_types::DeliveryPolicy;
    use crate::simple_types::{AddressId, PaymentMethod, RestaurantId, UserId};
    use crate::workflow::{ProviderRef, price_cart};
    use rstest::rstest;

    fn order() -> Order {
        let items = vec![LineItem::create("Thali", Decimal::from(100), 2, "no onion").unwrap()];
        let breakdown = price_cart(
            &items,
            &DeliveryPolicy::create(Decimal::from(150), Decimal::from(20)).unwrap(),
        )
        .unwrap();
        Order::place(
            UserId::create("UserId", "user-1").unwrap(),
            ProviderRef::Restaurant(RestaurantId::create("RestaurantId", "rest-001").unwrap()),
            items,
            breakdown,
            PaymentMethod::Upi,
            AddressId::create("AddressId", "addr-1").unwrap(),
            None,
            Utc::now(),
        )
    }

    #[rstest]
    fn test_order_dto_from_domain() {
        let order = order();
        let dto = OrderDto::from_domain(&order);

        assert_eq!(dto.id, order.order_id().value());
        assert_eq!(dto.order_type, "restaurant");
        assert_eq!(dto.restaurant_id.as_deref(), Some("rest-001"));
        assert_eq!(dto.tiffin_plan_id, None);
        assert_eq!(dto.status, "pending");
        assert_eq!(dto.items.len(), 1);
        assert_eq!(dto.tracking.len(), 1);
        assert_eq!(dto.pricing.total, Decimal::from(230));
    }

    #[rstest]
    fn test_order_dto_serializes_amounts_as_strings() {
        let dto = OrderDto::from_domain(&order());
        let json = serde_json::to_string(&dto).unwrap();

        assert!(json.contains("\"subtotal\":\"200\""));
        assert!(json.contains("\"total\":\"230.00\""));
    }

    #[rstest]
    fn test_line_item_view_carries_item_total() {
        let dto = OrderDto::from_domain(&order());

        assert_eq!(dto.items[0].item_total, Decimal::from(200));
        assert_eq!(dto.items[0].instructions.as_deref(), Some("no onion"));
    }

    #[rstest]
    fn test_order_list_dto_pagination() {
        use crate::store::{OrderPage, Page};

        let page = OrderPage {
            orders: vec![order(), order()],
            total: 12,
            page: Page::new(1, 10),
        };
        let dto = OrderListDto::from_domain(&page);

        assert_eq!(dto.orders.len(), 2);
        assert_eq!(dto.pagination.total, 12);
        assert_eq!(dto.pagination.pages, 2);
    }
}
