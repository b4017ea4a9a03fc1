//! Order line item

use rust_decimal::Decimal;

use crate::simple_types::{Price, Quantity, String50, String200, ValidationError};

/// One line of a cart or order
///
/// Holds the item name, unit price, quantity, and optional per-item
/// instructions. The line total is always derived from unit price and
/// quantity; it is never stored, so it cannot drift out of sync.
///
/// # Examples
///
/// ```
/// use food_order_service::compound_types::LineItem;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let item = LineItem::create("Paneer Tikka", Decimal::from(100), 2, "").unwrap();
/// assert_eq!(item.line_total(), Decimal::from(200));
/// assert!(item.instructions().is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineItem {
    name: String50,
    unit_price: Price,
    quantity: Quantity,
    instructions: Option<String200>,
}

impl LineItem {
    /// Creates a `LineItem` from raw input values
    ///
    /// # Arguments
    ///
    /// * `name` - Item name
    /// * `unit_price` - Unit price
    /// * `quantity` - Quantity (positive)
    /// * `instructions` - Per-item instructions, empty for none
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` when any field fails its constraint.
    pub fn create(
        name: &str,
        unit_price: Decimal,
        quantity: u32,
        instructions: &str,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            name: String50::create("ItemName", name)?,
            unit_price: Price::create(unit_price)?,
            quantity: Quantity::create("Quantity", quantity)?,
            instructions: String200::create_option("ItemInstructions", instructions)?,
        })
    }

    /// Creates a `LineItem` from already-validated parts
    #[must_use]
    pub const fn new(
        name: String50,
        unit_price: Price,
        quantity: Quantity,
        instructions: Option<String200>,
    ) -> Self {
        Self {
            name,
            unit_price,
            quantity,
            instructions,
        }
    }

    /// Returns the item name
    #[must_use]
    pub const fn name(&self) -> &String50 {
        &self.name
    }

    /// Returns the unit price
    #[must_use]
    pub const fn unit_price(&self) -> &Price {
        &self.unit_price
    }

    /// Returns the quantity
    #[must_use]
    pub const fn quantity(&self) -> &Quantity {
        &self.quantity
    }

    /// Returns the per-item instructions
    #[must_use]
    pub const fn instructions(&self) -> Option<&String200> {
        self.instructions.as_ref()
    }

    /// Returns the line total, recomputed as unit price times quantity
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.unit_price.value() * Decimal::from(self.quantity.value())
    }
}
