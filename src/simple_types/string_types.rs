//! Constrained string type definitions
//!
//! Defines `String50` (short labels such as item names) and `String200`
//! (free-text instructions).

use super::constrained_type;
use super::error::ValidationError;

// =============================================================================
// String50
// =============================================================================

/// Maximum character count for `String50`
const STRING_50_MAX_LENGTH: usize = 50;

/// A non-empty string of 50 characters or fewer
///
/// Used for item names and other short labels.
///
/// # Examples
///
/// ```
/// use food_order_service::simple_types::String50;
///
/// let name = String50::create("ItemName", "Paneer Butter Masala").unwrap();
/// assert_eq!(name.value(), "Paneer Butter Masala");
///
/// assert!(String50::create("ItemName", "").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct String50(String);

impl String50 {
    /// Creates a `String50` from a string
    ///
    /// # Arguments
    ///
    /// * `field_name` - Field name used in error messages
    /// * `value` - Input string
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` when the string is empty or exceeds
    /// 50 characters.
    pub fn create(field_name: &str, value: &str) -> Result<Self, ValidationError> {
        constrained_type::create_string(field_name, String50, STRING_50_MAX_LENGTH, value)
    }

    /// Returns a reference to the inner string
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

// =============================================================================
// String200
// =============================================================================

/// Maximum character count for `String200`
const STRING_200_MAX_LENGTH: usize = 200;

/// A string of 200 characters or fewer
///
/// Used for delivery and per-item instructions. The optional constructor
/// maps an empty input to `None`.
///
/// # Examples
///
/// ```
/// use food_order_service::simple_types::String200;
///
/// let note = String200::create_option("Instructions", "Ring the bell twice").unwrap();
/// assert!(note.is_some());
///
/// let empty = String200::create_option("Instructions", "").unwrap();
/// assert!(empty.is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct String200(String);

impl String200 {
    /// Creates a `String200` from a string
    ///
    /// # Arguments
    ///
    /// * `field_name` - Field name used in error messages
    /// * `value` - Input string
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` when the string is empty or exceeds
    /// 200 characters.
    pub fn create(field_name: &str, value: &str) -> Result<Self, ValidationError> {
        constrained_type::create_string(field_name, String200, STRING_200_MAX_LENGTH, value)
    }

    /// Creates an optional `String200`, mapping an empty string to `None`
    ///
    /// # Arguments
    ///
    /// * `field_name` - Field name used in error messages
    /// * `value` - Input string
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` when the string exceeds 200 characters.
    pub fn create_option(field_name: &str, value: &str) -> Result<Option<Self>, ValidationError> {
        constrained_type::create_string_option(field_name, String200, STRING_200_MAX_LENGTH, value)
    }

    /// Returns a reference to the inner string
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}
