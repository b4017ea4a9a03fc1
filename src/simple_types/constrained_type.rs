//! Helper functions for generating constrained types
//!
//! Each function is generic and can be used with any newtype.
//! Smart constructors across the crate delegate to these helpers so that
//! every constrained type reports failures through the same
//! [`ValidationError`] shape.

use regex::Regex;
use rust_decimal::Decimal;

use super::error::ValidationError;

/// Creates a string type with a maximum length constraint
///
/// # Arguments
///
/// * `field_name` - Field name used in error messages
/// * `constructor` - Constructor that takes a string and produces type T
/// * `max_length` - Maximum character count
/// * `value` - Input string
///
/// # Errors
///
/// Returns [`ValidationError`] in the following cases:
/// - When the input is an empty string
/// - When the input exceeds the maximum length
///
/// # Examples
///
/// ```
/// use food_order_service::simple_types::ValidationError;
///
/// #[derive(Debug, PartialEq)]
/// struct Name(String);
///
/// fn create_name(value: &str) -> Result<Name, ValidationError> {
///     food_order_service::simple_types::constrained_type::create_string(
///         "Name",
///         Name,
///         50,
///         value,
///     )
/// }
///
/// assert!(create_name("Paneer Tikka").is_ok());
/// assert!(create_name("").is_err());
/// ```
pub fn create_string<T, F>(
    field_name: &str,
    constructor: F,
    max_length: usize,
    value: &str,
) -> Result<T, ValidationError>
where
    F: FnOnce(String) -> T,
{
    if value.is_empty() {
        Err(ValidationError::new(field_name, "Must not be empty"))
    } else if value.len() > max_length {
        Err(ValidationError::new(
            field_name,
            &format!("Must not be more than {max_length} chars"),
        ))
    } else {
        Ok(constructor(value.to_string()))
    }
}

/// Creates a string type with maximum length constraint that returns None for empty strings
///
/// Used for optional fields.
///
/// # Arguments
///
/// * `field_name` - Field name used in error messages
/// * `constructor` - Constructor that takes a string and produces type T
/// * `max_length` - Maximum character count
/// * `value` - Input string
///
/// # Errors
///
/// Returns [`ValidationError`] when the input exceeds the maximum length.
pub fn create_string_option<T, F>(
    field_name: &str,
    constructor: F,
    max_length: usize,
    value: &str,
) -> Result<Option<T>, ValidationError>
where
    F: FnOnce(String) -> T,
{
    if value.is_empty() {
        Ok(None)
    } else if value.len() > max_length {
        Err(ValidationError::new(
            field_name,
            &format!("Must not be more than {max_length} chars"),
        ))
    } else {
        Ok(Some(constructor(value.to_string())))
    }
}

/// Creates an integer type with range constraints
///
/// # Arguments
///
/// * `field_name` - Field name used in error messages
/// * `constructor` - Constructor that takes an integer and produces type T
/// * `min_value` - Minimum value
/// * `max_value` - Maximum value
/// * `value` - Input integer
///
/// # Errors
///
/// Returns [`ValidationError`] in the following cases:
/// - When the input is less than the minimum value
/// - When the input exceeds the maximum value
pub fn create_integer<T, F>(
    field_name: &str,
    constructor: F,
    min_value: u32,
    max_value: u32,
    value: u32,
) -> Result<T, ValidationError>
where
    F: FnOnce(u32) -> T,
{
    if value < min_value {
        Err(ValidationError::new(
            field_name,
            &format!("Must not be less than {min_value}"),
        ))
    } else if value > max_value {
        Err(ValidationError::new(
            field_name,
            &format!("Must not be greater than {max_value}"),
        ))
    } else {
        Ok(constructor(value))
    }
}

/// Creates a decimal type with range constraints
///
/// # Arguments
///
/// * `field_name` - Field name used in error messages
/// * `constructor` - Constructor that takes a decimal and produces type T
/// * `min_value` - Minimum value
/// * `max_value` - Maximum value
/// * `value` - Input decimal
///
/// # Errors
///
/// Returns [`ValidationError`] in the following cases:
/// - When the input is less than the minimum value
/// - When the input exceeds the maximum value
pub fn create_decimal<T, F>(
    field_name: &str,
    constructor: F,
    min_value: Decimal,
    max_value: Decimal,
    value: Decimal,
) -> Result<T, ValidationError>
where
    F: FnOnce(Decimal) -> T,
{
    if value < min_value {
        Err(ValidationError::new(
            field_name,
            &format!("Must not be less than {min_value}"),
        ))
    } else if value > max_value {
        Err(ValidationError::new(
            field_name,
            &format!("Must not be greater than {max_value}"),
        ))
    } else {
        Ok(constructor(value))
    }
}

/// Creates a string type that matches a regular expression pattern
///
/// # Arguments
///
/// * `field_name` - Field name used in error messages
/// * `constructor` - Constructor that takes a string and produces type T
/// * `pattern` - Compiled regular expression pattern
/// * `value` - Input string
///
/// # Errors
///
/// Returns [`ValidationError`] in the following cases:
/// - When the input is an empty string
/// - When the input does not match the pattern
///
/// # Note
///
/// Without anchors (^$), the regex pattern performs partial matching.
/// If exact matching is needed, the caller should include anchors.
pub fn create_like<T, F>(
    field_name: &str,
    constructor: F,
    pattern: &Regex,
    value: &str,
) -> Result<T, ValidationError>
where
    F: FnOnce(String) -> T,
{
    if value.is_empty() {
        Err(ValidationError::new(field_name, "Must not be empty"))
    } else if pattern.is_match(value) {
        Ok(constructor(value.to_string()))
    } else {
        let pattern_str = pattern.as_str();
        Err(ValidationError::new(
            field_name,
            &format!("'{value}' must match the pattern '{pattern_str}'"),
        ))
    }
}
