//! Acting user identity and role

use crate::simple_types::{UserId, ValidationError};

// =============================================================================
// ActorRole
// =============================================================================

/// The role an authenticated user acts under
///
/// Replaces ad hoc role-string comparisons with an enumerated type that
/// the permission table can match on.
///
/// # Examples
///
/// ```
/// use food_order_service::compound_types::ActorRole;
///
/// let customer = ActorRole::create("Role", "customer").unwrap();
/// assert!(!customer.is_privileged());
///
/// let admin = ActorRole::create("Role", "admin").unwrap();
/// assert!(admin.is_privileged());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActorRole {
    /// The ordering customer
    Customer,
    /// A provider-side operator (restaurant or tiffin kitchen staff)
    Provider,
    /// A platform administrator
    Admin,
}

impl ActorRole {
    /// Creates an `ActorRole` from a string
    ///
    /// Accepts "restaurant" as an alias for the provider role.
    ///
    /// # Arguments
    ///
    /// * `field_name` - Field name used in error messages
    /// * `value` - Input string
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for values other than "customer",
    /// "provider", "restaurant", "admin".
    pub fn create(field_name: &str, value: &str) -> Result<Self, ValidationError> {
        match value {
            "customer" => Ok(Self::Customer),
            "provider" | "restaurant" => Ok(Self::Provider),
            "admin" => Ok(Self::Admin),
            _ => Err(ValidationError::new(
                field_name,
                "Must be one of 'customer', 'provider', 'admin'",
            )),
        }
    }

    /// Returns the `ActorRole` as its wire string
    #[must_use]
    pub const fn value(&self) -> &'static str {
        match self {
            Self::Customer => "customer",
            Self::Provider => "provider",
            Self::Admin => "admin",
        }
    }

    /// Returns whether the role may drive any status transition
    #[must_use]
    pub const fn is_privileged(&self) -> bool {
        matches!(self, Self::Provider | Self::Admin)
    }
}

// =============================================================================
// Actor
// =============================================================================

/// The authenticated user behind a request
///
/// Pairs the user's ID with the role the auth layer verified. Token
/// verification itself happens outside this crate; an `Actor` is the
/// already-trusted result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Actor {
    user_id: UserId,
    role: ActorRole,
}

impl Actor {
    /// Creates a new `Actor`
    #[must_use]
    pub const fn new(user_id: UserId, role: ActorRole) -> Self {
        Self { user_id, role }
    }

    /// Returns the acting user's ID
    #[must_use]
    pub const fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Returns the acting user's role
    #[must_use]
    pub const fn role(&self) -> ActorRole {
        self.role
    }
}
