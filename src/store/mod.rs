//! Storage contracts
//!
//! The document database itself is outside this crate; these traits are
//! the boundary the workflows talk to. The one correctness-critical
//! requirement is that a status transition's read-modify-write is atomic
//! with respect to the stored order, which [`OrderStore::update`] makes
//! explicit through an optimistic-concurrency (compare-and-swap on the
//! order version) contract: two racing transitions cannot both succeed
//! against the same prior version.

mod memory;

pub use memory::InMemoryStore;

use thiserror::Error;

use crate::compound_types::DeliveryPolicy;
use crate::simple_types::{OrderId, OrderType, UserId};
use crate::workflow::{Order, OrderStatus, ProviderRef};

// =============================================================================
// StoreError
// =============================================================================

/// Failures surfaced by the storage layer
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The stored order's version no longer matches the expected one
    #[error("Stored order version does not match the expected version")]
    VersionConflict,

    /// The store is temporarily unreachable; safe to retry
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

// =============================================================================
// Listing parameters
// =============================================================================

/// Optional filters applied when listing a user's orders
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OrderFilter {
    /// Keep only orders in this status
    pub status: Option<OrderStatus>,
    /// Keep only orders of this type
    pub order_type: Option<OrderType>,
}

impl OrderFilter {
    /// Returns whether an order passes the filter
    #[must_use]
    pub fn matches(&self, order: &Order) -> bool {
        self.status.is_none_or(|status| order.status() == status)
            && self
                .order_type
                .is_none_or(|order_type| order.order_type() == order_type)
    }
}

/// A pagination request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Page {
    /// 1-based page number
    pub page: u32,
    /// Page size
    pub limit: u32,
}

impl Page {
    /// Creates a `Page`, clamping the page to at least 1 and the limit
    /// into 1..=100
    #[must_use]
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page: page.max(1),
            limit: limit.clamp(1, 100),
        }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self { page: 1, limit: 10 }
    }
}

/// One page of a user's order history
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderPage {
    /// The orders on this page, newest first
    pub orders: Vec<Order>,
    /// Total orders matching the filter, across all pages
    pub total: u64,
    /// The pagination request this page answers
    pub page: Page,
}

impl OrderPage {
    /// Returns the total number of pages
    #[must_use]
    pub fn pages(&self) -> u64 {
        self.total.div_ceil(u64::from(self.page.limit))
    }
}

// =============================================================================
// OrderStore
// =============================================================================

/// Order persistence contract
///
/// Implementations must make `update` atomic: the version comparison and
/// the replacement happen as one operation against the stored record.
pub trait OrderStore {
    /// Inserts a newly placed order
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] on storage failure or when the
    /// order ID already exists.
    fn insert(&self, order: &Order) -> Result<(), StoreError>;

    /// Finds an order by ID
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] on storage failure.
    fn find(&self, order_id: &OrderId) -> Result<Option<Order>, StoreError>;

    /// Replaces a stored order if its version still matches
    ///
    /// The caller passes the version it read; the store replaces the
    /// record only when the stored version equals `expected_version`.
    ///
    /// # Errors
    ///
    /// * [`StoreError::VersionConflict`] - the stored version moved on
    /// * [`StoreError::Unavailable`] - storage failure or unknown order
    fn update(&self, order: &Order, expected_version: u64) -> Result<(), StoreError>;

    /// Lists a user's orders, newest first, filtered and paginated
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] on storage failure.
    fn find_by_user(
        &self,
        user: &UserId,
        filter: &OrderFilter,
        page: Page,
    ) -> Result<OrderPage, StoreError>;
}

// =============================================================================
// ProviderCatalog
// =============================================================================

/// Provider lookup contract
///
/// Resolves the delivery policy of the provider an order is being placed
/// against. Returns `None` for unknown providers.
pub trait ProviderCatalog {
    /// Looks up the delivery policy for a provider
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] on storage failure.
    fn delivery_policy(&self, provider: &ProviderRef)
    -> Result<Option<DeliveryPolicy>, StoreError>;
}
