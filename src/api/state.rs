//! Shared application state

use std::sync::Arc;

use crate::store::{InMemoryStore, OrderStore, ProviderCatalog};

/// State shared by every handler
///
/// Holds the storage contracts behind trait objects so the handlers stay
/// independent of the concrete store.
#[derive(Clone)]
pub struct AppState {
    orders: Arc<dyn OrderStore + Send + Sync>,
    providers: Arc<dyn ProviderCatalog + Send + Sync>,
}

impl AppState {
    /// Creates an `AppState` from explicit storage implementations
    #[must_use]
    pub fn new(
        orders: Arc<dyn OrderStore + Send + Sync>,
        providers: Arc<dyn ProviderCatalog + Send + Sync>,
    ) -> Self {
        Self { orders, providers }
    }

    /// Creates an `AppState` backed entirely by one in-memory store
    #[must_use]
    pub fn in_memory(store: Arc<InMemoryStore>) -> Self {
        Self {
            orders: store.clone(),
            providers: store,
        }
    }

    /// Returns the order store
    #[must_use]
    pub fn orders(&self) -> &(dyn OrderStore + Send + Sync) {
        self.orders.as_ref()
    }

    /// Returns the provider catalog
    #[must_use]
    pub fn providers(&self) -> &(dyn ProviderCatalog + Send + Sync) {
        self.providers.as_ref()
    }
}
