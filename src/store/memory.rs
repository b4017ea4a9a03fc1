//! In-memory store
//!
//! A `RwLock`-protected table standing in for the document database.
//! Backs the demo server and the integration tests; the compare-and-swap
//! in `update` gives the same serialization guarantee the real store's
//! per-document atomic update would.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::compound_types::DeliveryPolicy;
use crate::simple_types::{OrderId, UserId};
use crate::workflow::{Order, ProviderRef};

use super::{OrderFilter, OrderPage, OrderStore, Page, ProviderCatalog, StoreError};

/// Lock-poisoning message shared by all accessors
const LOCK_POISONED: &str = "store lock poisoned";

/// Maps a poisoned lock to the generic retryable store failure
fn poisoned(_: impl std::fmt::Debug) -> StoreError {
    StoreError::Unavailable(LOCK_POISONED.to_string())
}

#[derive(Default)]
struct Tables {
    orders: HashMap<String, Order>,
    restaurants: HashMap<String, DeliveryPolicy>,
    tiffin_plans: HashMap<String, DeliveryPolicy>,
}

/// In-memory order store and provider catalog
///
/// # Examples
///
/// ```
/// use food_order_service::compound_types::DeliveryPolicy;
/// use food_order_service::store::InMemoryStore;
/// use rust_decimal::Decimal;
///
/// let store = InMemoryStore::new();
/// store.register_restaurant(
///     "rest-001",
///     DeliveryPolicy::create(Decimal::from(150), Decimal::from(20)).unwrap(),
/// );
/// ```
#[derive(Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    /// Creates an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a restaurant and its delivery policy
    pub fn register_restaurant(&self, restaurant_id: &str, policy: DeliveryPolicy) {
        let mut tables = self.tables.write().expect(LOCK_POISONED);
        tables
            .restaurants
            .insert(restaurant_id.to_string(), policy);
    }

    /// Registers a tiffin plan; tiffin orders carry the zero policy
    pub fn register_tiffin_plan(&self, tiffin_plan_id: &str) {
        let mut tables = self.tables.write().expect(LOCK_POISONED);
        tables
            .tiffin_plans
            .insert(tiffin_plan_id.to_string(), DeliveryPolicy::zero());
    }
}

impl OrderStore for InMemoryStore {
    fn insert(&self, order: &Order) -> Result<(), StoreError> {
        let mut tables = self.tables.write().map_err(poisoned)?;
        let key = order.order_id().value().to_string();
        if tables.orders.contains_key(&key) {
            return Err(StoreError::Unavailable(
                "order id already exists".to_string(),
            ));
        }
        tables.orders.insert(key, order.clone());
        Ok(())
    }

    fn find(&self, order_id: &OrderId) -> Result<Option<Order>, StoreError> {
        let tables = self.tables.read().map_err(poisoned)?;
        Ok(tables.orders.get(order_id.value()).cloned())
    }

    fn update(&self, order: &Order, expected_version: u64) -> Result<(), StoreError> {
        // Version check and replacement under one write lock: racing
        // transitions against the same prior version cannot both land.
        let mut tables = self.tables.write().map_err(poisoned)?;
        let stored = tables
            .orders
            .get_mut(order.order_id().value())
            .ok_or_else(|| StoreError::Unavailable("order disappeared".to_string()))?;
        if stored.version() != expected_version {
            return Err(StoreError::VersionConflict);
        }
        *stored = order.clone();
        Ok(())
    }

    fn find_by_user(
        &self,
        user: &UserId,
        filter: &OrderFilter,
        page: Page,
    ) -> Result<OrderPage, StoreError> {
        let tables = self.tables.read().map_err(poisoned)?;

        let mut matching: Vec<&Order> = tables
            .orders
            .values()
            .filter(|order| order.user() == user && filter.matches(order))
            .collect();
        matching.sort_by(|left, right| right.created_at().cmp(&left.created_at()));

        let total = matching.len() as u64;
        let skip = page.page.saturating_sub(1) as usize * page.limit as usize;
        let orders = matching
            .into_iter()
            .skip(skip)
            .take(page.limit as usize)
            .cloned()
            .collect();

        Ok(OrderPage {
            orders,
            total,
            page,
        })
    }
}

impl ProviderCatalog for InMemoryStore {
    fn delivery_policy(
        &self,
        provider: &ProviderRef,
    ) -> Result<Option<DeliveryPolicy>, StoreError> {
        let tables = self.tables.read().map_err(poisoned)?;
        let policy = match provider {
            ProviderRef::Restaurant(id) => tables.restaurants.get(id.value()).copied(),
            ProviderRef::Tiffin(id) => tables.tiffin_plans.get(id.value()).copied(),
        };
        Ok(policy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compound_types::LineItem;
    use crate::simple_types::{
        AddressId, PaymentMethod, RestaurantId, TiffinPlanId, UserId,
    };
    use crate::workflow::pricing::price_cart;
    use chrono::{Duration, Utc};
    use rstest::rstest;
    use rust_decimal::Decimal;

    fn order_for(user: &str, minutes_ago: i64) -> Order {
        let items = vec![LineItem::create("Thali", Decimal::from(100), 2, "").unwrap()];
        let breakdown = price_cart(&items, &DeliveryPolicy::zero()).unwrap();
        Order::place(
            UserId::create("UserId", user).unwrap(),
            ProviderRef::Restaurant(RestaurantId::create("RestaurantId", "rest-001").unwrap()),
            items,
            breakdown,
            PaymentMethod::Cash,
            AddressId::create("AddressId", "addr-1").unwrap(),
            None,
            Utc::now() - Duration::minutes(minutes_ago),
        )
    }

    #[rstest]
    fn test_insert_and_find() {
        let store = InMemoryStore::new();
        let order = order_for("user-1", 0);

        store.insert(&order).unwrap();
        let found = store.find(order.order_id()).unwrap();

        assert_eq!(found, Some(order));
    }

    #[rstest]
    fn test_insert_duplicate_rejected() {
        let store = InMemoryStore::new();
        let order = order_for("user-1", 0);

        store.insert(&order).unwrap();
        assert!(store.insert(&order).is_err());
    }

    #[rstest]
    fn test_find_missing_returns_none() {
        let store = InMemoryStore::new();
        let order_id = OrderId::create("OrderId", "missing").unwrap();

        assert_eq!(store.find(&order_id).unwrap(), None);
    }

    #[rstest]
    fn test_update_with_matching_version() {
        let store = InMemoryStore::new();
        let order = order_for("user-1", 0);
        store.insert(&order).unwrap();

        let mut updated = order.clone();
        updated.apply_transition(
            crate::workflow::OrderStatus::Confirmed,
            "Order confirmed by restaurant".to_string(),
            Utc::now(),
        );

        store.update(&updated, order.version()).unwrap();
        let stored = store.find(order.order_id()).unwrap().unwrap();
        assert_eq!(stored.status(), crate::workflow::OrderStatus::Confirmed);
    }

    #[rstest]
    fn test_update_with_stale_version_conflicts() {
        let store = InMemoryStore::new();
        let order = order_for("user-1", 0);
        store.insert(&order).unwrap();

        let mut first = order.clone();
        first.apply_transition(
            crate::workflow::OrderStatus::Confirmed,
            "Order confirmed by restaurant".to_string(),
            Utc::now(),
        );
        store.update(&first, order.version()).unwrap();

        // A second writer still holding the original version loses
        let mut second = order.clone();
        second.apply_transition(
            crate::workflow::OrderStatus::Cancelled,
            "Order cancelled by customer".to_string(),
            Utc::now(),
        );
        let result = store.update(&second, order.version());

        assert_eq!(result, Err(StoreError::VersionConflict));

        // The stored order is unchanged by the losing write
        let stored = store.find(order.order_id()).unwrap().unwrap();
        assert_eq!(stored.status(), crate::workflow::OrderStatus::Confirmed);
    }

    #[rstest]
    fn test_find_by_user_filters_and_sorts_newest_first() {
        let store = InMemoryStore::new();
        let old = order_for("user-1", 30);
        let recent = order_for("user-1", 1);
        let other = order_for("user-2", 5);
        store.insert(&old).unwrap();
        store.insert(&recent).unwrap();
        store.insert(&other).unwrap();

        let page = store
            .find_by_user(
                &UserId::create("UserId", "user-1").unwrap(),
                &OrderFilter::default(),
                Page::default(),
            )
            .unwrap();

        assert_eq!(page.total, 2);
        assert_eq!(page.orders.len(), 2);
        assert_eq!(page.orders[0].order_id(), recent.order_id());
        assert_eq!(page.orders[1].order_id(), old.order_id());
    }

    #[rstest]
    fn test_find_by_user_pagination() {
        let store = InMemoryStore::new();
        for minutes in 0..5 {
            store.insert(&order_for("user-1", minutes)).unwrap();
        }

        let user = UserId::create("UserId", "user-1").unwrap();
        let first = store
            .find_by_user(&user, &OrderFilter::default(), Page::new(1, 2))
            .unwrap();
        let third = store
            .find_by_user(&user, &OrderFilter::default(), Page::new(3, 2))
            .unwrap();

        assert_eq!(first.total, 5);
        assert_eq!(first.orders.len(), 2);
        assert_eq!(first.pages(), 3);
        assert_eq!(third.orders.len(), 1);
    }

    #[rstest]
    fn test_find_by_user_status_filter() {
        let store = InMemoryStore::new();
        let order = order_for("user-1", 0);
        store.insert(&order).unwrap();

        let user = UserId::create("UserId", "user-1").unwrap();
        let filter = OrderFilter {
            status: Some(crate::workflow::OrderStatus::Cancelled),
            order_type: None,
        };
        let page = store
            .find_by_user(&user, &filter, Page::default())
            .unwrap();

        assert_eq!(page.total, 0);
    }

    #[rstest]
    fn test_provider_catalog_lookup() {
        let store = InMemoryStore::new();
        store.register_restaurant(
            "rest-001",
            DeliveryPolicy::create(Decimal::from(150), Decimal::from(20)).unwrap(),
        );
        store.register_tiffin_plan("tiffin-001");

        let restaurant = ProviderRef::Restaurant(
            RestaurantId::create("RestaurantId", "rest-001").unwrap(),
        );
        let policy = store.delivery_policy(&restaurant).unwrap().unwrap();
        assert_eq!(policy.minimum_order().value(), Decimal::from(150));

        let tiffin =
            ProviderRef::Tiffin(TiffinPlanId::create("TiffinPlanId", "tiffin-001").unwrap());
        let policy = store.delivery_policy(&tiffin).unwrap().unwrap();
        assert_eq!(policy.flat_fee().value(), Decimal::ZERO);

        let unknown = ProviderRef::Restaurant(
            RestaurantId::create("RestaurantId", "rest-404").unwrap(),
        );
        assert_eq!(store.delivery_policy(&unknown).unwrap(), None);
    }
}
