//! food-order-server
//!
//! HTTP server exposing the order workflows.
//!
//! # Endpoints
//!
//! - `POST /api/orders` - Place an order
//! - `GET /api/orders` - List own orders (filter + pagination)
//! - `GET /api/orders/{id}` - Fetch an order
//! - `GET /api/orders/{id}/track` - Delivery tracking projection
//! - `PUT /api/orders/{id}/status` - Apply a status transition
//! - `PUT /api/orders/{id}/cancel` - Cancel (dedicated path)
//!
//! # Usage
//!
//! ```bash
//! # Start the server
//! cargo run --bin food-order-server
//!
//! # Place an order
//! curl -X POST http://localhost:8080/api/orders \
//!   -H "Content-Type: application/json" \
//!   -H "x-user-id: user-1" -H "x-user-role: customer" \
//!   -d '{"order_type": "restaurant", "items": [...], ...}'
//! ```

use std::net::SocketAddr;
use std::sync::Arc;

use rust_decimal::Decimal;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use food_order_service::api::{AppState, router};
use food_order_service::compound_types::DeliveryPolicy;
use food_order_service::store::InMemoryStore;

#[tokio::main]
async fn main() {
    // Tracing initialization
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "food_order_server=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Demo catalog; the real deployment resolves providers from the
    // document database instead
    let store = Arc::new(InMemoryStore::new());
    seed_providers(&store);

    let app = router(AppState::in_memory(store)).layer(TraceLayer::new_for_http());

    let address = SocketAddr::from(([0, 0, 0, 0], 8080));
    tracing::info!("Starting server on {}", address);

    let listener = tokio::net::TcpListener::bind(address)
        .await
        .expect("Failed to bind server address");
    axum::serve(listener, app)
        .await
        .expect("Server error");
}

/// Seeds the demo provider catalog
fn seed_providers(store: &InMemoryStore) {
    let policy = DeliveryPolicy::create(Decimal::from(150), Decimal::from(20))
        .expect("Valid demo delivery policy");
    store.register_restaurant("rest-001", policy);

    let free_delivery = DeliveryPolicy::create(Decimal::ZERO, Decimal::from(30))
        .expect("Valid demo delivery policy");
    store.register_restaurant("rest-002", free_delivery);

    store.register_tiffin_plan("tiffin-001");
    tracing::info!("Seeded demo providers");
}
