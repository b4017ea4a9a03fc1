//! axum handlers
//!
//! One handler per route, mirroring the order endpoints of the HTTP
//! boundary. Authentication happens upstream; by the time a request
//! reaches these handlers the verified identity rides in the
//! `x-user-id` / `x-user-role` headers, from which the acting user is
//! rebuilt. Handlers stay thin: extract, call the workflow with the
//! current time, convert to DTOs.

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::compound_types::{Actor, ActorRole};
use crate::dto::{
    CreateOrderDto, OrderDto, OrderListDto, TrackOrderDto, UpdateStatusDto,
};
use crate::simple_types::{OrderId, OrderType, UserId};
use crate::store::{OrderFilter, Page};
use crate::workflow::{self, OrderError, OrderStatus};

use super::error::ApiError;
use super::state::AppState;

/// Header carrying the verified acting user's ID
const USER_ID_HEADER: &str = "x-user-id";

/// Header carrying the verified acting user's role
const USER_ROLE_HEADER: &str = "x-user-role";

// =============================================================================
// Response envelope
// =============================================================================

/// The `{success, message?, data}` success envelope
#[derive(Serialize)]
pub struct Envelope<T> {
    /// Always `true` on this path
    pub success: bool,
    /// Optional human-readable message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// The response payload
    pub data: T,
}

impl<T> Envelope<T> {
    fn with_message(message: String, data: T) -> Self {
        Self {
            success: true,
            message: Some(message),
            data,
        }
    }

    fn data(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data,
        }
    }
}

// =============================================================================
// Actor extraction
// =============================================================================

/// Rebuilds the acting user from the identity headers
///
/// A missing or invalid user ID is refused; a missing role defaults to
/// customer, matching what the auth middleware sets for ordinary users.
fn actor_from_headers(headers: &HeaderMap) -> Result<Actor, ApiError> {
    let user_id = headers
        .get(USER_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    let role = headers
        .get(USER_ROLE_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("customer");

    let user_id =
        UserId::create("UserId", user_id).map_err(|_| ApiError::from(OrderError::AccessDenied))?;
    let role =
        ActorRole::create("Role", role).map_err(|_| ApiError::from(OrderError::AccessDenied))?;
    Ok(Actor::new(user_id, role))
}

/// Parses the order ID path segment
fn parse_order_id(id: &str) -> Result<OrderId, ApiError> {
    OrderId::create("OrderId", id).map_err(|error| ApiError::from(OrderError::from(error)))
}

// =============================================================================
// POST /api/orders
// =============================================================================

/// Creates a new order
///
/// # Errors
///
/// Validation, pricing, and provider-lookup failures from the workflow.
pub async fn create_order_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<CreateOrderDto>,
) -> Result<impl IntoResponse, ApiError> {
    let actor = actor_from_headers(&headers)?;
    let unvalidated = body.to_unvalidated_order();

    let order = workflow::place_order(
        state.orders(),
        state.providers(),
        &actor,
        &unvalidated,
        Utc::now(),
    )?;

    tracing::info!(order_number = order.order_number().value(), "order created");
    Ok((
        StatusCode::CREATED,
        Json(Envelope::with_message(
            "Order created successfully".to_string(),
            OrderDto::from_domain(&order),
        )),
    ))
}

// =============================================================================
// GET /api/orders
// =============================================================================

/// Query parameters accepted by the listing endpoint
#[derive(Debug, Default, Deserialize)]
pub struct ListOrdersQuery {
    /// Keep only orders in this status
    pub status: Option<String>,
    /// Keep only orders of this type
    pub order_type: Option<String>,
    /// 1-based page number (default 1)
    pub page: Option<u32>,
    /// Page size (default 10)
    pub limit: Option<u32>,
}

/// Lists the acting user's orders
///
/// # Errors
///
/// Validation failures on the filter parameters; storage failures.
pub async fn list_orders_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<ListOrdersQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let actor = actor_from_headers(&headers)?;

    let status = query
        .status
        .as_deref()
        .map(|value| OrderStatus::create("Status", value))
        .transpose()
        .map_err(OrderError::from)?;
    let order_type = query
        .order_type
        .as_deref()
        .map(|value| OrderType::create("OrderType", value))
        .transpose()
        .map_err(OrderError::from)?;

    let filter = OrderFilter { status, order_type };
    let page = Page::new(query.page.unwrap_or(1), query.limit.unwrap_or(10));

    let orders = workflow::list_orders(state.orders(), &actor, &filter, page)?;

    Ok(Json(Envelope::data(OrderListDto::from_domain(&orders))))
}

// =============================================================================
// GET /api/orders/{id}
// =============================================================================

/// Fetches one order, owner or administrator only
///
/// # Errors
///
/// Not-found and access failures from the workflow.
pub async fn get_order_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ApiError> {
    let actor = actor_from_headers(&headers)?;
    let order_id = parse_order_id(&id)?;

    let order = workflow::get_order(state.orders(), &order_id, &actor)?;

    Ok(Json(Envelope::data(OrderDto::from_domain(&order))))
}

// =============================================================================
// GET /api/orders/{id}/track
// =============================================================================

/// Fetches the tracking projection, owner only
///
/// # Errors
///
/// Not-found and access failures from the workflow.
pub async fn track_order_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ApiError> {
    let actor = actor_from_headers(&headers)?;
    let order_id = parse_order_id(&id)?;

    let view = workflow::track_order(state.orders(), &order_id, &actor)?;

    Ok(Json(Envelope::data(TrackOrderDto::from_domain(&view))))
}

// =============================================================================
// PUT /api/orders/{id}/status
// =============================================================================

/// Applies a status transition
///
/// # Errors
///
/// Transition, permission, and window failures from the workflow.
pub async fn update_status_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(body): Json<UpdateStatusDto>,
) -> Result<impl IntoResponse, ApiError> {
    let actor = actor_from_headers(&headers)?;
    let order_id = parse_order_id(&id)?;
    let requested =
        OrderStatus::create("Status", &body.status).map_err(OrderError::from)?;

    let order =
        workflow::update_status(state.orders(), &order_id, requested, &actor, Utc::now())?;

    tracing::info!(
        order_number = order.order_number().value(),
        status = requested.value(),
        "order status updated"
    );
    Ok(Json(Envelope::with_message(
        format!("Order {requested} successfully"),
        OrderDto::from_domain(&order),
    )))
}

// =============================================================================
// PUT /api/orders/{id}/cancel
// =============================================================================

/// Cancels an order through the dedicated path, owner only
///
/// # Errors
///
/// Not-found, access, and eligibility failures from the workflow.
pub async fn cancel_order_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ApiError> {
    let actor = actor_from_headers(&headers)?;
    let order_id = parse_order_id(&id)?;

    let order = workflow::cancel_order(state.orders(), &order_id, &actor, Utc::now())?;

    tracing::info!(order_number = order.order_number().value(), "order cancelled");
    Ok(Json(Envelope::with_message(
        "Order cancelled successfully".to_string(),
        OrderDto::from_domain(&order),
    )))
}

// =============================================================================
// Router
// =============================================================================

/// Builds the order routes
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use food_order_service::api::{AppState, router};
/// use food_order_service::store::InMemoryStore;
///
/// let state = AppState::in_memory(Arc::new(InMemoryStore::new()));
/// let app = router(state);
/// # let _ = app;
/// ```
#[must_use]
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/orders",
            post(create_order_handler).get(list_orders_handler),
        )
        .route("/api/orders/{id}", get(get_order_handler))
        .route("/api/orders/{id}/track", get(track_order_handler))
        .route("/api/orders/{id}/status", put(update_status_handler))
        .route("/api/orders/{id}/cancel", put(cancel_order_handler))
        .with_state(state)
}
