//! HTTP boundary
//!
//! axum handlers for the order routes, the shared application state,
//! and the error-to-status mapping. Everything upstream of the workflow
//! (routing, identity headers, status codes, envelopes) lives here.

mod error;
mod state;

pub mod axum_handler;

pub use axum_handler::{Envelope, ListOrdersQuery, router};
pub use error::ApiError;
pub use state::AppState;
