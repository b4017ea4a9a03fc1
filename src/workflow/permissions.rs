//! Transition permission table
//!
//! One place answers "may this role move an order from here to there,
//! this long after placement?". The lifecycle manager consults this
//! table instead of scattering role conditionals through its handlers.
//!
//! Rules:
//!
//! - Nobody leaves a terminal status (`delivered`, `cancelled`,
//!   `refunded`).
//! - Privileged roles (admin, provider operator) may set any defined
//!   status, including skipping forward states.
//! - A customer may only request `cancelled`, only while the order is
//!   `pending` or `confirmed`, and only within the 5-minute grace window
//!   measured from order placement.

use chrono::Duration;

use crate::compound_types::ActorRole;
use crate::workflow::error_types::OrderError;
use crate::workflow::status::OrderStatus;

/// Length of the owner's cancellation grace window in minutes
pub const CANCELLATION_WINDOW_MINUTES: i64 = 5;

/// Returns the owner's cancellation grace window
#[must_use]
pub fn cancellation_window() -> Duration {
    Duration::minutes(CANCELLATION_WINDOW_MINUTES)
}

/// Checks whether a status transition is permitted
///
/// # Arguments
///
/// * `role` - Role of the acting user (ownership is checked by the
///   caller; this table only judges the role)
/// * `from` - Status the order is currently in
/// * `to` - Status being requested
/// * `elapsed` - Time since the order was placed
///
/// # Errors
///
/// * [`OrderError::TerminalStateViolation`] - `from` is terminal
/// * [`OrderError::AccessDenied`] - a customer requested anything other
///   than cancellation
/// * [`OrderError::InvalidTransition`] - a customer requested
///   cancellation from a status later than `confirmed`
/// * [`OrderError::CancellationWindowExpired`] - a customer requested
///   cancellation after the grace window
pub fn check_transition(
    role: ActorRole,
    from: OrderStatus,
    to: OrderStatus,
    elapsed: Duration,
) -> Result<(), OrderError> {
    if from.is_terminal() {
        return Err(OrderError::TerminalStateViolation { status: from });
    }

    match role {
        ActorRole::Admin | ActorRole::Provider => Ok(()),
        ActorRole::Customer => check_customer_transition(from, to, elapsed),
    }
}

/// The customer row of the permission table
fn check_customer_transition(
    from: OrderStatus,
    to: OrderStatus,
    elapsed: Duration,
) -> Result<(), OrderError> {
    if to != OrderStatus::Cancelled {
        return Err(OrderError::AccessDenied);
    }
    if !matches!(from, OrderStatus::Pending | OrderStatus::Confirmed) {
        return Err(OrderError::InvalidTransition { from, to });
    }
    if elapsed > cancellation_window() {
        return Err(OrderError::CancellationWindowExpired {
            window_minutes: CANCELLATION_WINDOW_MINUTES,
        });
    }
    Ok(())
}
