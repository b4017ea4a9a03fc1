//! Order tracking history entry

use chrono::{DateTime, Utc};

use crate::workflow::status::OrderStatus;

/// One immutable record of a status change
///
/// Entries are appended in chronological order and never rewritten; the
/// last entry's status always equals the order's current status.
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use food_order_service::workflow::{OrderStatus, TrackingEntry};
///
/// let entry = TrackingEntry::for_status(OrderStatus::Confirmed, Utc::now());
/// assert_eq!(entry.status(), OrderStatus::Confirmed);
/// assert_eq!(entry.description(), "Order confirmed by restaurant");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackingEntry {
    status: OrderStatus,
    description: String,
    timestamp: DateTime<Utc>,
}

impl TrackingEntry {
    /// Creates a `TrackingEntry` with an explicit description
    ///
    /// # Arguments
    ///
    /// * `status` - The status the order moved to
    /// * `description` - Human-readable description of the change
    /// * `timestamp` - When the change happened
    #[must_use]
    pub const fn new(status: OrderStatus, description: String, timestamp: DateTime<Utc>) -> Self {
        Self {
            status,
            description,
            timestamp,
        }
    }

    /// Creates a `TrackingEntry` described by the fixed status table
    #[must_use]
    pub fn for_status(status: OrderStatus, timestamp: DateTime<Utc>) -> Self {
        Self::new(status, status.description().to_string(), timestamp)
    }

    /// Returns the status recorded by this entry
    #[must_use]
    pub const fn status(&self) -> OrderStatus {
        self.status
    }

    /// Returns the human-readable description
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns when the change happened
    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_for_status_uses_table_description() {
        let entry = TrackingEntry::for_status(OrderStatus::OutForDelivery, Utc::now());

        assert_eq!(entry.status(), OrderStatus::OutForDelivery);
        assert_eq!(entry.description(), "Order is out for delivery");
    }

    #[rstest]
    fn test_new_keeps_explicit_description() {
        let entry = TrackingEntry::new(
            OrderStatus::Cancelled,
            "Order cancelled by customer".to_string(),
            Utc::now(),
        );

        assert_eq!(entry.description(), "Order cancelled by customer");
    }

    #[rstest]
    fn test_timestamp_preserved() {
        let at = Utc::now();
        let entry = TrackingEntry::for_status(OrderStatus::Pending, at);

        assert_eq!(entry.timestamp(), at);
    }
}
