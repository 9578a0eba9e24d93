use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::model::Customer;

// ============================================================================
// Customer Lifecycle Events
// ============================================================================

/// Event emitted on the customer topic for every registration.
///
/// Transient: constructed, serialized, published, then discarded. Carries a
/// full snapshot of the customer as it looked at emission time, which for a
/// registration means before the store has assigned an id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerEvent {
    pub customer_event_id: Uuid,
    pub customer_event_type: CustomerEventType,
    pub customer: Customer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CustomerEventType {
    New,
}

impl CustomerEvent {
    /// Wraps a customer snapshot with a fresh event id.
    pub fn new(event_type: CustomerEventType, customer: Customer) -> Self {
        Self {
            customer_event_id: Uuid::new_v4(),
            customer_event_type: event_type,
            customer,
        }
    }
}
