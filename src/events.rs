// 📜 Event Log - in-memory audit trail of bank operations
//
// Every mutation that goes through the Bank appends one Event.
// The log is append-only; nothing is ever removed or rewritten.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const CUSTOMER_ADDED: &str = "customer_added";
pub const ACCOUNT_OPENED: &str = "account_opened";
pub const DEPOSIT: &str = "deposit";
pub const WITHDRAWAL: &str = "withdrawal";
pub const WITHDRAWAL_REJECTED: &str = "withdrawal_rejected";
pub const INTEREST_ACCRUED: &str = "interest_accrued";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Event {
    pub event_id: String,
    pub timestamp: DateTime<Utc>,
    pub event_type: String,
    pub entity_type: String,
    pub entity_id: String,
    pub data: serde_json::Value,
}

impl Event {
    pub fn new(
        event_type: &str,
        entity_type: &str,
        entity_id: &str,
        data: serde_json::Value,
    ) -> Self {
        Self {
            event_id: uuid::Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            event_type: event_type.to_string(),
            entity_type: entity_type.to_string(),
            entity_id: entity_id.to_string(),
            data,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, event: Event) {
        self.events.push(event);
    }

    /// All events in the order they were recorded
    pub fn all(&self) -> &[Event] {
        &self.events
    }

    pub fn for_entity(&self, entity_id: &str) -> Vec<&Event> {
        self.events.iter().filter(|e| e.entity_id == entity_id).collect()
    }

    pub fn by_type(&self, event_type: &str) -> Vec<&Event> {
        self.events.iter().filter(|e| e.event_type == event_type).collect()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
