use chrono::{DateTime, Utc};
use serde::Serialize;

/// Immutable description of something that happened in the domain.
///
/// Carries the event name used for handler lookup, the moment the record
/// was constructed, and an opaque JSON payload whose shape is owned by the
/// producer. The dispatcher never inspects the payload.
#[derive(Debug, Clone, Serialize)]
pub struct EventRecord {
    name: String,
    occurred_at: DateTime<Utc>,
    payload: serde_json::Value,
}

impl EventRecord {
    /// Creates a new event record, stamping it with the current time.
    pub fn new(name: impl Into<String>, payload: serde_json::Value) -> Self {
        Self {
            name: name.into(),
            occurred_at: Utc::now(),
            payload,
        }
    }

    /// Returns the event name handlers are registered under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the moment the record was constructed.
    pub fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    /// Returns the event payload.
    pub fn payload(&self) -> &serde_json::Value {
        &self.payload
    }
}
