//! Append-only event log — the treasury's audit trail.
//!
//! Every successful mutating operation appends exactly one [`Event`], in
//! call order. Nothing is ever rewritten or dropped.

use chrono::Utc;
use coffer_types::{Event, Notification};

/// Ordered, sequence-numbered record of committed mutations.
#[derive(Debug, Default)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a notification, stamping it with the next sequence number.
    pub fn emit(&mut self, notification: Notification) {
        let seq = self.events.len() as u64;
        tracing::debug!(seq, %notification, "event emitted");
        self.events.push(Event {
            seq,
            at: Utc::now(),
            notification,
        });
    }

    /// All events in emission order.
    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }

    /// The most recent event, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Event> {
        self.events.last()
    }

    /// Number of events recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether nothing has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
