//! In-memory notification bus.
//!
//! Synchronous, deterministic event capture. Used as the dispatcher in tests
//! and in local development, where delivery simply means recording what the
//! transport collaborator would have sent.

use async_trait::async_trait;
use std::sync::RwLock;

use crate::domain::foundation::{DomainError, EventEnvelope};
use crate::ports::NotificationDispatcher;

/// In-memory notification bus with captured-event assertions.
///
/// # Panics
///
/// Methods may panic if internal locks are poisoned; acceptable for the
/// in-process adapter, which shares no locks with domain code.
///
/// # Example
///
/// ```ignore
/// let bus = Arc::new(InMemoryNotificationBus::new());
///
/// bus.dispatch(envelope).await?;
///
/// assert_eq!(bus.event_count(), 1);
/// assert!(bus.has_event("slot.created"));
/// ```
pub struct InMemoryNotificationBus {
    dispatched: RwLock<Vec<EventEnvelope>>,
}

impl InMemoryNotificationBus {
    /// Creates a new empty bus.
    pub fn new() -> Self {
        Self {
            dispatched: RwLock::new(Vec::new()),
        }
    }

    /// Returns all dispatched events (for test assertions).
    pub fn dispatched_events(&self) -> Vec<EventEnvelope> {
        self.dispatched
            .read()
            .expect("InMemoryNotificationBus: lock poisoned")
            .clone()
    }

    /// Returns events of a specific type.
    pub fn events_of_type(&self, event_type: &str) -> Vec<EventEnvelope> {
        self.dispatched_events()
            .into_iter()
            .filter(|e| e.event_type == event_type)
            .collect()
    }

    /// Returns events for a specific aggregate.
    pub fn events_for_aggregate(&self, aggregate_id: &str) -> Vec<EventEnvelope> {
        self.dispatched_events()
            .into_iter()
            .filter(|e| e.aggregate_id == aggregate_id)
            .collect()
    }

    /// Clears all dispatched events (for test isolation).
    pub fn clear(&self) {
        self.dispatched
            .write()
            .expect("InMemoryNotificationBus: lock poisoned")
            .clear();
    }

    /// Returns count of dispatched events.
    pub fn event_count(&self) -> usize {
        self.dispatched
            .read()
            .expect("InMemoryNotificationBus: lock poisoned")
            .len()
    }

    /// Checks if a specific event type was dispatched.
    pub fn has_event(&self, event_type: &str) -> bool {
        self.dispatched
            .read()
            .expect("InMemoryNotificationBus: lock poisoned")
            .iter()
            .any(|e| e.event_type == event_type)
    }
}

impl Default for InMemoryNotificationBus {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotificationDispatcher for InMemoryNotificationBus {
    async fn dispatch(&self, event: EventEnvelope) -> Result<(), DomainError> {
        self.dispatched
            .write()
            .expect("InMemoryNotificationBus: lock poisoned")
            .push(event);
        Ok(())
    }

    async fn dispatch_all(&self, events: Vec<EventEnvelope>) -> Result<(), DomainError> {
        let mut dispatched = self
            .dispatched
            .write()
            .expect("InMemoryNotificationBus: lock poisoned");
        dispatched.extend(events);
        Ok(())
    }
}
