//! NotificationDispatcher port - outbound domain events.
//!
//! The core hands completed state transitions to this port; delivery
//! mechanics (websockets, email, push) are the adapter's concern. The
//! dispatcher is always injected - never resolved from ambient state.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, EventEnvelope};

/// Port for dispatching domain events after successful state transitions.
///
/// Implementations must ensure:
/// - Events are delivered at-least-once (receivers may see duplicates)
/// - Errors are propagated to the caller
#[async_trait]
pub trait NotificationDispatcher: Send + Sync {
    /// Dispatches a single event.
    async fn dispatch(&self, event: EventEnvelope) -> Result<(), DomainError>;

    /// Dispatches multiple events in order.
    ///
    /// Adapters without atomic batching dispatch sequentially with
    /// best-effort delivery.
    async fn dispatch_all(&self, events: Vec<EventEnvelope>) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Compile-time check that trait is object-safe
    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn NotificationDispatcher) {}
}
