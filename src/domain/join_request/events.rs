//! Join request domain events.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    DomainEvent, EventId, JoinRequestId, SlotId, Timestamp, UserId,
};

/// Events emitted by the join-request workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum JoinRequestEvent {
    /// A traveler asked to join a slot.
    ///
    /// Delivered to the slot creator.
    Submitted {
        event_id: EventId,
        request_id: JoinRequestId,
        slot_id: SlotId,
        creator_id: UserId,
        guest_count: u32,
        occurred_at: Timestamp,
    },

    /// The creator approved and the booking was admitted.
    ///
    /// Delivered to the requester.
    Approved {
        event_id: EventId,
        request_id: JoinRequestId,
        requester_id: UserId,
        slot_id: SlotId,
        occurred_at: Timestamp,
    },

    /// The request was declined, by the creator or automatically.
    ///
    /// Delivered to the requester.
    Declined {
        event_id: EventId,
        request_id: JoinRequestId,
        requester_id: UserId,
        slot_id: SlotId,
        reason: Option<String>,
        occurred_at: Timestamp,
    },

    /// The requester withdrew the request.
    Cancelled {
        event_id: EventId,
        request_id: JoinRequestId,
        slot_id: SlotId,
        occurred_at: Timestamp,
    },
}

impl JoinRequestEvent {
    /// Returns the request this event concerns.
    pub fn request_id(&self) -> &JoinRequestId {
        match self {
            JoinRequestEvent::Submitted { request_id, .. }
            | JoinRequestEvent::Approved { request_id, .. }
            | JoinRequestEvent::Declined { request_id, .. }
            | JoinRequestEvent::Cancelled { request_id, .. } => request_id,
        }
    }
}

impl DomainEvent for JoinRequestEvent {
    fn event_type(&self) -> &'static str {
        match self {
            JoinRequestEvent::Submitted { .. } => "join_request.submitted",
            JoinRequestEvent::Approved { .. } => "join_request.approved",
            JoinRequestEvent::Declined { .. } => "join_request.declined",
            JoinRequestEvent::Cancelled { .. } => "join_request.cancelled",
        }
    }

    fn aggregate_id(&self) -> String {
        self.request_id().to_string()
    }

    fn aggregate_type(&self) -> &'static str {
        "JoinRequest"
    }

    fn occurred_at(&self) -> Timestamp {
        match self {
            JoinRequestEvent::Submitted { occurred_at, .. }
            | JoinRequestEvent::Approved { occurred_at, .. }
            | JoinRequestEvent::Declined { occurred_at, .. }
            | JoinRequestEvent::Cancelled { occurred_at, .. } => *occurred_at,
        }
    }

    fn event_id(&self) -> EventId {
        match self {
            JoinRequestEvent::Submitted { event_id, .. }
            | JoinRequestEvent::Approved { event_id, .. }
            | JoinRequestEvent::Declined { event_id, .. }
            | JoinRequestEvent::Cancelled { event_id, .. } => event_id.clone(),
        }
    }
}
