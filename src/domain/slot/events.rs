//! Slot domain events.
//!
//! Emitted after successful slot state transitions and handed to the
//! notification dispatcher. Events are named in past tense.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    BookingId, DomainEvent, EventId, PackageId, SlotId, Timestamp, TripDate,
};

/// Events that occur during a slot's lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotEvent {
    /// A new slot was opened by a traveler seeding it with their booking.
    ///
    /// Broadcast to prospective solo travelers.
    Created {
        event_id: EventId,
        slot_id: SlotId,
        package_id: PackageId,
        destination_name: String,
        trip_date: TripDate,
        available_capacity: u32,
        occurred_at: Timestamp,
    },

    /// The last seat was taken.
    ///
    /// Delivered to all current members.
    BecameFull {
        event_id: EventId,
        slot_id: SlotId,
        member_booking_ids: Vec<BookingId>,
        occurred_at: Timestamp,
    },

    /// A member booking left the slot, releasing its seats.
    BookingRemoved {
        event_id: EventId,
        slot_id: SlotId,
        booking_id: BookingId,
        available_capacity: u32,
        occurred_at: Timestamp,
    },
}

impl SlotEvent {
    /// Returns the slot this event concerns.
    pub fn slot_id(&self) -> &SlotId {
        match self {
            SlotEvent::Created { slot_id, .. }
            | SlotEvent::BecameFull { slot_id, .. }
            | SlotEvent::BookingRemoved { slot_id, .. } => slot_id,
        }
    }
}

impl DomainEvent for SlotEvent {
    fn event_type(&self) -> &'static str {
        match self {
            SlotEvent::Created { .. } => "slot.created",
            SlotEvent::BecameFull { .. } => "slot.became_full",
            SlotEvent::BookingRemoved { .. } => "slot.booking_removed",
        }
    }

    fn aggregate_id(&self) -> String {
        self.slot_id().to_string()
    }

    fn aggregate_type(&self) -> &'static str {
        "Slot"
    }

    fn occurred_at(&self) -> Timestamp {
        match self {
            SlotEvent::Created { occurred_at, .. }
            | SlotEvent::BecameFull { occurred_at, .. }
            | SlotEvent::BookingRemoved { occurred_at, .. } => *occurred_at,
        }
    }

    fn event_id(&self) -> EventId {
        match self {
            SlotEvent::Created { event_id, .. }
            | SlotEvent::BecameFull { event_id, .. }
            | SlotEvent::BookingRemoved { event_id, .. } => event_id.clone(),
        }
    }
}
