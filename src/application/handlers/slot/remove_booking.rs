//! RemoveBookingHandler - Command handler for releasing a booking's seats.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::{BookingId, EventId, SerializableDomainEvent, SlotId, Timestamp};
use crate::domain::slot::{Slot, SlotError, SlotEvent};
use crate::ports::{BookingStore, NotificationDispatcher, SlotRegistry};

/// Command to remove a member booking from a slot.
#[derive(Debug, Clone)]
pub struct RemoveBookingCommand {
    pub slot_id: SlotId,
    pub booking_id: BookingId,
}

/// Result of a successful removal.
#[derive(Debug, Clone)]
pub struct RemoveBookingResult {
    pub slot: Slot,
}

/// Handler for removing bookings from slots.
///
/// A Full slot returns to Available when seats free up; a Closed slot stays
/// Closed.
pub struct RemoveBookingHandler {
    slot_registry: Arc<dyn SlotRegistry>,
    booking_store: Arc<dyn BookingStore>,
    dispatcher: Arc<dyn NotificationDispatcher>,
}

impl RemoveBookingHandler {
    pub fn new(
        slot_registry: Arc<dyn SlotRegistry>,
        booking_store: Arc<dyn BookingStore>,
        dispatcher: Arc<dyn NotificationDispatcher>,
    ) -> Self {
        Self {
            slot_registry,
            booking_store,
            dispatcher,
        }
    }

    pub async fn handle(&self, cmd: RemoveBookingCommand) -> Result<RemoveBookingResult, SlotError> {
        // 1. Release the seats; the registry serializes this per slot.
        let slot = self
            .slot_registry
            .remove_booking(&cmd.slot_id, &cmd.booking_id)
            .await?;

        // 2. Clear the booking's slot reference. The booking may live with
        //    the external collaborator; a missing record is not fatal once
        //    the seats are already released.
        if let Err(err) = self.booking_store.detach_slot(&cmd.booking_id).await {
            tracing::warn!(
                booking_id = %cmd.booking_id,
                error = %err,
                "could not detach slot reference from booking"
            );
        }

        info!(
            slot_id = %slot.id,
            booking_id = %cmd.booking_id,
            available = slot.available_capacity(),
            "booking removed from slot"
        );

        // 3. Announce the released seats.
        let event = SlotEvent::BookingRemoved {
            event_id: EventId::new(),
            slot_id: slot.id,
            booking_id: cmd.booking_id,
            available_capacity: slot.available_capacity(),
            occurred_at: Timestamp::now(),
        };
        self.dispatcher
            .dispatch(event.to_envelope())
            .await
            .map_err(|e| SlotError::infrastructure(e.to_string()))?;

        Ok(RemoveBookingResult { slot })
    }
}
