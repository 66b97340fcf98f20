//! SubmitJoinRequestHandler - Command handler for filing a join request.
//!
//! Validates that the slot can plausibly take the booking right now and that
//! no Pending request already exists for the pair. Capacity is checked again
//! at approval time; this check only stops requests that are hopeless at
//! submission.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::{
    BookingId, EventId, JoinRequestId, SerializableDomainEvent, SlotId, Timestamp, UserId,
};
use crate::domain::join_request::{JoinRequest, JoinRequestError, JoinRequestEvent};
use crate::domain::slot::Slot;
use crate::ports::{BookingStore, JoinRequestStore, NotificationDispatcher, SlotRegistry};

/// Command to request joining an existing slot with an existing booking.
#[derive(Debug, Clone)]
pub struct SubmitJoinRequestCommand {
    pub slot_id: SlotId,
    pub booking_id: BookingId,
    pub requester_id: UserId,
    pub message: Option<String>,
}

/// Result of a successful submission.
#[derive(Debug, Clone)]
pub struct SubmitJoinRequestResult {
    pub request: JoinRequest,
    /// Slot snapshot at submission time, for capacity context.
    pub slot: Slot,
}

/// Handler for submitting join requests.
pub struct SubmitJoinRequestHandler {
    slot_registry: Arc<dyn SlotRegistry>,
    request_store: Arc<dyn JoinRequestStore>,
    booking_store: Arc<dyn BookingStore>,
    dispatcher: Arc<dyn NotificationDispatcher>,
}

impl SubmitJoinRequestHandler {
    pub fn new(
        slot_registry: Arc<dyn SlotRegistry>,
        request_store: Arc<dyn JoinRequestStore>,
        booking_store: Arc<dyn BookingStore>,
        dispatcher: Arc<dyn NotificationDispatcher>,
    ) -> Self {
        Self {
            slot_registry,
            request_store,
            booking_store,
            dispatcher,
        }
    }

    pub async fn handle(
        &self,
        cmd: SubmitJoinRequestCommand,
    ) -> Result<SubmitJoinRequestResult, JoinRequestError> {
        // 1. The booking must exist, belong to the requester, and not be
        //    attached to a slot already.
        let booking = self
            .booking_store
            .get(&cmd.booking_id)
            .await
            .map_err(|e| JoinRequestError::infrastructure(e.to_string()))?
            .ok_or_else(|| {
                JoinRequestError::validation(
                    "booking_id",
                    format!("unknown booking {}", cmd.booking_id),
                )
            })?;
        if booking.traveler_id != cmd.requester_id {
            return Err(JoinRequestError::not_authorized());
        }
        if let Some(attached) = booking.slot_ref {
            return Err(JoinRequestError::validation(
                "booking_id",
                format!("booking is already attached to slot {}", attached),
            ));
        }

        // 2. The slot must be open with room for the whole party.
        let slot = self.slot_registry.get(&cmd.slot_id).await?;
        if slot.creator_id == cmd.requester_id {
            return Err(JoinRequestError::validation(
                "requester_id",
                "the slot creator is already a member of their own slot",
            ));
        }
        let available = slot.available_capacity();
        if !slot.status.is_joinable() || available < booking.guest_count {
            return Err(JoinRequestError::slot_not_joinable(
                slot.id,
                slot.status,
                available,
                booking.guest_count,
            ));
        }

        // 3. File the request; the store rejects a second Pending request
        //    for the same slot/booking pair atomically.
        let request = JoinRequest::submit(
            JoinRequestId::new(),
            cmd.slot_id,
            cmd.booking_id,
            cmd.requester_id,
            booking.guest_count,
            cmd.message,
        )?;
        self.request_store.insert_pending(&request).await?;

        info!(
            request_id = %request.id,
            slot_id = %slot.id,
            guest_count = request.guest_count,
            "join request submitted"
        );

        // 4. Notify the slot creator.
        let event = JoinRequestEvent::Submitted {
            event_id: EventId::new(),
            request_id: request.id,
            slot_id: slot.id,
            creator_id: slot.creator_id.clone(),
            guest_count: request.guest_count,
            occurred_at: Timestamp::now(),
        };
        self.dispatcher
            .dispatch(event.to_envelope())
            .await
            .map_err(|e| JoinRequestError::infrastructure(e.to_string()))?;

        Ok(SubmitJoinRequestResult { request, slot })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{
        InMemoryBookingStore, InMemoryJoinRequestStore, InMemoryNotificationBus,
        InMemorySlotRegistry,
    };
    use crate::domain::foundation::{DestinationId, PackageId, TripDate};
    use crate::domain::join_request::JoinRequestStatus;
    use crate::domain::slot::SlotStatus;
    use crate::ports::{Booking, NewSlot, PaymentStatus};

    struct Fixture {
        registry: Arc<InMemorySlotRegistry>,
        requests: Arc<InMemoryJoinRequestStore>,
        bookings: Arc<InMemoryBookingStore>,
        bus: Arc<InMemoryNotificationBus>,
        handler: SubmitJoinRequestHandler,
        slot: Slot,
    }

    async fn fixture(max_capacity: u32) -> Fixture {
        let registry = Arc::new(InMemorySlotRegistry::new());
        let requests = Arc::new(InMemoryJoinRequestStore::new());
        let bookings = Arc::new(InMemoryBookingStore::new());
        let bus = Arc::new(InMemoryNotificationBus::new());

        let slot = registry
            .create(NewSlot {
                package_id: PackageId::new("pkg-goa-beach").unwrap(),
                destination_id: DestinationId::new("dest-goa").unwrap(),
                destination_name: "Goa".to_string(),
                trip_date: TripDate::from_ymd(2026, 11, 20).unwrap(),
                max_capacity,
                creator_id: UserId::new("creator-1").unwrap(),
                seed_booking: BookingId::new(),
                seed_guest_count: 1,
            })
            .await
            .unwrap();

        let handler = SubmitJoinRequestHandler::new(
            registry.clone(),
            requests.clone(),
            bookings.clone(),
            bus.clone(),
        );
        Fixture {
            registry,
            requests,
            bookings,
            bus,
            handler,
            slot,
        }
    }

    async fn add_booking(fixture: &Fixture, traveler: &str, guest_count: u32) -> BookingId {
        let booking = Booking {
            id: BookingId::new(),
            traveler_id: UserId::new(traveler).unwrap(),
            guest_count,
            trip_date: TripDate::from_ymd(2026, 11, 20).unwrap(),
            payment_status: PaymentStatus::Paid,
            slot_ref: None,
            amount: 120_000,
            created_at: Timestamp::now(),
        };
        fixture.bookings.create(&booking).await.unwrap();
        booking.id
    }

    fn command(fixture: &Fixture, booking_id: BookingId, traveler: &str) -> SubmitJoinRequestCommand {
        SubmitJoinRequestCommand {
            slot_id: fixture.slot.id,
            booking_id,
            requester_id: UserId::new(traveler).unwrap(),
            message: None,
        }
    }

    #[tokio::test]
    async fn files_pending_request_and_notifies_creator() {
        let fixture = fixture(4).await;
        let booking_id = add_booking(&fixture, "traveler-2", 2).await;

        let result = fixture
            .handler
            .handle(command(&fixture, booking_id, "traveler-2"))
            .await
            .unwrap();

        assert_eq!(result.request.status, JoinRequestStatus::Pending);
        assert_eq!(result.request.guest_count, 2);
        assert_eq!(result.slot.available_capacity(), 3);

        let stored = fixture.requests.get(&result.request.id).await.unwrap();
        assert!(stored.is_some());
        assert!(fixture.bus.has_event("join_request.submitted"));
    }

    #[tokio::test]
    async fn full_slot_is_not_joinable() {
        let fixture = fixture(1).await; // seed fills the only seat
        assert_eq!(fixture.slot.status, SlotStatus::Full);
        let booking_id = add_booking(&fixture, "traveler-2", 1).await;

        let result = fixture
            .handler
            .handle(command(&fixture, booking_id, "traveler-2"))
            .await;
        assert!(matches!(
            result,
            Err(JoinRequestError::SlotNotJoinable {
                status: SlotStatus::Full,
                available: 0,
                ..
            })
        ));
    }

    #[tokio::test]
    async fn oversized_party_is_not_joinable() {
        let fixture = fixture(4).await; // 3 seats open
        let booking_id = add_booking(&fixture, "traveler-2", 4).await;

        let result = fixture
            .handler
            .handle(command(&fixture, booking_id, "traveler-2"))
            .await;
        assert!(matches!(
            result,
            Err(JoinRequestError::SlotNotJoinable {
                available: 3,
                requested: 4,
                ..
            })
        ));
    }

    #[tokio::test]
    async fn closed_slot_is_not_joinable() {
        let fixture = fixture(4).await;
        fixture.registry.close(&fixture.slot.id).await.unwrap();
        let booking_id = add_booking(&fixture, "traveler-2", 1).await;

        let result = fixture
            .handler
            .handle(command(&fixture, booking_id, "traveler-2"))
            .await;
        assert!(matches!(
            result,
            Err(JoinRequestError::SlotNotJoinable {
                status: SlotStatus::Closed,
                ..
            })
        ));
    }

    #[tokio::test]
    async fn duplicate_pending_request_is_rejected() {
        let fixture = fixture(4).await;
        let booking_id = add_booking(&fixture, "traveler-2", 1).await;

        fixture
            .handler
            .handle(command(&fixture, booking_id, "traveler-2"))
            .await
            .unwrap();
        let second = fixture
            .handler
            .handle(command(&fixture, booking_id, "traveler-2"))
            .await;
        assert!(matches!(
            second,
            Err(JoinRequestError::DuplicatePending { .. })
        ));
        assert_eq!(fixture.bus.events_of_type("join_request.submitted").len(), 1);
    }

    #[tokio::test]
    async fn creator_cannot_request_own_slot() {
        let fixture = fixture(4).await;
        let booking_id = add_booking(&fixture, "creator-1", 1).await;

        let result = fixture
            .handler
            .handle(command(&fixture, booking_id, "creator-1"))
            .await;
        assert!(matches!(
            result,
            Err(JoinRequestError::ValidationFailed { .. })
        ));
    }

    #[tokio::test]
    async fn requester_must_own_booking() {
        let fixture = fixture(4).await;
        let booking_id = add_booking(&fixture, "traveler-2", 1).await;

        let result = fixture
            .handler
            .handle(command(&fixture, booking_id, "traveler-3"))
            .await;
        assert!(matches!(result, Err(JoinRequestError::NotAuthorized)));
    }

    #[tokio::test]
    async fn booking_already_in_a_slot_is_rejected() {
        let fixture = fixture(4).await;
        let booking_id = add_booking(&fixture, "traveler-2", 1).await;
        fixture
            .bookings
            .attach_slot(&booking_id, &SlotId::new())
            .await
            .unwrap();

        let result = fixture
            .handler
            .handle(command(&fixture, booking_id, "traveler-2"))
            .await;
        assert!(matches!(
            result,
            Err(JoinRequestError::ValidationFailed { .. })
        ));
    }

    #[tokio::test]
    async fn unknown_booking_is_rejected() {
        let fixture = fixture(4).await;
        let result = fixture
            .handler
            .handle(command(&fixture, BookingId::new(), "traveler-2"))
            .await;
        assert!(matches!(
            result,
            Err(JoinRequestError::ValidationFailed { .. })
        ));
    }
}
