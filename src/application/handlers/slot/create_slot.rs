//! CreateSlotHandler - Command handler for opening a new group-trip slot.
//!
//! Prices the creator's booking from the package table, seeds the slot with
//! it through the registry (which enforces the one-open-slot-per-trip rule),
//! and announces the new slot to prospective travelers.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::{
    BookingId, DestinationId, DomainError, EventId, PackageId, SerializableDomainEvent,
    Timestamp, TripDate, UserId,
};
use crate::domain::pricing::{GuestDetail, PricingCalculator};
use crate::domain::slot::{Slot, SlotError, SlotEvent};
use crate::ports::{
    Booking, BookingStore, NewSlot, NotificationDispatcher, PackageCatalog, PaymentStatus,
    SlotRegistry,
};

use super::CreateSlotError;

/// Command to open a new slot seeded with the creator's own booking.
#[derive(Debug, Clone)]
pub struct CreateSlotCommand {
    pub package_id: PackageId,
    pub destination_id: DestinationId,
    pub destination_name: String,
    pub trip_date: TripDate,
    pub creator_id: UserId,
    pub guest_details: Vec<GuestDetail>,
    /// Group size; falls back to the configured default when absent.
    pub max_capacity: Option<u32>,
}

/// Result of successful slot creation.
#[derive(Debug, Clone)]
pub struct CreateSlotResult {
    pub slot: Slot,
    pub seed_booking: Booking,
    /// Booking amount in minor currency units.
    pub amount: i64,
}

/// Handler for creating slots.
pub struct CreateSlotHandler {
    slot_registry: Arc<dyn SlotRegistry>,
    booking_store: Arc<dyn BookingStore>,
    package_catalog: Arc<dyn PackageCatalog>,
    dispatcher: Arc<dyn NotificationDispatcher>,
    default_max_capacity: u32,
    max_capacity_limit: u32,
}

impl CreateSlotHandler {
    pub fn new(
        slot_registry: Arc<dyn SlotRegistry>,
        booking_store: Arc<dyn BookingStore>,
        package_catalog: Arc<dyn PackageCatalog>,
        dispatcher: Arc<dyn NotificationDispatcher>,
        default_max_capacity: u32,
        max_capacity_limit: u32,
    ) -> Self {
        Self {
            slot_registry,
            booking_store,
            package_catalog,
            dispatcher,
            default_max_capacity,
            max_capacity_limit,
        }
    }

    pub async fn handle(&self, cmd: CreateSlotCommand) -> Result<CreateSlotResult, CreateSlotError> {
        if cmd.guest_details.is_empty() {
            return Err(CreateSlotError::Slot(SlotError::validation(
                "guest_details",
                "at least one guest is required to open a slot",
            )));
        }

        let max_capacity = cmd.max_capacity.unwrap_or(self.default_max_capacity);
        if max_capacity > self.max_capacity_limit {
            return Err(CreateSlotError::Slot(SlotError::validation(
                "max_capacity",
                format!(
                    "requested capacity {} exceeds the limit of {}",
                    max_capacity, self.max_capacity_limit
                ),
            )));
        }

        // 1. Price the seed booking from the package table.
        let package = self
            .package_catalog
            .get(&cmd.package_id)
            .await
            .map_err(|e: DomainError| CreateSlotError::Infrastructure(e.to_string()))?
            .ok_or_else(|| CreateSlotError::UnknownPackage(cmd.package_id.clone()))?;
        let amount = PricingCalculator::compute_amount(&cmd.guest_details, &package.prices)?;
        let guest_count = cmd.guest_details.len() as u32;

        // 2. Seed the slot; the registry enforces the duplicate check
        //    atomically with the insert.
        let booking_id = BookingId::new();
        let slot = self
            .slot_registry
            .create(NewSlot {
                package_id: cmd.package_id,
                destination_id: cmd.destination_id,
                destination_name: cmd.destination_name,
                trip_date: cmd.trip_date,
                max_capacity,
                creator_id: cmd.creator_id.clone(),
                seed_booking: booking_id,
                seed_guest_count: guest_count,
            })
            .await?;

        // 3. Record the seed booking, already attached to its slot.
        let seed_booking = Booking {
            id: booking_id,
            traveler_id: cmd.creator_id,
            guest_count,
            trip_date: cmd.trip_date,
            payment_status: PaymentStatus::Pending,
            slot_ref: Some(slot.id),
            amount,
            created_at: Timestamp::now(),
        };
        self.booking_store
            .create(&seed_booking)
            .await
            .map_err(|e| CreateSlotError::Infrastructure(e.to_string()))?;

        info!(
            slot_id = %slot.id,
            trip_date = %slot.trip_date,
            capacity = slot.max_capacity,
            "slot created"
        );

        // 4. Announce the slot; also announce full when the seed fills it.
        let mut events = vec![SlotEvent::Created {
            event_id: EventId::new(),
            slot_id: slot.id,
            package_id: slot.package_id.clone(),
            destination_name: slot.destination_name.clone(),
            trip_date: slot.trip_date,
            available_capacity: slot.available_capacity(),
            occurred_at: Timestamp::now(),
        }
        .to_envelope()];
        if slot.is_full() {
            events.push(
                SlotEvent::BecameFull {
                    event_id: EventId::new(),
                    slot_id: slot.id,
                    member_booking_ids: slot.member_bookings(),
                    occurred_at: Timestamp::now(),
                }
                .to_envelope(),
            );
        }
        self.dispatcher
            .dispatch_all(events)
            .await
            .map_err(|e| CreateSlotError::Infrastructure(e.to_string()))?;

        Ok(CreateSlotResult {
            slot,
            seed_booking,
            amount,
        })
    }
}
