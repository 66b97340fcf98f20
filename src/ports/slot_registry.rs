//! SlotRegistry port - the single authority over slot capacity.
//!
//! Every capacity-affecting mutation in the system funnels through this port.
//! Implementations must serialize the check-then-write of each operation per
//! slot: two concurrent `admit_booking` calls whose combined guest counts
//! would overrun capacity must not both commit - exactly one succeeds and the
//! loser sees `SlotError::Full` with the authoritative remaining seats.

use async_trait::async_trait;

use crate::domain::foundation::{BookingId, DestinationId, PackageId, SlotId, TripDate, UserId};
use crate::domain::slot::{Slot, SlotError};

/// Inputs for seeding a new slot with its creator's booking.
#[derive(Debug, Clone)]
pub struct NewSlot {
    pub package_id: PackageId,
    pub destination_id: DestinationId,
    pub destination_name: String,
    pub trip_date: TripDate,
    pub max_capacity: u32,
    pub creator_id: UserId,
    pub seed_booking: BookingId,
    pub seed_guest_count: u32,
}

/// Port owning slot lifecycle and capacity bookkeeping.
///
/// Implementations must ensure:
/// - `create` performs the open-duplicate check and the insert atomically
/// - `admit_booking`, `remove_booking` and `close` are serialized per slot id
/// - snapshot reads (`get`, `find_open_slot`, `list_open`) return states that
///   were authoritative at some point during the call - a slot that is full
///   as of the read must never be reported with open seats
#[async_trait]
pub trait SlotRegistry: Send + Sync {
    /// Finds the Available slot for a natural key, if one exists.
    ///
    /// Full and Closed slots for the key do not count: they are no bar to
    /// opening a fresh group for the same trip.
    async fn find_open_slot(
        &self,
        package_id: &PackageId,
        destination_id: &DestinationId,
        trip_date: &TripDate,
    ) -> Result<Option<Slot>, SlotError>;

    /// Loads a slot by id.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no slot has this id.
    async fn get(&self, slot_id: &SlotId) -> Result<Slot, SlotError>;

    /// Snapshot of all slots currently in Available status.
    async fn list_open(&self) -> Result<Vec<Slot>, SlotError>;

    /// Creates a slot seeded with its creator's booking.
    ///
    /// # Errors
    ///
    /// - `Duplicate` if an Available slot already exists for the natural key
    /// - `CapacityExceeded` if the seed booking overruns `max_capacity`
    async fn create(&self, new_slot: NewSlot) -> Result<Slot, SlotError>;

    /// Atomically admits a booking if the slot is open and has room.
    ///
    /// # Errors
    ///
    /// - `Closed` if the slot was closed
    /// - `Full` if fewer than `guest_count` seats remain at commit time
    async fn admit_booking(
        &self,
        slot_id: &SlotId,
        booking_id: BookingId,
        guest_count: u32,
    ) -> Result<Slot, SlotError>;

    /// Removes a member booking, releasing its seats.
    async fn remove_booking(
        &self,
        slot_id: &SlotId,
        booking_id: &BookingId,
    ) -> Result<Slot, SlotError>;

    /// Terminally closes a slot (admin action at the boundary).
    async fn close(&self, slot_id: &SlotId) -> Result<Slot, SlotError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Compile-time check that trait is object-safe
    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn SlotRegistry) {}
}
