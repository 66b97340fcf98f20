//! Slot aggregate entity.
//!
//! A Slot is one bookable group instance of a package at a destination on a
//! specific date. It owns all seat bookkeeping: member bookings, occupancy,
//! and status derivation.
//!
//! # Invariants
//!
//! - `occupied_seats() <= max_capacity` at all times
//! - `status == Full` exactly when `occupied_seats() == max_capacity`
//! - `Closed` is sticky: removals never reopen a closed slot
//!
//! Occupancy is the sum of the member bookings' guest counts; membership is
//! keyed by booking id, so a booking is counted at most once.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    BookingId, DestinationId, PackageId, SlotId, Timestamp, TripDate, UserId,
};

use super::{SlotError, SlotStatus};

/// Slot aggregate - a shared-capacity group trip instance.
///
/// `(package_id, destination_id, trip_date)` is the natural key; `id` is the
/// surrogate. All mutation goes through [`Slot::admit`], [`Slot::remove`] and
/// [`Slot::close`], which keep occupancy and status consistent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    /// Surrogate identifier.
    pub id: SlotId,

    /// Package this slot is an instance of.
    pub package_id: PackageId,

    /// Destination this slot departs to.
    pub destination_id: DestinationId,

    /// Display name of the destination, denormalized for notifications.
    pub destination_name: String,

    /// Departure date.
    pub trip_date: TripDate,

    /// Total seats in the group.
    pub max_capacity: u32,

    /// Member bookings and the seats each occupies. Keyed by booking id;
    /// iteration order is irrelevant to the domain.
    members: BTreeMap<BookingId, u32>,

    /// Current lifecycle status, kept in sync with occupancy.
    pub status: SlotStatus,

    /// Traveler who seeded the slot; approves join requests.
    pub creator_id: UserId,

    /// When the slot was created.
    pub created_at: Timestamp,

    /// When the slot was last mutated.
    pub updated_at: Timestamp,
}

impl Slot {
    /// Creates a slot seeded with its creator's booking.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if `max_capacity` or `seed_guest_count` is zero
    /// - `CapacityExceeded` if the seed booking alone overruns capacity
    #[allow(clippy::too_many_arguments)]
    pub fn create(
        id: SlotId,
        package_id: PackageId,
        destination_id: DestinationId,
        destination_name: impl Into<String>,
        trip_date: TripDate,
        max_capacity: u32,
        creator_id: UserId,
        seed_booking: BookingId,
        seed_guest_count: u32,
    ) -> Result<Self, SlotError> {
        if max_capacity == 0 {
            return Err(SlotError::validation(
                "max_capacity",
                "slot capacity must be at least 1",
            ));
        }
        if seed_guest_count == 0 {
            return Err(SlotError::validation(
                "guest_count",
                "seed booking must cover at least one guest",
            ));
        }
        if seed_guest_count > max_capacity {
            return Err(SlotError::capacity_exceeded(seed_guest_count, max_capacity));
        }

        let now = Timestamp::now();
        let mut members = BTreeMap::new();
        members.insert(seed_booking, seed_guest_count);

        let mut slot = Self {
            id,
            package_id,
            destination_id,
            destination_name: destination_name.into(),
            trip_date,
            max_capacity,
            members,
            status: SlotStatus::Available,
            creator_id,
            created_at: now,
            updated_at: now,
        };
        slot.refresh_status();
        Ok(slot)
    }

    /// Seats currently taken by member bookings.
    pub fn occupied_seats(&self) -> u32 {
        self.members.values().sum()
    }

    /// Seats still open. Computed from membership, never cached.
    pub fn available_capacity(&self) -> u32 {
        self.max_capacity - self.occupied_seats()
    }

    /// Ids of all member bookings.
    pub fn member_bookings(&self) -> Vec<BookingId> {
        self.members.keys().copied().collect()
    }

    /// Number of member bookings.
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// True if the booking is already a member.
    pub fn contains_booking(&self, booking_id: &BookingId) -> bool {
        self.members.contains_key(booking_id)
    }

    /// Seats occupied by one member booking, if present.
    pub fn guest_count_of(&self, booking_id: &BookingId) -> Option<u32> {
        self.members.get(booking_id).copied()
    }

    pub fn is_full(&self) -> bool {
        self.status == SlotStatus::Full
    }

    pub fn is_closed(&self) -> bool {
        self.status == SlotStatus::Closed
    }

    /// Admits a booking into the slot.
    ///
    /// # Errors
    ///
    /// - `Closed` if the slot has been closed
    /// - `AlreadyMember` if the booking already occupies seats here
    /// - `ValidationFailed` if `guest_count` is zero
    /// - `Full` if fewer than `guest_count` seats remain; carries the
    ///   authoritative remaining seat count
    pub fn admit(&mut self, booking_id: BookingId, guest_count: u32) -> Result<(), SlotError> {
        if self.is_closed() {
            return Err(SlotError::closed(self.id));
        }
        if guest_count == 0 {
            return Err(SlotError::validation(
                "guest_count",
                "admission must cover at least one guest",
            ));
        }
        if self.contains_booking(&booking_id) {
            return Err(SlotError::already_member(self.id, booking_id));
        }
        let available = self.available_capacity();
        if guest_count > available {
            return Err(SlotError::full(self.id, guest_count, available));
        }

        self.members.insert(booking_id, guest_count);
        self.refresh_status();
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Removes a member booking, releasing its seats.
    ///
    /// A Full slot returns to Available; a Closed slot stays Closed.
    ///
    /// # Errors
    ///
    /// Returns `ValidationFailed` if the booking is not a member.
    pub fn remove(&mut self, booking_id: &BookingId) -> Result<(), SlotError> {
        if self.members.remove(booking_id).is_none() {
            return Err(SlotError::validation(
                "booking_id",
                format!("booking {} is not a member of slot {}", booking_id, self.id),
            ));
        }
        self.refresh_status();
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Closes the slot terminally. Idempotent.
    pub fn close(&mut self) {
        if !self.is_closed() {
            self.status = SlotStatus::Closed;
            self.updated_at = Timestamp::now();
        }
    }

    /// Re-derives status from occupancy. Closed is sticky.
    fn refresh_status(&mut self) {
        if self.status == SlotStatus::Closed {
            return;
        }
        self.status = if self.occupied_seats() == self.max_capacity {
            SlotStatus::Full
        } else {
            SlotStatus::Available
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn test_slot(max_capacity: u32, seed_guests: u32) -> Slot {
        Slot::create(
            SlotId::new(),
            PackageId::new("pkg-goa-beach").unwrap(),
            DestinationId::new("dest-goa").unwrap(),
            "Goa",
            TripDate::from_ymd(2026, 11, 20).unwrap(),
            max_capacity,
            UserId::new("creator-1").unwrap(),
            BookingId::new(),
            seed_guests,
        )
        .unwrap()
    }

    #[test]
    fn create_seeds_creator_booking() {
        let slot = test_slot(4, 2);
        assert_eq!(slot.member_count(), 1);
        assert_eq!(slot.occupied_seats(), 2);
        assert_eq!(slot.available_capacity(), 2);
        assert_eq!(slot.status, SlotStatus::Available);
    }

    #[test]
    fn create_full_when_seed_fills_capacity() {
        let slot = test_slot(2, 2);
        assert_eq!(slot.status, SlotStatus::Full);
        assert_eq!(slot.available_capacity(), 0);
    }

    #[test]
    fn create_rejects_zero_capacity() {
        let result = Slot::create(
            SlotId::new(),
            PackageId::new("pkg-1").unwrap(),
            DestinationId::new("dest-1").unwrap(),
            "Somewhere",
            TripDate::from_ymd(2026, 11, 20).unwrap(),
            0,
            UserId::new("creator-1").unwrap(),
            BookingId::new(),
            1,
        );
        assert!(matches!(result, Err(SlotError::ValidationFailed { .. })));
    }

    #[test]
    fn create_rejects_oversized_seed() {
        let result = Slot::create(
            SlotId::new(),
            PackageId::new("pkg-1").unwrap(),
            DestinationId::new("dest-1").unwrap(),
            "Somewhere",
            TripDate::from_ymd(2026, 11, 20).unwrap(),
            4,
            UserId::new("creator-1").unwrap(),
            BookingId::new(),
            5,
        );
        assert!(matches!(
            result,
            Err(SlotError::CapacityExceeded {
                requested: 5,
                max_capacity: 4
            })
        ));
    }

    #[test]
    fn admit_consumes_guest_count_seats() {
        let mut slot = test_slot(4, 1);
        slot.admit(BookingId::new(), 2).unwrap();
        assert_eq!(slot.occupied_seats(), 3);
        assert_eq!(slot.available_capacity(), 1);
        assert_eq!(slot.status, SlotStatus::Available);
    }

    #[test]
    fn admit_fills_slot_at_exact_capacity() {
        // maxCapacity=4 with three 1-guest bookings: admitting 2 fails,
        // admitting 1 succeeds and the slot becomes Full.
        let mut slot = test_slot(4, 1);
        slot.admit(BookingId::new(), 1).unwrap();
        slot.admit(BookingId::new(), 1).unwrap();

        let too_many = slot.admit(BookingId::new(), 2);
        assert!(matches!(
            too_many,
            Err(SlotError::Full {
                requested: 2,
                available: 1,
                ..
            })
        ));

        slot.admit(BookingId::new(), 1).unwrap();
        assert_eq!(slot.status, SlotStatus::Full);
        assert_eq!(slot.available_capacity(), 0);
    }

    #[test]
    fn admit_rejects_closed_slot() {
        let mut slot = test_slot(4, 1);
        slot.close();
        let result = slot.admit(BookingId::new(), 1);
        assert!(matches!(result, Err(SlotError::Closed { .. })));
    }

    #[test]
    fn admit_rejects_duplicate_member() {
        let mut slot = test_slot(4, 1);
        let booking = BookingId::new();
        slot.admit(booking, 1).unwrap();
        let result = slot.admit(booking, 1);
        assert!(matches!(result, Err(SlotError::AlreadyMember { .. })));
        assert_eq!(slot.occupied_seats(), 2);
    }

    #[test]
    fn admit_rejects_zero_guests() {
        let mut slot = test_slot(4, 1);
        let result = slot.admit(BookingId::new(), 0);
        assert!(matches!(result, Err(SlotError::ValidationFailed { .. })));
    }

    #[test]
    fn remove_reopens_full_slot() {
        let mut slot = test_slot(2, 1);
        let booking = BookingId::new();
        slot.admit(booking, 1).unwrap();
        assert_eq!(slot.status, SlotStatus::Full);

        slot.remove(&booking).unwrap();
        assert_eq!(slot.status, SlotStatus::Available);
        assert_eq!(slot.available_capacity(), 1);
    }

    #[test]
    fn remove_does_not_reopen_closed_slot() {
        let mut slot = test_slot(4, 1);
        let booking = BookingId::new();
        slot.admit(booking, 2).unwrap();
        slot.close();

        slot.remove(&booking).unwrap();
        assert_eq!(slot.status, SlotStatus::Closed);
    }

    #[test]
    fn remove_unknown_booking_fails() {
        let mut slot = test_slot(4, 1);
        let result = slot.remove(&BookingId::new());
        assert!(matches!(result, Err(SlotError::ValidationFailed { .. })));
    }

    #[test]
    fn close_is_idempotent() {
        let mut slot = test_slot(4, 1);
        slot.close();
        slot.close();
        assert_eq!(slot.status, SlotStatus::Closed);
    }

    proptest! {
        /// Any sequence of admits and removes that only commits accepted
        /// operations keeps occupancy within bounds and status consistent.
        #[test]
        fn occupancy_invariant_holds_under_random_operations(
            ops in prop::collection::vec((0u8..3, 1u32..4), 1..40),
            max_capacity in 1u32..10,
        ) {
            let mut slot = test_slot(max_capacity.max(1), 1);
            let mut admitted: Vec<BookingId> = Vec::new();

            for (op, guests) in ops {
                match op {
                    0 => {
                        let booking = BookingId::new();
                        if slot.admit(booking, guests).is_ok() {
                            admitted.push(booking);
                        }
                    }
                    1 => {
                        if let Some(booking) = admitted.pop() {
                            let _ = slot.remove(&booking);
                        }
                    }
                    _ => {
                        // Re-admission attempts of a current member must not
                        // change occupancy.
                        if let Some(booking) = admitted.first() {
                            let before = slot.occupied_seats();
                            let _ = slot.admit(*booking, guests);
                            prop_assert_eq!(slot.occupied_seats(), before);
                        }
                    }
                }

                prop_assert!(slot.occupied_seats() <= slot.max_capacity);
                let full = slot.occupied_seats() == slot.max_capacity;
                prop_assert_eq!(slot.status == SlotStatus::Full, full);
            }
        }
    }
}
