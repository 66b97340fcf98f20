//! BookingStore port - boundary to the booking/payment collaborator.
//!
//! Bookings live with the external collaborator. The core reads a booking's
//! guest count, records seed bookings it creates when opening a slot, and
//! writes the slot reference when an admission commits.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{BookingId, DomainError, SlotId, Timestamp, TripDate, UserId};

/// Payment state as the collaborator reports it. The core never acts on it
/// beyond carrying it through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    Paid,
    Refunded,
}

/// A booking as the collaborator exposes it to the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: BookingId,
    pub traveler_id: UserId,
    pub guest_count: u32,
    pub trip_date: TripDate,
    pub payment_status: PaymentStatus,
    /// Slot the booking is attached to, if admitted anywhere.
    pub slot_ref: Option<SlotId>,
    /// Amount in minor currency units.
    pub amount: i64,
    pub created_at: Timestamp,
}

/// Port for reading and annotating bookings.
#[async_trait]
pub trait BookingStore: Send + Sync {
    /// Records a booking created by the core (slot seed bookings).
    async fn create(&self, booking: &Booking) -> Result<(), DomainError>;

    /// Loads a booking by id.
    async fn get(&self, id: &BookingId) -> Result<Option<Booking>, DomainError>;

    /// Points the booking at the slot that admitted it.
    ///
    /// # Errors
    ///
    /// Returns `BookingNotFound` if the booking does not exist.
    async fn attach_slot(&self, booking_id: &BookingId, slot_id: &SlotId)
        -> Result<(), DomainError>;

    /// Clears the booking's slot reference after a removal.
    async fn detach_slot(&self, booking_id: &BookingId) -> Result<(), DomainError>;
}
