//! In-memory booking store.
//!
//! Stands in for the booking collaborator: holds seed bookings the core
//! creates and annotates slot references on admission.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::foundation::{BookingId, DomainError, ErrorCode, SlotId};
use crate::ports::{Booking, BookingStore};

/// In-memory `BookingStore`.
pub struct InMemoryBookingStore {
    bookings: Mutex<HashMap<BookingId, Booking>>,
}

impl InMemoryBookingStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            bookings: Mutex::new(HashMap::new()),
        }
    }

    /// Pre-populates the store (test helper).
    pub fn with_bookings(bookings: Vec<Booking>) -> Self {
        Self {
            bookings: Mutex::new(bookings.into_iter().map(|b| (b.id, b)).collect()),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<BookingId, Booking>> {
        self.bookings
            .lock()
            .expect("InMemoryBookingStore: lock poisoned")
    }
}

impl Default for InMemoryBookingStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookingStore for InMemoryBookingStore {
    async fn create(&self, booking: &Booking) -> Result<(), DomainError> {
        self.lock().insert(booking.id, booking.clone());
        Ok(())
    }

    async fn get(&self, id: &BookingId) -> Result<Option<Booking>, DomainError> {
        Ok(self.lock().get(id).cloned())
    }

    async fn attach_slot(
        &self,
        booking_id: &BookingId,
        slot_id: &SlotId,
    ) -> Result<(), DomainError> {
        let mut bookings = self.lock();
        let booking = bookings.get_mut(booking_id).ok_or_else(|| {
            DomainError::new(
                ErrorCode::BookingNotFound,
                format!("Booking not found: {}", booking_id),
            )
        })?;
        booking.slot_ref = Some(*slot_id);
        Ok(())
    }

    async fn detach_slot(&self, booking_id: &BookingId) -> Result<(), DomainError> {
        let mut bookings = self.lock();
        let booking = bookings.get_mut(booking_id).ok_or_else(|| {
            DomainError::new(
                ErrorCode::BookingNotFound,
                format!("Booking not found: {}", booking_id),
            )
        })?;
        booking.slot_ref = None;
        Ok(())
    }
}
