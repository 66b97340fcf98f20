//! HTTP DTOs for slot endpoints.
//!
//! These types define the JSON request/response structure for the slot API.
//! They serve as the boundary between HTTP and the application layer.

use serde::{Deserialize, Serialize};

use crate::domain::pricing::GuestDetail;
use crate::domain::slot::{Slot, SlotStatus};
use crate::ports::Booking;

// Request DTOs

/// Request to open a new slot seeded with the creator's booking.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSlotRequest {
    pub package_id: String,
    pub destination_id: String,
    pub destination_name: String,
    /// Departure date, ISO `YYYY-MM-DD`.
    pub trip_date: String,
    pub guest_details: Vec<GuestDetail>,
    /// Group size; the configured default applies when absent.
    #[serde(default)]
    pub max_capacity: Option<u32>,
}

// Response DTOs

/// Slot state as exposed over the API.
#[derive(Debug, Clone, Serialize)]
pub struct SlotResponse {
    pub id: String,
    pub package_id: String,
    pub destination_id: String,
    pub destination_name: String,
    pub trip_date: String,
    pub max_capacity: u32,
    pub occupied_seats: u32,
    pub available_capacity: u32,
    pub status: SlotStatus,
    pub creator_id: String,
    pub member_booking_ids: Vec<String>,
    pub created_at: String,
}

impl From<Slot> for SlotResponse {
    fn from(slot: Slot) -> Self {
        Self {
            id: slot.id.to_string(),
            package_id: slot.package_id.to_string(),
            destination_id: slot.destination_id.to_string(),
            destination_name: slot.destination_name.clone(),
            trip_date: slot.trip_date.to_string(),
            max_capacity: slot.max_capacity,
            occupied_seats: slot.occupied_seats(),
            available_capacity: slot.available_capacity(),
            status: slot.status,
            creator_id: slot.creator_id.to_string(),
            member_booking_ids: slot
                .member_bookings()
                .iter()
                .map(|id| id.to_string())
                .collect(),
            created_at: slot.created_at.as_datetime().to_rfc3339(),
        }
    }
}

/// Response for slot creation: the slot plus the priced seed booking.
#[derive(Debug, Clone, Serialize)]
pub struct CreateSlotResponse {
    pub slot: SlotResponse,
    pub booking_id: String,
    /// Booking amount in minor currency units.
    pub amount: i64,
}

impl CreateSlotResponse {
    pub fn new(slot: Slot, booking: &Booking, amount: i64) -> Self {
        Self {
            slot: SlotResponse::from(slot),
            booking_id: booking.id.to_string(),
            amount,
        }
    }
}
