//! Slot-specific error types.
//!
//! Every rejected capacity operation carries the authoritative capacity and
//! status context at the moment of rejection, so callers can offer an
//! immediate alternative.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | NotFound | 404 |
//! | Duplicate | 409 |
//! | CapacityExceeded | 400 |
//! | Full | 409 |
//! | Closed | 410 |
//! | ValidationFailed | 400 |
//! | Infrastructure | 500 |

use crate::domain::foundation::{BookingId, DomainError, ErrorCode, SlotId};

use super::SlotStatus;

/// Slot-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotError {
    /// Slot was not found.
    NotFound(SlotId),

    /// An open slot already exists for the same package/destination/date.
    Duplicate { existing: SlotId },

    /// Seed booking would exceed the slot's capacity at creation.
    CapacityExceeded { requested: u32, max_capacity: u32 },

    /// Admission would overrun the remaining seats.
    Full {
        slot_id: SlotId,
        requested: u32,
        available: u32,
    },

    /// Slot has been terminally closed.
    Closed { slot_id: SlotId },

    /// Booking is already a member of the slot.
    AlreadyMember {
        slot_id: SlotId,
        booking_id: BookingId,
    },

    /// Validation failed.
    ValidationFailed { field: String, message: String },

    /// Infrastructure error.
    Infrastructure(String),
}

impl SlotError {
    pub fn not_found(id: SlotId) -> Self {
        SlotError::NotFound(id)
    }

    pub fn duplicate(existing: SlotId) -> Self {
        SlotError::Duplicate { existing }
    }

    pub fn capacity_exceeded(requested: u32, max_capacity: u32) -> Self {
        SlotError::CapacityExceeded {
            requested,
            max_capacity,
        }
    }

    pub fn full(slot_id: SlotId, requested: u32, available: u32) -> Self {
        SlotError::Full {
            slot_id,
            requested,
            available,
        }
    }

    pub fn closed(slot_id: SlotId) -> Self {
        SlotError::Closed { slot_id }
    }

    pub fn already_member(slot_id: SlotId, booking_id: BookingId) -> Self {
        SlotError::AlreadyMember {
            slot_id,
            booking_id,
        }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        SlotError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        SlotError::Infrastructure(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            SlotError::NotFound(_) => ErrorCode::SlotNotFound,
            SlotError::Duplicate { .. } => ErrorCode::DuplicateSlot,
            SlotError::CapacityExceeded { .. } => ErrorCode::CapacityExceeded,
            SlotError::Full { .. } => ErrorCode::SlotFull,
            SlotError::Closed { .. } => ErrorCode::SlotClosed,
            SlotError::AlreadyMember { .. } => ErrorCode::ValidationFailed,
            SlotError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            SlotError::Infrastructure(_) => ErrorCode::StorageError,
        }
    }

    /// Returns a user-friendly error message.
    pub fn message(&self) -> String {
        match self {
            SlotError::NotFound(id) => format!("Slot not found: {}", id),
            SlotError::Duplicate { existing } => format!(
                "An open slot already exists for this package, destination and date: {}",
                existing
            ),
            SlotError::CapacityExceeded {
                requested,
                max_capacity,
            } => format!(
                "Seed booking of {} guests exceeds slot capacity {}",
                requested, max_capacity
            ),
            SlotError::Full {
                slot_id,
                requested,
                available,
            } => format!(
                "Slot {} cannot admit {} guests, only {} seats remain",
                slot_id, requested, available
            ),
            SlotError::Closed { slot_id } => format!("Slot {} is closed", slot_id),
            SlotError::AlreadyMember {
                slot_id,
                booking_id,
            } => format!("Booking {} is already a member of slot {}", booking_id, slot_id),
            SlotError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            SlotError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }

    /// The status the slot reported when the operation was rejected, if the
    /// error is a capacity/status rejection.
    pub fn rejected_status(&self) -> Option<SlotStatus> {
        match self {
            SlotError::Full { .. } => Some(SlotStatus::Full),
            SlotError::Closed { .. } => Some(SlotStatus::Closed),
            _ => None,
        }
    }
}

impl std::fmt::Display for SlotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for SlotError {}

impl From<SlotError> for DomainError {
    fn from(err: SlotError) -> Self {
        let mut domain = DomainError::new(err.code(), err.message());
        if let SlotError::Full { available, .. } = &err {
            domain = domain.with_detail("available", available.to_string());
        }
        domain
    }
}

impl From<DomainError> for SlotError {
    fn from(err: DomainError) -> Self {
        SlotError::Infrastructure(err.to_string())
    }
}
