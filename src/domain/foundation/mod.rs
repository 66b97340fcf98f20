//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, event infrastructure, and error types
//! that form the vocabulary of the trip-pool domain.

mod errors;
mod events;
mod ids;
mod state_machine;
mod timestamp;
mod trip_date;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use events::{
    DomainEvent, EventEnvelope, EventId, EventMetadata, SerializableDomainEvent,
};
pub use ids::{BookingId, DestinationId, JoinRequestId, PackageId, SlotId, UserId};
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
pub use trip_date::TripDate;
