//! JoinRequest aggregate entity.
//!
//! Represents one traveler's attempt to attach their existing booking to an
//! existing slot. The aggregate owns only the request's own state machine;
//! capacity checks against the slot happen in the workflow handlers, because
//! capacity is re-validated at approval time rather than submission time.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    BookingId, JoinRequestId, SlotId, StateMachine, Timestamp, UserId,
};

use super::{JoinRequestError, JoinRequestStatus};

/// Reason recorded when a request is declined without the creator saying no.
pub const DECLINE_REASON_CAPACITY_EXHAUSTED: &str = "capacity exhausted";

/// Reason recorded when the slot closed between submission and approval.
pub const DECLINE_REASON_SLOT_CLOSED: &str = "slot closed";

/// JoinRequest aggregate.
///
/// # Invariants
///
/// - At most one Pending request exists per `(slot_id, booking_id)` pair;
///   enforced by the store at insertion.
/// - Status only moves Pending -> {Approved, Declined, Cancelled} and never
///   leaves a terminal state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinRequest {
    /// Unique identifier.
    pub id: JoinRequestId,

    /// Slot the requester wants to join.
    pub slot_id: SlotId,

    /// The requester's existing booking.
    pub booking_id: BookingId,

    /// Traveler who filed the request; the only actor who may cancel it.
    pub requester_id: UserId,

    /// Seats the booking would occupy.
    pub guest_count: u32,

    /// Current workflow status.
    pub status: JoinRequestStatus,

    /// Optional message from the requester to the creator.
    pub message: Option<String>,

    /// Reason recorded on decline (creator-supplied or automatic).
    pub decline_reason: Option<String>,

    /// When the request was filed.
    pub created_at: Timestamp,

    /// When the request reached a terminal state.
    pub responded_at: Option<Timestamp>,
}

impl JoinRequest {
    /// Creates a new Pending request.
    ///
    /// # Errors
    ///
    /// Returns `ValidationFailed` if `guest_count` is zero.
    pub fn submit(
        id: JoinRequestId,
        slot_id: SlotId,
        booking_id: BookingId,
        requester_id: UserId,
        guest_count: u32,
        message: Option<String>,
    ) -> Result<Self, JoinRequestError> {
        if guest_count == 0 {
            return Err(JoinRequestError::validation(
                "guest_count",
                "join request must cover at least one guest",
            ));
        }
        Ok(Self {
            id,
            slot_id,
            booking_id,
            requester_id,
            guest_count,
            status: JoinRequestStatus::Pending,
            message,
            decline_reason: None,
            created_at: Timestamp::now(),
            responded_at: None,
        })
    }

    /// Marks the request approved.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyResolved` if the request is not Pending.
    pub fn approve(&mut self) -> Result<(), JoinRequestError> {
        self.transition(JoinRequestStatus::Approved)?;
        self.responded_at = Some(Timestamp::now());
        Ok(())
    }

    /// Marks the request declined, recording a reason when one is given.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyResolved` if the request is not Pending.
    pub fn decline(&mut self, reason: Option<String>) -> Result<(), JoinRequestError> {
        self.transition(JoinRequestStatus::Declined)?;
        self.decline_reason = reason;
        self.responded_at = Some(Timestamp::now());
        Ok(())
    }

    /// Marks the request cancelled by its requester.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyResolved` if the request is not Pending.
    pub fn cancel(&mut self) -> Result<(), JoinRequestError> {
        self.transition(JoinRequestStatus::Cancelled)?;
        self.responded_at = Some(Timestamp::now());
        Ok(())
    }

    fn transition(&mut self, target: JoinRequestStatus) -> Result<(), JoinRequestError> {
        self.status = self
            .status
            .transition_to(target)
            .map_err(|_| JoinRequestError::already_resolved(self.id, self.status))?;
        Ok(())
    }
}
