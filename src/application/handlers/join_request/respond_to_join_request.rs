//! RespondToJoinRequestHandler - Creator approval and decline.
//!
//! Approval re-validates capacity at decision time through the registry's
//! atomic admit, not against the submission-time snapshot. When the seats
//! were consumed in the interim (or the slot closed), the request is
//! converted to Declined with a recorded reason rather than surfacing an
//! error: from the requester's point of view "too slow" is a normal outcome,
//! not a fault.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::foundation::{
    EventId, JoinRequestId, SerializableDomainEvent, Timestamp, UserId,
};
use crate::domain::join_request::{
    JoinRequest, JoinRequestError, JoinRequestEvent, DECLINE_REASON_CAPACITY_EXHAUSTED,
    DECLINE_REASON_SLOT_CLOSED,
};
use crate::domain::slot::{Slot, SlotError, SlotEvent};
use crate::ports::{BookingStore, JoinRequestStore, NotificationDispatcher, SlotRegistry};

/// The creator's decision on a pending request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinRequestDecision {
    Approve,
    Decline,
}

/// Command to resolve a pending join request.
#[derive(Debug, Clone)]
pub struct RespondToJoinRequestCommand {
    pub request_id: JoinRequestId,
    pub acting_user_id: UserId,
    pub decision: JoinRequestDecision,
    /// Optional note to the requester; recorded as the decline reason.
    pub message: Option<String>,
}

/// Result of resolving a request.
///
/// An Approve command may legitimately resolve to a Declined request when
/// capacity ran out before the creator decided; inspect `request.status`.
#[derive(Debug, Clone)]
pub struct RespondToJoinRequestResult {
    pub request: JoinRequest,
    /// Authoritative slot state after the resolution.
    pub slot: Slot,
}

/// Handler for creator responses to join requests.
pub struct RespondToJoinRequestHandler {
    slot_registry: Arc<dyn SlotRegistry>,
    request_store: Arc<dyn JoinRequestStore>,
    booking_store: Arc<dyn BookingStore>,
    dispatcher: Arc<dyn NotificationDispatcher>,
}

impl RespondToJoinRequestHandler {
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
        cmd: RespondToJoinRequestCommand,
    ) -> Result<RespondToJoinRequestResult, JoinRequestError> {
        // 1. Load and guard: only the slot creator resolves, only once.
        let mut request = self
            .request_store
            .get(&cmd.request_id)
            .await?
            .ok_or_else(|| JoinRequestError::not_found(cmd.request_id))?;
        let slot = self.slot_registry.get(&request.slot_id).await?;

        if slot.creator_id != cmd.acting_user_id {
            return Err(JoinRequestError::not_authorized());
        }
        if request.status.is_resolved() {
            return Err(JoinRequestError::already_resolved(request.id, request.status));
        }

        match cmd.decision {
            JoinRequestDecision::Decline => {
                self.decline(&mut request, cmd.message, slot).await
            }
            JoinRequestDecision::Approve => self.approve(&mut request).await,
        }
    }

    async fn decline(
        &self,
        request: &mut JoinRequest,
        reason: Option<String>,
        slot: Slot,
    ) -> Result<RespondToJoinRequestResult, JoinRequestError> {
        request.decline(reason.clone())?;
        self.request_store.update(request).await?;

        info!(request_id = %request.id, "join request declined by creator");

        self.dispatch_declined(request, reason).await?;
        Ok(RespondToJoinRequestResult {
            request: request.clone(),
            slot,
        })
    }

    async fn approve(
        &self,
        request: &mut JoinRequest,
    ) -> Result<RespondToJoinRequestResult, JoinRequestError> {
        // Capacity is re-validated here, atomically, against current state.
        let admitted = self
            .slot_registry
            .admit_booking(&request.slot_id, request.booking_id, request.guest_count)
            .await;

        match admitted {
            Ok(slot) => {
                self.booking_store
                    .attach_slot(&request.booking_id, &slot.id)
                    .await
                    .map_err(|e| JoinRequestError::infrastructure(e.to_string()))?;
                request.approve()?;
                self.request_store.update(request).await?;

                info!(
                    request_id = %request.id,
                    slot_id = %slot.id,
                    available = slot.available_capacity(),
                    "join request approved"
                );

                let mut events = vec![JoinRequestEvent::Approved {
                    event_id: EventId::new(),
                    request_id: request.id,
                    requester_id: request.requester_id.clone(),
                    slot_id: slot.id,
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
                    .map_err(|e| JoinRequestError::infrastructure(e.to_string()))?;

                Ok(RespondToJoinRequestResult {
                    request: request.clone(),
                    slot,
                })
            }
            // The race was lost while the request waited: seats were consumed
            // by another approval, or the slot closed. Convert to a terminal
            // Declined instead of erroring at the creator.
            Err(SlotError::Full { .. }) => {
                self.auto_decline(request, DECLINE_REASON_CAPACITY_EXHAUSTED)
                    .await
            }
            Err(SlotError::Closed { .. }) => {
                self.auto_decline(request, DECLINE_REASON_SLOT_CLOSED).await
            }
            Err(other) => Err(other.into()),
        }
    }

    async fn auto_decline(
        &self,
        request: &mut JoinRequest,
        reason: &str,
    ) -> Result<RespondToJoinRequestResult, JoinRequestError> {
        warn!(
            request_id = %request.id,
            slot_id = %request.slot_id,
            reason,
            "approval overtaken; auto-declining join request"
        );

        request.decline(Some(reason.to_string()))?;
        self.request_store.update(request).await?;
        self.dispatch_declined(request, Some(reason.to_string()))
            .await?;

        let slot = self.slot_registry.get(&request.slot_id).await?;
        Ok(RespondToJoinRequestResult {
            request: request.clone(),
            slot,
        })
    }

    async fn dispatch_declined(
        &self,
        request: &JoinRequest,
        reason: Option<String>,
    ) -> Result<(), JoinRequestError> {
        let event = JoinRequestEvent::Declined {
            event_id: EventId::new(),
            request_id: request.id,
            requester_id: request.requester_id.clone(),
            slot_id: request.slot_id,
            reason,
            occurred_at: Timestamp::now(),
        };
        self.dispatcher
            .dispatch(event.to_envelope())
            .await
            .map_err(|e| JoinRequestError::infrastructure(e.to_string()))
    }
}
