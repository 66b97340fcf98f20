//! CancelJoinRequestHandler - Requester withdrawal of a pending request.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::{
    EventId, JoinRequestId, SerializableDomainEvent, Timestamp, UserId,
};
use crate::domain::join_request::{JoinRequest, JoinRequestError, JoinRequestEvent};
use crate::ports::{JoinRequestStore, NotificationDispatcher};

/// Command to withdraw a pending join request.
#[derive(Debug, Clone)]
pub struct CancelJoinRequestCommand {
    pub request_id: JoinRequestId,
    pub acting_user_id: UserId,
}

/// Result of a successful cancellation.
#[derive(Debug, Clone)]
pub struct CancelJoinRequestResult {
    pub request: JoinRequest,
}

/// Handler for cancelling join requests.
///
/// Only the original requester may cancel, and only while the request is
/// still Pending. A cancel racing an in-flight approval loses cleanly: both
/// transitions are guarded by the Pending precondition, so whichever commits
/// second fails `AlreadyResolved`.
pub struct CancelJoinRequestHandler {
    request_store: Arc<dyn JoinRequestStore>,
    dispatcher: Arc<dyn NotificationDispatcher>,
}

impl CancelJoinRequestHandler {
    pub fn new(
        request_store: Arc<dyn JoinRequestStore>,
        dispatcher: Arc<dyn NotificationDispatcher>,
    ) -> Self {
        Self {
            request_store,
            dispatcher,
        }
    }

    pub async fn handle(
        &self,
        cmd: CancelJoinRequestCommand,
    ) -> Result<CancelJoinRequestResult, JoinRequestError> {
        let mut request = self
            .request_store
            .get(&cmd.request_id)
            .await?
            .ok_or_else(|| JoinRequestError::not_found(cmd.request_id))?;

        if request.requester_id != cmd.acting_user_id {
            return Err(JoinRequestError::not_authorized());
        }

        request.cancel()?;
        self.request_store.update(&request).await?;

        info!(request_id = %request.id, "join request cancelled by requester");

        let event = JoinRequestEvent::Cancelled {
            event_id: EventId::new(),
            request_id: request.id,
            slot_id: request.slot_id,
            occurred_at: Timestamp::now(),
        };
        self.dispatcher
            .dispatch(event.to_envelope())
            .await
            .map_err(|e| JoinRequestError::infrastructure(e.to_string()))?;

        Ok(CancelJoinRequestResult { request })
    }
}
