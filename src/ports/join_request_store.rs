//! JoinRequestStore port - persistence for join requests.

use async_trait::async_trait;

use crate::domain::foundation::{BookingId, JoinRequestId, SlotId};
use crate::domain::join_request::{JoinRequest, JoinRequestError};

/// Port for storing and querying join requests.
///
/// Implementations must enforce, atomically with the insert, that at most
/// one Pending request exists per `(slot_id, booking_id)` pair: a second
/// concurrent submission for the same pair must fail `DuplicatePending`.
#[async_trait]
pub trait JoinRequestStore: Send + Sync {
    /// Inserts a new Pending request.
    ///
    /// # Errors
    ///
    /// Returns `DuplicatePending` if a Pending request for the same slot and
    /// booking already exists.
    async fn insert_pending(&self, request: &JoinRequest) -> Result<(), JoinRequestError>;

    /// Loads a request by id.
    async fn get(&self, id: &JoinRequestId) -> Result<Option<JoinRequest>, JoinRequestError>;

    /// Persists a resolved or otherwise mutated request.
    async fn update(&self, request: &JoinRequest) -> Result<(), JoinRequestError>;

    /// All Pending requests for a slot (the creator's inbox).
    async fn list_pending_for_slot(
        &self,
        slot_id: &SlotId,
    ) -> Result<Vec<JoinRequest>, JoinRequestError>;

    /// The Pending request for a slot/booking pair, if one exists.
    async fn find_pending(
        &self,
        slot_id: &SlotId,
        booking_id: &BookingId,
    ) -> Result<Option<JoinRequest>, JoinRequestError>;
}
