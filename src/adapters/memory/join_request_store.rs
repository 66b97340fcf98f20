//! In-memory join request store.
//!
//! The pending-uniqueness invariant (at most one Pending request per
//! slot/booking pair) is enforced under the store's own lock, so concurrent
//! duplicate submissions cannot both insert.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::foundation::{BookingId, JoinRequestId, SlotId};
use crate::domain::join_request::{JoinRequest, JoinRequestError};
use crate::ports::JoinRequestStore;

/// In-memory `JoinRequestStore`.
pub struct InMemoryJoinRequestStore {
    requests: Mutex<HashMap<JoinRequestId, JoinRequest>>,
}

impl InMemoryJoinRequestStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            requests: Mutex::new(HashMap::new()),
        }
    }

    /// Number of stored requests (test helper).
    pub fn request_count(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<JoinRequestId, JoinRequest>> {
        self.requests
            .lock()
            .expect("InMemoryJoinRequestStore: lock poisoned")
    }
}

impl Default for InMemoryJoinRequestStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl JoinRequestStore for InMemoryJoinRequestStore {
    async fn insert_pending(&self, request: &JoinRequest) -> Result<(), JoinRequestError> {
        let mut requests = self.lock();
        let duplicate = requests.values().any(|existing| {
            existing.slot_id == request.slot_id
                && existing.booking_id == request.booking_id
                && existing.status.is_pending()
        });
        if duplicate {
            return Err(JoinRequestError::duplicate_pending(
                request.slot_id,
                request.booking_id,
            ));
        }
        requests.insert(request.id, request.clone());
        Ok(())
    }

    async fn get(&self, id: &JoinRequestId) -> Result<Option<JoinRequest>, JoinRequestError> {
        Ok(self.lock().get(id).cloned())
    }

    async fn update(&self, request: &JoinRequest) -> Result<(), JoinRequestError> {
        let mut requests = self.lock();
        if !requests.contains_key(&request.id) {
            return Err(JoinRequestError::not_found(request.id));
        }
        requests.insert(request.id, request.clone());
        Ok(())
    }

    async fn list_pending_for_slot(
        &self,
        slot_id: &SlotId,
    ) -> Result<Vec<JoinRequest>, JoinRequestError> {
        let mut pending: Vec<JoinRequest> = self
            .lock()
            .values()
            .filter(|r| &r.slot_id == slot_id && r.status.is_pending())
            .cloned()
            .collect();
        pending.sort_by_key(|r| r.created_at);
        Ok(pending)
    }

    async fn find_pending(
        &self,
        slot_id: &SlotId,
        booking_id: &BookingId,
    ) -> Result<Option<JoinRequest>, JoinRequestError> {
        Ok(self
            .lock()
            .values()
            .find(|r| {
                &r.slot_id == slot_id && &r.booking_id == booking_id && r.status.is_pending()
            })
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::UserId;
    use crate::domain::join_request::JoinRequestStatus;

    fn pending(slot_id: SlotId, booking_id: BookingId) -> JoinRequest {
        JoinRequest::submit(
            JoinRequestId::new(),
            slot_id,
            booking_id,
            UserId::new("traveler-1").unwrap(),
            2,
            None,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn insert_and_get_roundtrip() {
        let store = InMemoryJoinRequestStore::new();
        let request = pending(SlotId::new(), BookingId::new());
        store.insert_pending(&request).await.unwrap();

        let loaded = store.get(&request.id).await.unwrap();
        assert_eq!(loaded, Some(request));
    }

    #[tokio::test]
    async fn second_pending_for_same_pair_is_rejected() {
        let store = InMemoryJoinRequestStore::new();
        let slot_id = SlotId::new();
        let booking_id = BookingId::new();

        store
            .insert_pending(&pending(slot_id, booking_id))
            .await
            .unwrap();
        let result = store.insert_pending(&pending(slot_id, booking_id)).await;
        assert!(matches!(
            result,
            Err(JoinRequestError::DuplicatePending { .. })
        ));
        assert_eq!(store.request_count(), 1);
    }

    #[tokio::test]
    async fn resolved_request_frees_the_pair() {
        let store = InMemoryJoinRequestStore::new();
        let slot_id = SlotId::new();
        let booking_id = BookingId::new();

        let mut first = pending(slot_id, booking_id);
        store.insert_pending(&first).await.unwrap();
        first.cancel().unwrap();
        store.update(&first).await.unwrap();

        store
            .insert_pending(&pending(slot_id, booking_id))
            .await
            .unwrap();
        assert_eq!(store.request_count(), 2);
    }

    #[tokio::test]
    async fn update_unknown_request_fails() {
        let store = InMemoryJoinRequestStore::new();
        let request = pending(SlotId::new(), BookingId::new());
        let result = store.update(&request).await;
        assert!(matches!(result, Err(JoinRequestError::NotFound(_))));
    }

    #[tokio::test]
    async fn list_pending_excludes_resolved() {
        let store = InMemoryJoinRequestStore::new();
        let slot_id = SlotId::new();

        let keep = pending(slot_id, BookingId::new());
        store.insert_pending(&keep).await.unwrap();

        let mut resolved = pending(slot_id, BookingId::new());
        store.insert_pending(&resolved).await.unwrap();
        resolved.decline(None).unwrap();
        store.update(&resolved).await.unwrap();

        let listed = store.list_pending_for_slot(&slot_id).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, keep.id);
        assert_eq!(listed[0].status, JoinRequestStatus::Pending);
    }

    #[tokio::test]
    async fn concurrent_duplicate_submissions_admit_exactly_one() {
        use futures::future::join_all;
        use std::sync::Arc;

        let store = Arc::new(InMemoryJoinRequestStore::new());
        let slot_id = SlotId::new();
        let booking_id = BookingId::new();

        let attempts: Vec<_> = (0..8)
            .map(|_| {
                let store = store.clone();
                tokio::spawn(async move {
                    store.insert_pending(&pending(slot_id, booking_id)).await
                })
            })
            .collect();

        let results: Vec<_> = join_all(attempts)
            .await
            .into_iter()
            .map(|r| r.unwrap())
            .collect();
        let successes = results.iter().filter(|r| r.is_ok()).count();
        assert_eq!(successes, 1);
        assert_eq!(store.request_count(), 1);
    }
}
