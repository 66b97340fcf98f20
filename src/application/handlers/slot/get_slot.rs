//! GetSlotHandler - Query handler for authoritative slot state.

use std::sync::Arc;

use crate::domain::foundation::SlotId;
use crate::domain::slot::{Slot, SlotError};
use crate::ports::SlotRegistry;

/// Query for one slot's current state.
#[derive(Debug, Clone)]
pub struct GetSlotQuery {
    pub slot_id: SlotId,
}

/// Handler returning the authoritative capacity and status of a slot.
pub struct GetSlotHandler {
    slot_registry: Arc<dyn SlotRegistry>,
}

impl GetSlotHandler {
    pub fn new(slot_registry: Arc<dyn SlotRegistry>) -> Self {
        Self { slot_registry }
    }

    pub async fn handle(&self, query: GetSlotQuery) -> Result<Slot, SlotError> {
        self.slot_registry.get(&query.slot_id).await
    }
}
