//! In-memory slot registry.
//!
//! The production-shaped implementation of the capacity authority for this
//! service: all slot state lives in process memory and every
//! capacity-affecting mutation is serialized through the owning slot's
//! mutex. The registry-wide lock additionally makes the duplicate check and
//! insert of `create` a single atomic step.
//!
//! Lock ordering: the registry map lock is always taken before a slot mutex,
//! and no lock is held across an await point.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

use async_trait::async_trait;

use crate::domain::foundation::{BookingId, DestinationId, PackageId, SlotId, TripDate};
use crate::domain::slot::{Slot, SlotError, SlotStatus};
use crate::ports::{NewSlot, SlotRegistry};

/// Natural key of a slot: one open group per package/destination/day.
type SlotKey = (PackageId, DestinationId, TripDate);

struct RegistryInner {
    by_id: HashMap<SlotId, Arc<Mutex<Slot>>>,
    /// Latest slot opened for each natural key. May point at a slot that has
    /// since filled or closed; `create` treats those as no bar to a fresh
    /// group.
    by_key: HashMap<SlotKey, SlotId>,
}

/// In-memory `SlotRegistry` with per-slot mutual exclusion.
pub struct InMemorySlotRegistry {
    inner: RwLock<RegistryInner>,
}

impl InMemorySlotRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(RegistryInner {
                by_id: HashMap::new(),
                by_key: HashMap::new(),
            }),
        }
    }

    /// Number of slots ever registered (test helper).
    pub fn slot_count(&self) -> usize {
        self.read_inner().by_id.len()
    }

    fn read_inner(&self) -> std::sync::RwLockReadGuard<'_, RegistryInner> {
        self.inner
            .read()
            .expect("InMemorySlotRegistry: lock poisoned")
    }

    fn write_inner(&self) -> std::sync::RwLockWriteGuard<'_, RegistryInner> {
        self.inner
            .write()
            .expect("InMemorySlotRegistry: lock poisoned")
    }

    fn slot_cell(&self, slot_id: &SlotId) -> Result<Arc<Mutex<Slot>>, SlotError> {
        self.read_inner()
            .by_id
            .get(slot_id)
            .cloned()
            .ok_or(SlotError::NotFound(*slot_id))
    }

    fn lock_slot(cell: &Arc<Mutex<Slot>>) -> std::sync::MutexGuard<'_, Slot> {
        cell.lock().expect("InMemorySlotRegistry: slot lock poisoned")
    }
}

impl Default for InMemorySlotRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SlotRegistry for InMemorySlotRegistry {
    async fn find_open_slot(
        &self,
        package_id: &PackageId,
        destination_id: &DestinationId,
        trip_date: &TripDate,
    ) -> Result<Option<Slot>, SlotError> {
        let key = (package_id.clone(), destination_id.clone(), *trip_date);
        let cell = {
            let inner = self.read_inner();
            inner
                .by_key
                .get(&key)
                .and_then(|id| inner.by_id.get(id).cloned())
        };
        Ok(cell.and_then(|cell| {
            let slot = Self::lock_slot(&cell);
            (slot.status == SlotStatus::Available).then(|| slot.clone())
        }))
    }

    async fn get(&self, slot_id: &SlotId) -> Result<Slot, SlotError> {
        let cell = self.slot_cell(slot_id)?;
        let slot = Self::lock_slot(&cell);
        Ok(slot.clone())
    }

    async fn list_open(&self) -> Result<Vec<Slot>, SlotError> {
        let cells: Vec<Arc<Mutex<Slot>>> = self.read_inner().by_id.values().cloned().collect();
        Ok(cells
            .iter()
            .filter_map(|cell| {
                let slot = Self::lock_slot(cell);
                (slot.status == SlotStatus::Available).then(|| slot.clone())
            })
            .collect())
    }

    async fn create(&self, new_slot: NewSlot) -> Result<Slot, SlotError> {
        let key = (
            new_slot.package_id.clone(),
            new_slot.destination_id.clone(),
            new_slot.trip_date,
        );

        // The write lock spans the duplicate check and the insert, so two
        // concurrent creates for the same natural key cannot both pass.
        let mut inner = self.write_inner();

        if let Some(existing_id) = inner.by_key.get(&key) {
            if let Some(cell) = inner.by_id.get(existing_id) {
                let existing = Self::lock_slot(cell);
                if existing.status == SlotStatus::Available {
                    return Err(SlotError::duplicate(existing.id));
                }
            }
        }

        let slot = Slot::create(
            SlotId::new(),
            new_slot.package_id,
            new_slot.destination_id,
            new_slot.destination_name,
            new_slot.trip_date,
            new_slot.max_capacity,
            new_slot.creator_id,
            new_slot.seed_booking,
            new_slot.seed_guest_count,
        )?;

        inner.by_key.insert(key, slot.id);
        inner.by_id.insert(slot.id, Arc::new(Mutex::new(slot.clone())));
        Ok(slot)
    }

    async fn admit_booking(
        &self,
        slot_id: &SlotId,
        booking_id: BookingId,
        guest_count: u32,
    ) -> Result<Slot, SlotError> {
        let cell = self.slot_cell(slot_id)?;
        let mut slot = Self::lock_slot(&cell);
        slot.admit(booking_id, guest_count)?;
        Ok(slot.clone())
    }

    async fn remove_booking(
        &self,
        slot_id: &SlotId,
        booking_id: &BookingId,
    ) -> Result<Slot, SlotError> {
        let cell = self.slot_cell(slot_id)?;
        let mut slot = Self::lock_slot(&cell);
        slot.remove(booking_id)?;
        Ok(slot.clone())
    }

    async fn close(&self, slot_id: &SlotId) -> Result<Slot, SlotError> {
        let cell = self.slot_cell(slot_id)?;
        let mut slot = Self::lock_slot(&cell);
        slot.close();
        Ok(slot.clone())
    }
}
