//! SlotStore - the single writer of the slot collection
//!
//! Every mutation looks the slot up first, builds the replacement state and
//! only then swaps it in, so a failed operation leaves the collection as it
//! was. Slot order (layout order by id) never changes.
//!
//! ```text
//! available ──assign/mark_busy──▶ busy ──free──▶ available
//! booked ────────mark_busy──────▶ busy
//! ```

use shared::models::{Booking, Slot, SlotState, SlotStatus};

use super::error::{StoreError, StoreResult};
use super::generator::SlotGenerator;
use crate::dashboard::OccupancySummary;

#[derive(Debug, Clone)]
pub struct SlotStore {
    slots: Vec<Slot>,
}

impl SlotStore {
    pub fn new(slots: Vec<Slot>) -> Self {
        Self { slots }
    }

    pub fn generate(generator: &mut impl SlotGenerator) -> Self {
        let store = Self::new(generator.generate());
        tracing::info!(slots = store.len(), "Slot store initialized");
        store
    }

    /// Read-only view of all slots in layout order
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Slot> {
        self.slots.iter().find(|s| s.id == id)
    }

    pub fn counts(&self) -> OccupancySummary {
        OccupancySummary::from_slots(&self.slots)
    }

    /// Park a vehicle: any status becomes busy with the given booking
    pub fn assign(
        &mut self,
        id: &str,
        plate: impl Into<String>,
        entry: impl Into<String>,
    ) -> StoreResult<&Slot> {
        let index = self.index_of(id)?;
        let booking = Booking::new(plate, entry);
        Ok(self.replace(index, SlotState::Busy(booking)))
    }

    /// Release a slot: any status becomes available, booking cleared
    pub fn free(&mut self, id: &str) -> StoreResult<&Slot> {
        let index = self.index_of(id)?;
        Ok(self.replace(index, SlotState::Available))
    }

    /// Move an available or booked slot to busy
    ///
    /// From `booked` the entry time is kept and the plate is overwritten
    /// when one is supplied. From `available` both plate and entry must be
    /// given since there is no booking to inherit.
    pub fn mark_busy(
        &mut self,
        id: &str,
        plate: Option<String>,
        entry: Option<String>,
    ) -> StoreResult<&Slot> {
        let index = self.index_of(id)?;
        let next = match &self.slots[index].state {
            SlotState::Available => match (plate, entry) {
                (Some(plate), Some(entry)) => Booking::new(plate, entry),
                _ => return Err(StoreError::MissingBooking(id.to_string())),
            },
            SlotState::Booked(current) => Booking {
                plate: plate.unwrap_or_else(|| current.plate.clone()),
                entry: current.entry.clone(),
            },
            SlotState::Busy(_) => {
                return Err(StoreError::InvalidTransition {
                    id: id.to_string(),
                    from: SlotStatus::Busy,
                    to: SlotStatus::Busy,
                });
            }
        };
        Ok(self.replace(index, SlotState::Busy(next)))
    }

    fn index_of(&self, id: &str) -> StoreResult<usize> {
        self.slots
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| StoreError::SlotNotFound(id.to_string()))
    }

    fn replace(&mut self, index: usize, state: SlotState) -> &Slot {
        let slot = &mut self.slots[index];
        let from = slot.status();
        slot.state = state;
        tracing::info!(
            slot = %slot.id,
            from = %from,
            to = %slot.status(),
            "Slot transitioned"
        );
        slot
    }
}
