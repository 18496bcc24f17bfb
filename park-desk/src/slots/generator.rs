//! Initial slot layout generation
//!
//! Cold start fills the lot with a random mix of statuses. Tests use a
//! seeded [`RandomLayout`] or a [`FixedLayout`] so fixtures are deterministic.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shared::models::{AREAS, Booking, Slot, slot_id};

use super::{DEMO_BOOKED_PLATE, DEMO_BUSY_PLATE, DEMO_ENTRY};

/// Share of slots generated as booked
const BOOKED_SHARE: f64 = 0.15;
/// Cumulative share of slots generated as booked or busy
const OCCUPIED_SHARE: f64 = 0.30;

/// Produces the initial slot collection, ordered by id
pub trait SlotGenerator {
    fn generate(&mut self) -> Vec<Slot>;
}

/// All slot ids in layout order (`A01..A12, B01..D12`)
pub fn layout_ids() -> impl Iterator<Item = String> {
    AREAS
        .into_iter()
        .flat_map(|(prefix, count)| (1..=count).map(move |i| slot_id(prefix, i)))
}

/// Random statuses: ~15% booked, ~15% busy, the rest available
#[derive(Debug)]
pub struct RandomLayout {
    rng: StdRng,
}

impl RandomLayout {
    /// Deterministic layout for a given seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Fresh layout on every cold start
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    fn roll(&mut self, id: String) -> Slot {
        let roll: f64 = self.rng.gen_range(0.0..1.0);
        if roll < BOOKED_SHARE {
            Slot::booked(id, Booking::new(DEMO_BOOKED_PLATE, DEMO_ENTRY))
        } else if roll < OCCUPIED_SHARE {
            Slot::busy(id, Booking::new(DEMO_BUSY_PLATE, DEMO_ENTRY))
        } else {
            Slot::available(id)
        }
    }
}

impl SlotGenerator for RandomLayout {
    fn generate(&mut self) -> Vec<Slot> {
        let slots: Vec<Slot> = layout_ids().map(|id| self.roll(id)).collect();
        tracing::debug!(count = slots.len(), "Generated random slot layout");
        slots
    }
}

/// Every slot available except the listed overrides
#[derive(Debug, Clone, Default)]
pub struct FixedLayout {
    overrides: Vec<Slot>,
}

impl FixedLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the generated slot with the same id
    pub fn with(mut self, slot: Slot) -> Self {
        self.overrides.retain(|s| s.id != slot.id);
        self.overrides.push(slot);
        self
    }
}

impl SlotGenerator for FixedLayout {
    fn generate(&mut self) -> Vec<Slot> {
        layout_ids()
            .map(|id| {
                self.overrides
                    .iter()
                    .find(|s| s.id == id)
                    .cloned()
                    .unwrap_or_else(|| Slot::available(id))
            })
            .collect()
    }
}
