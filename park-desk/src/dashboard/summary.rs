//! Occupancy summary and donut chart shares

use serde::Serialize;
use shared::models::{Slot, SlotStatus};

/// Circumference of the donut ring (r = 75)
pub const DONUT_CIRCUMFERENCE: f64 = 471.0;

/// Stat cards on the dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OccupancySummary {
    pub total: usize,
    pub available: usize,
    pub busy: usize,
    pub booked: usize,
}

impl OccupancySummary {
    pub fn from_slots(slots: &[Slot]) -> Self {
        let mut summary = Self {
            total: slots.len(),
            ..Default::default()
        };
        for slot in slots {
            match slot.status() {
                SlotStatus::Available => summary.available += 1,
                SlotStatus::Busy => summary.busy += 1,
                SlotStatus::Booked => summary.booked += 1,
            }
        }
        summary
    }

    /// Busy plus booked
    pub fn occupied(&self) -> usize {
        self.busy + self.booked
    }

    pub fn donut(&self) -> Donut {
        Donut::new(self.available, self.occupied())
    }
}

/// Two-segment donut: available vs occupied
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Donut {
    /// Percent of slots available, 0..=100
    pub available_share: f64,
    /// Percent of slots busy or booked, 0..=100
    pub occupied_share: f64,
    pub available_arc: f64,
    pub occupied_arc: f64,
    /// The occupied segment starts where the available one ends
    pub occupied_offset: f64,
}

impl Donut {
    pub fn new(available: usize, occupied: usize) -> Self {
        let total = available + occupied;
        let share = |n: usize| {
            if total == 0 {
                0.0
            } else {
                n as f64 / total as f64 * 100.0
            }
        };
        let available_share = share(available);
        let occupied_share = share(occupied);
        let available_arc = available_share / 100.0 * DONUT_CIRCUMFERENCE;

        Self {
            available_share,
            occupied_share,
            available_arc,
            occupied_arc: occupied_share / 100.0 * DONUT_CIRCUMFERENCE,
            occupied_offset: available_arc,
        }
    }

    /// Centre label, e.g. `63%`
    pub fn available_percent(&self) -> u32 {
        self.available_share.round() as u32
    }
}
