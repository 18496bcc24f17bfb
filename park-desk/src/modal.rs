//! Slot modal - which slot is under review and what the operator may do
//!
//! ```text
//!            click(free slot)              click(occupied slot)
//! Closed ───────────────────▶ AssignPrompt   Closed ──────▶ InfoPrompt
//!   ▲                              │                           │
//!   └──── confirm / cancel ────────┴───── confirm / cancel ────┘
//! ```
//!
//! The confirm action is chosen from the slot's status at confirm time:
//! available → busy, booked → busy (entry kept), busy → available.

use shared::error::AppResult;
use shared::models::{Slot, SlotStatus};

use crate::slots::{DEMO_BUSY_PLATE, DEMO_ENTRY, SlotStore, StoreError};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Modal {
    #[default]
    Closed,
    AssignPrompt(String),
    InfoPrompt(String),
}

impl Modal {
    pub fn slot_id(&self) -> Option<&str> {
        match self {
            Self::Closed => None,
            Self::AssignPrompt(id) | Self::InfoPrompt(id) => Some(id),
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }
}

/// Confirm button offered for a slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalAction {
    /// Available slot: put a car in it
    SetBusy,
    /// Booked slot: the reserved car arrived
    TransitionToBusy,
    /// Busy slot: the car left
    ReturnSlot,
}

impl ModalAction {
    pub fn for_status(status: SlotStatus) -> Self {
        match status {
            SlotStatus::Available => Self::SetBusy,
            SlotStatus::Booked => Self::TransitionToBusy,
            SlotStatus::Busy => Self::ReturnSlot,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::SetBusy => "Đang dùng",
            Self::TransitionToBusy => "Chuyển sang đang dùng",
            Self::ReturnSlot => "Trả chỗ",
        }
    }
}

/// Owns the single modal selection
#[derive(Debug, Clone, Default)]
pub struct Interaction {
    modal: Modal,
}

impl Interaction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    /// Open the prompt matching the slot's occupancy, replacing any open one
    pub fn click(&mut self, store: &SlotStore, id: &str) -> AppResult<&Modal> {
        let slot = store
            .get(id)
            .ok_or_else(|| StoreError::SlotNotFound(id.to_string()))?;

        self.modal = if slot.occupied() {
            Modal::InfoPrompt(slot.id.clone())
        } else {
            Modal::AssignPrompt(slot.id.clone())
        };
        tracing::debug!(slot = %id, modal = ?self.modal, "Modal opened");
        Ok(&self.modal)
    }

    /// Action the open prompt would perform right now
    pub fn offered_action(&self, store: &SlotStore) -> Option<ModalAction> {
        let id = self.modal.slot_id()?;
        store.get(id).map(|s| ModalAction::for_status(s.status()))
    }

    /// Apply the offered action and close; no-op when nothing is open
    ///
    /// The modal closes even when the store rejects the action, and the
    /// store is left untouched in that case.
    pub fn confirm(&mut self, store: &mut SlotStore) -> AppResult<Option<Slot>> {
        let Some(id) = std::mem::take(&mut self.modal).slot_id().map(str::to_string) else {
            return Ok(None);
        };

        let status = store
            .get(&id)
            .map(|s| s.status())
            .ok_or_else(|| StoreError::SlotNotFound(id.clone()))?;

        let slot = match ModalAction::for_status(status) {
            ModalAction::SetBusy => store.mark_busy(
                &id,
                Some(DEMO_BUSY_PLATE.to_string()),
                Some(DEMO_ENTRY.to_string()),
            )?,
            ModalAction::TransitionToBusy => {
                store.mark_busy(&id, Some(DEMO_BUSY_PLATE.to_string()), None)?
            }
            ModalAction::ReturnSlot => store.free(&id)?,
        };
        Ok(Some(slot.clone()))
    }

    /// Close without touching the store
    pub fn cancel(&mut self) {
        self.modal = Modal::Closed;
    }
}
