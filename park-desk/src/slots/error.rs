use shared::error::{AppError, ErrorCode};
use shared::models::SlotStatus;
use thiserror::Error;

/// Slot store errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Slot not found: {0}")]
    SlotNotFound(String),

    #[error("Slot {0} needs a plate and an entry time to become busy")]
    MissingBooking(String),

    #[error("Slot {id} cannot go from {from} to {to}")]
    InvalidTransition {
        id: String,
        from: SlotStatus,
        to: SlotStatus,
    },
}

pub type StoreResult<T> = Result<T, StoreError>;

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        let message = err.to_string();
        match err {
            StoreError::SlotNotFound(id) => AppError::slot_not_found(id),
            StoreError::MissingBooking(id) => {
                AppError::with_message(ErrorCode::SlotMissingBooking, message)
                    .with_detail("slot_id", id)
            }
            StoreError::InvalidTransition { id, from, to } => {
                AppError::with_message(ErrorCode::InvalidSlotTransition, message)
                    .with_detail("slot_id", id)
                    .with_detail("from", from.as_str())
                    .with_detail("to", to.as_str())
            }
        }
    }
}
