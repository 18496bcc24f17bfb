//! 车位模块 - slot collection, its transitions and initial layout

mod error;
pub mod generator;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use generator::{FixedLayout, RandomLayout, SlotGenerator};
pub use store::SlotStore;

/// Plate used for walk-in parking confirmed from the desk
pub const DEMO_BUSY_PLATE: &str = "59A-123.45";
/// Plate attached to generated reservations
pub const DEMO_BOOKED_PLATE: &str = "51B-678.90";
/// Entry time attached to generated and desk-confirmed bookings
pub const DEMO_ENTRY: &str = "2024-06-01 09:00";
