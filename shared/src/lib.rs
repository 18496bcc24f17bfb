//! Shared types for the parking desk
//!
//! Models (slots, payments, reports, lot profile), the unified error system
//! and the pagination response used by derived views.

pub mod error;
pub mod models;
pub mod pagination;

// Re-exports
pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use pagination::PaginatedResponse;
pub use serde::{Deserialize, Serialize};
