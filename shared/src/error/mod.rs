//! Unified error system for the parking desk
//!
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Rich error type with codes, messages, and details
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 5xxx: Payment errors
//! - 7xxx: Slot errors
//! - 8xxx: Report errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::new(ErrorCode::SlotNotFound);
//! assert_eq!(err.code.code(), 7001);
//!
//! let err = AppError::validation("Subject must not be empty")
//!     .with_detail("field", "subject");
//! assert_eq!(err.detail("field").unwrap(), "subject");
//! ```

mod category;
mod codes;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult};
