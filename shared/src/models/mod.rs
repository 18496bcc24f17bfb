//! Data models
//!
//! Shared between the desk engine and the console. All models are plain
//! in-memory values; nothing here is persisted.

pub mod lot;
pub mod payment;
pub mod report;
pub mod slot;

// Re-exports
pub use lot::*;
pub use payment::*;
pub use report::*;
pub use slot::*;
