//! Unified error codes for the parking desk
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 5xxx: Payment errors
//! - 7xxx: Slot errors
//! - 8xxx: Report errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Unified error code enum
///
/// All error codes are represented as u16 values so they serialize as plain
/// numbers in `/dump` output and log fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Validation failed
    ValidationFailed = 1,
    /// Invalid request
    InvalidRequest = 2,
    /// Invalid format
    InvalidFormat = 3,

    // ==================== 5xxx: Payment ====================
    /// Unknown payment status filter
    InvalidPaymentStatus = 5001,
    /// Date bound is not an ISO date
    InvalidDateBound = 5002,

    // ==================== 7xxx: Slot ====================
    /// Slot not found
    SlotNotFound = 7001,
    /// Slot has no booking to transition
    SlotMissingBooking = 7002,
    /// Transition not allowed from the slot's current status
    InvalidSlotTransition = 7003,

    // ==================== 8xxx: Report ====================
    /// Report was already submitted
    ReportAlreadySent = 8001,
    /// Unknown report category
    InvalidReportCategory = 8002,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",

            // Payment
            ErrorCode::InvalidPaymentStatus => "Unknown payment status",
            ErrorCode::InvalidDateBound => "Date must be formatted as YYYY-MM-DD",

            // Slot
            ErrorCode::SlotNotFound => "Slot not found",
            ErrorCode::SlotMissingBooking => "Plate and entry time are required",
            ErrorCode::InvalidSlotTransition => "Slot cannot make this transition",

            // Report
            ErrorCode::ReportAlreadySent => "Report has already been sent",
            ErrorCode::InvalidReportCategory => "Unknown report category",

            // System
            ErrorCode::InternalError => "Internal error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid error code: {0}")]
pub struct InvalidErrorCode(pub u16);

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            1 => Ok(ErrorCode::ValidationFailed),
            2 => Ok(ErrorCode::InvalidRequest),
            3 => Ok(ErrorCode::InvalidFormat),

            // Payment
            5001 => Ok(ErrorCode::InvalidPaymentStatus),
            5002 => Ok(ErrorCode::InvalidDateBound),

            // Slot
            7001 => Ok(ErrorCode::SlotNotFound),
            7002 => Ok(ErrorCode::SlotMissingBooking),
            7003 => Ok(ErrorCode::InvalidSlotTransition),

            // Report
            8001 => Ok(ErrorCode::ReportAlreadySent),
            8002 => Ok(ErrorCode::InvalidReportCategory),

            // System
            9001 => Ok(ErrorCode::InternalError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
