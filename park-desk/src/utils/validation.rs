//! Input validation helpers
//!
//! Centralized text length constants and validation functions for operator
//! input (report form, plates).

use shared::error::{AppError, AppResult};

// ── Text length limits ──────────────────────────────────────────────

/// Report subject line
pub const MAX_SUBJECT_LEN: usize = 200;

/// Report body
pub const MAX_MESSAGE_LEN: usize = 2000;

/// Vehicle plates (`59A-123.45` and similar)
pub const MAX_PLATE_LEN: usize = 20;

/// Attachment file names
pub const MAX_FILE_NAME_LEN: usize = 255;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
///
/// The offending field name is attached as the `field` detail.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(
            AppError::validation(format!("{field} must not be empty")).with_detail("field", field)
        );
    }
    let len = value.chars().count();
    if len > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({len} chars, max {max_len})"
        ))
        .with_detail("field", field));
    }
    Ok(())
}
