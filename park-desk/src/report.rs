//! Report form - operator feedback draft and its one-way submit
//!
//! Submitting never leaves the desk: a valid draft is stamped with the
//! local time and kept as the sent report until the form is reset.

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Attachment, ReportCategory, ReportDraft, SentReport};

use crate::utils::time::now_minute;
use crate::utils::validation::{
    MAX_FILE_NAME_LEN, MAX_MESSAGE_LEN, MAX_SUBJECT_LEN, validate_required_text,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportForm {
    Editing(ReportDraft),
    Sent(SentReport),
}

impl Default for ReportForm {
    fn default() -> Self {
        Self::Editing(ReportDraft::default())
    }
}

impl ReportForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_sent(&self) -> bool {
        matches!(self, Self::Sent(_))
    }

    pub fn draft(&self) -> &ReportDraft {
        match self {
            Self::Editing(draft) => draft,
            Self::Sent(sent) => &sent.draft,
        }
    }

    fn editing(&mut self) -> AppResult<&mut ReportDraft> {
        match self {
            Self::Editing(draft) => Ok(draft),
            Self::Sent(_) => Err(AppError::new(ErrorCode::ReportAlreadySent)),
        }
    }

    pub fn set_subject(&mut self, subject: impl Into<String>) -> AppResult<()> {
        self.editing()?.subject = subject.into();
        Ok(())
    }

    pub fn set_category(&mut self, category: ReportCategory) -> AppResult<()> {
        self.editing()?.category = category;
        Ok(())
    }

    pub fn set_message(&mut self, message: impl Into<String>) -> AppResult<()> {
        self.editing()?.message = message.into();
        Ok(())
    }

    pub fn attach(&mut self, name: impl Into<String>, size_bytes: u64) -> AppResult<()> {
        let name = name.into();
        validate_required_text(&name, "attachment", MAX_FILE_NAME_LEN)?;
        self.editing()?.attachment = Some(Attachment { name, size_bytes });
        Ok(())
    }

    /// Drop the attachment, returning it if there was one
    pub fn detach(&mut self) -> AppResult<Option<Attachment>> {
        Ok(self.editing()?.attachment.take())
    }

    /// Validate the draft and move to `Sent`
    ///
    /// On a validation error the draft stays editable and unchanged.
    pub fn submit(&mut self) -> AppResult<&SentReport> {
        let draft = self.editing()?;
        validate_required_text(&draft.subject, "subject", MAX_SUBJECT_LEN)?;
        validate_required_text(&draft.message, "message", MAX_MESSAGE_LEN)?;

        let sent = SentReport {
            draft: std::mem::take(draft),
            sent_at: now_minute(),
        };
        tracing::info!(
            subject = %sent.draft.subject,
            category = %sent.draft.category,
            attachment = sent.draft.attachment.is_some(),
            "Report submitted"
        );
        *self = Self::Sent(sent);

        match self {
            Self::Sent(sent) => Ok(sent),
            Self::Editing(_) => Err(AppError::internal("report form did not transition")),
        }
    }

    /// Start over with an empty draft
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
