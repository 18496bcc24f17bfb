//! Operator Report Model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Report category (报告分类)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ReportCategory {
    /// "Chung"
    #[default]
    General,
    /// "Kỹ thuật"
    Technical,
    /// "Thanh toán"
    Billing,
    /// "Chỗ đỗ xe"
    Parking,
    /// "Khác"
    Other,
}

impl ReportCategory {
    pub const ALL: [ReportCategory; 5] = [
        Self::General,
        Self::Technical,
        Self::Billing,
        Self::Parking,
        Self::Other,
    ];

    /// Form value as submitted by the original dropdown
    pub fn label(&self) -> &'static str {
        match self {
            Self::General => "Chung",
            Self::Technical => "Kỹ thuật",
            Self::Billing => "Thanh toán",
            Self::Parking => "Chỗ đỗ xe",
            Self::Other => "Khác",
        }
    }

    fn keyword(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Technical => "technical",
            Self::Billing => "billing",
            Self::Parking => "parking",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for ReportCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ReportCategory {
    type Err = String;

    /// Accepts either the English keyword or the Vietnamese label
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.keyword().eq_ignore_ascii_case(s) || c.label() == s)
            .ok_or_else(|| format!("unknown report category: {}", s))
    }
}

/// Attached file metadata (the content never leaves the desk)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub name: String,
    pub size_bytes: u64,
}

/// Report being edited
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportDraft {
    pub subject: String,
    pub category: ReportCategory,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment: Option<Attachment>,
}

/// Submitted report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentReport {
    pub draft: ReportDraft,
    /// Local submission time, `YYYY-MM-DD HH:MM`
    pub sent_at: String,
}
