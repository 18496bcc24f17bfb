//! Payment Record Model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Payment settlement status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentStatus {
    Paid,
    Unpaid,
    Pending,
}

impl PaymentStatus {
    pub const ALL: [PaymentStatus; 3] = [Self::Paid, Self::Unpaid, Self::Pending];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Paid => "Paid",
            Self::Unpaid => "Unpaid",
            Self::Pending => "Pending",
        }
    }

    /// Operator-facing label (Vietnamese UI copy)
    pub fn label(&self) -> &'static str {
        match self {
            Self::Paid => "Đã thanh toán",
            Self::Unpaid => "Chưa thanh toán",
            Self::Pending => "Chờ xử lý",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown payment status: {}", s))
    }
}

/// Payment record (read-only sample data)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRecord {
    pub id: u32,
    /// Slot id reference, not an ownership link
    pub slot: String,
    pub plate: String,
    /// `YYYY-MM-DD HH:MM`, sorts lexicographically
    pub time: String,
    /// Amount in VND
    pub amount: i64,
    pub status: PaymentStatus,
}

impl PaymentRecord {
    /// Date portion of `time` (first 10 characters)
    pub fn date(&self) -> &str {
        self.time.get(..10).unwrap_or(&self.time)
    }
}

/// Sample payment table shown on the Payments tab
pub fn sample_payments() -> Vec<PaymentRecord> {
    let rows: [(u32, &str, &str, &str, i64, PaymentStatus); 5] = [
        (1, "A03", "ABC-123", "2024-06-01 09:00", 20_000, PaymentStatus::Paid),
        (2, "A08", "XYZ-789", "2024-06-01 10:30", 15_000, PaymentStatus::Unpaid),
        (3, "B04", "JKL-456", "2024-06-01 11:15", 18_000, PaymentStatus::Paid),
        (4, "C01", "DEF-222", "2024-06-01 12:00", 22_000, PaymentStatus::Pending),
        (5, "D12", "MNO-333", "2024-06-01 13:00", 25_000, PaymentStatus::Unpaid),
    ];

    rows.into_iter()
        .map(|(id, slot, plate, time, amount, status)| PaymentRecord {
            id,
            slot: slot.to_string(),
            plate: plate.to_string(),
            time: time.to_string(),
            amount,
            status,
        })
        .collect()
}
