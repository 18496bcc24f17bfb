//! Search and filter predicates
//!
//! All functions here are total: an empty result is a valid outcome.

use shared::models::{PaymentRecord, PaymentStatus, Slot};
use std::fmt;
use std::str::FromStr;

/// Slots whose id contains `query` (case-insensitive), in layout order
pub fn filter_slots<'a>(slots: &'a [Slot], query: &str) -> Vec<&'a Slot> {
    let needle = query.to_lowercase();
    slots
        .iter()
        .filter(|s| s.id.to_lowercase().contains(&needle))
        .collect()
}

/// Status dropdown value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(PaymentStatus),
}

impl StatusFilter {
    pub fn accepts(&self, status: PaymentStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == status,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("All"),
            Self::Only(status) => write!(f, "{}", status),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse::<PaymentStatus>().map(Self::Only)
    }
}

/// Payment table filter inputs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentFilter {
    pub query: String,
    pub status: StatusFilter,
    /// Inclusive lower bound on the date portion, `YYYY-MM-DD`
    pub from: Option<String>,
    /// Inclusive upper bound on the date portion, `YYYY-MM-DD`
    pub to: Option<String>,
}

impl PaymentFilter {
    /// All four predicates must hold
    pub fn matches(&self, payment: &PaymentRecord) -> bool {
        self.matches_query(payment)
            && self.status.accepts(payment.status)
            && self.within_dates(payment.date())
    }

    pub fn apply<'a>(&self, payments: &'a [PaymentRecord]) -> Vec<&'a PaymentRecord> {
        payments.iter().filter(|p| self.matches(p)).collect()
    }

    fn matches_query(&self, payment: &PaymentRecord) -> bool {
        let needle = self.query.to_lowercase();
        [&payment.slot, &payment.plate, &payment.time]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }

    // Lexicographic comparison is correct for ISO dates
    fn within_dates(&self, date: &str) -> bool {
        let after_from = self.from.as_deref().is_none_or(|from| date >= from);
        let before_to = self.to.as_deref().is_none_or(|to| date <= to);
        after_from && before_to
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slots::generator::{RandomLayout, SlotGenerator};
    use shared::models::sample_payments;

    fn payment(id: u32, slot: &str, plate: &str, time: &str, status: PaymentStatus) -> PaymentRecord {
        PaymentRecord {
            id,
            slot: slot.into(),
            plate: plate.into(),
            time: time.into(),
            amount: 10_000,
            status,
        }
    }

    fn mixed_payments() -> Vec<PaymentRecord> {
        vec![
            payment(1, "A03", "ABC-123", "2024-05-31 23:50", PaymentStatus::Paid),
            payment(2, "A08", "XYZ-789", "2024-06-01 10:30", PaymentStatus::Unpaid),
            payment(3, "B04", "JKL-456", "2024-06-01 11:15", PaymentStatus::Paid),
            payment(4, "C01", "DEF-222", "2024-06-02 00:05", PaymentStatus::Paid),
            payment(5, "D12", "abc-999", "2024-06-03 13:00", PaymentStatus::Pending),
        ]
    }

    #[test]
    fn test_slot_query_a0() {
        let slots = RandomLayout::seeded(1).generate();
        let ids: Vec<&str> = filter_slots(&slots, "A0").iter().map(|s| s.id.as_str()).collect();
        assert_eq!(
            ids,
            ["A01", "A02", "A03", "A04", "A05", "A06", "A07", "A08", "A09"]
        );
    }

    #[test]
    fn test_slot_query_case_insensitive_and_empty() {
        let slots = RandomLayout::seeded(1).generate();
        assert_eq!(filter_slots(&slots, "").len(), 48);
        assert_eq!(filter_slots(&slots, "c1").len(), 3); // C10, C11, C12
        assert!(filter_slots(&slots, "Z").is_empty());
    }

    #[test]
    fn test_status_filter_parse() {
        assert_eq!("All".parse::<StatusFilter>(), Ok(StatusFilter::All));
        assert_eq!(
            "paid".parse::<StatusFilter>(),
            Ok(StatusFilter::Only(PaymentStatus::Paid))
        );
        assert!("refunded".parse::<StatusFilter>().is_err());
        assert_eq!(StatusFilter::Only(PaymentStatus::Pending).to_string(), "Pending");
    }

    #[test]
    fn test_paid_only() {
        let payments = mixed_payments();
        let filter = PaymentFilter {
            status: StatusFilter::Only(PaymentStatus::Paid),
            ..Default::default()
        };
        let result = filter.apply(&payments);
        assert_eq!(result.len(), 3);
        assert!(result.iter().all(|p| p.status == PaymentStatus::Paid));
    }

    #[test]
    fn test_paid_single_day_range() {
        let payments = mixed_payments();
        let filter = PaymentFilter {
            status: StatusFilter::Only(PaymentStatus::Paid),
            from: Some("2024-06-01".into()),
            to: Some("2024-06-01".into()),
            ..Default::default()
        };
        let ids: Vec<u32> = filter.apply(&payments).iter().map(|p| p.id).collect();
        assert_eq!(ids, [3]);
    }

    #[test]
    fn test_open_ended_ranges() {
        let payments = mixed_payments();
        let from_only = PaymentFilter {
            from: Some("2024-06-02".into()),
            ..Default::default()
        };
        let ids: Vec<u32> = from_only.apply(&payments).iter().map(|p| p.id).collect();
        assert_eq!(ids, [4, 5]);

        let to_only = PaymentFilter {
            to: Some("2024-05-31".into()),
            ..Default::default()
        };
        let ids: Vec<u32> = to_only.apply(&payments).iter().map(|p| p.id).collect();
        assert_eq!(ids, [1]);
    }

    #[test]
    fn test_query_matches_slot_plate_or_time() {
        let payments = mixed_payments();
        let by = |q: &str| -> Vec<u32> {
            PaymentFilter {
                query: q.into(),
                ..Default::default()
            }
            .apply(&payments)
            .iter()
            .map(|p| p.id)
            .collect()
        };

        assert_eq!(by("b04"), [3]);
        assert_eq!(by("ABC"), [1, 5]);
        assert_eq!(by("10:30"), [2]);
        assert_eq!(by("2024-06"), [2, 3, 4, 5]);
        assert!(by("nothing").is_empty());
    }

    #[test]
    fn test_all_predicates_combined() {
        let payments = mixed_payments();
        let filter = PaymentFilter {
            query: "abc".into(),
            status: StatusFilter::Only(PaymentStatus::Pending),
            from: Some("2024-06-01".into()),
            to: Some("2024-06-30".into()),
        };
        let ids: Vec<u32> = filter.apply(&payments).iter().map(|p| p.id).collect();
        assert_eq!(ids, [5]);
    }

    #[test]
    fn test_sample_data_unfiltered() {
        let payments = sample_payments();
        assert_eq!(PaymentFilter::default().apply(&payments).len(), 5);
    }
}
