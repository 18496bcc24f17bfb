//! Parking Slot Model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Parking areas and how many slots each holds
pub const AREAS: [(char, u8); 4] = [('A', 12), ('B', 12), ('C', 12), ('D', 12)];

/// Build a slot id from an area prefix and a 1-based index (`A` + 3 → `A03`)
pub fn slot_id(prefix: char, index: u8) -> String {
    format!("{}{:02}", prefix, index)
}

/// Vehicle parked in (or reserved for) a slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    /// Vehicle plate, e.g. `59A-123.45`
    pub plate: String,
    /// Entry time, `YYYY-MM-DD HH:MM`
    pub entry: String,
}

impl Booking {
    pub fn new(plate: impl Into<String>, entry: impl Into<String>) -> Self {
        Self {
            plate: plate.into(),
            entry: entry.into(),
        }
    }
}

/// Slot status as shown to the operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotStatus {
    Available,
    Busy,
    Booked,
}

impl SlotStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Busy => "busy",
            Self::Booked => "booked",
        }
    }
}

impl fmt::Display for SlotStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Authoritative slot state
///
/// The booking only exists in the occupied variants, so `occupied` and
/// `booking` can never disagree with the status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotState {
    Available,
    Busy(Booking),
    Booked(Booking),
}

impl SlotState {
    pub fn status(&self) -> SlotStatus {
        match self {
            Self::Available => SlotStatus::Available,
            Self::Busy(_) => SlotStatus::Busy,
            Self::Booked(_) => SlotStatus::Booked,
        }
    }

    pub fn booking(&self) -> Option<&Booking> {
        match self {
            Self::Available => None,
            Self::Busy(b) | Self::Booked(b) => Some(b),
        }
    }
}

/// Parking slot entity (车位)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "SlotRecord", try_from = "SlotRecord")]
pub struct Slot {
    pub id: String,
    pub state: SlotState,
}

impl Slot {
    pub fn available(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            state: SlotState::Available,
        }
    }

    pub fn busy(id: impl Into<String>, booking: Booking) -> Self {
        Self {
            id: id.into(),
            state: SlotState::Busy(booking),
        }
    }

    pub fn booked(id: impl Into<String>, booking: Booking) -> Self {
        Self {
            id: id.into(),
            state: SlotState::Booked(booking),
        }
    }

    pub fn status(&self) -> SlotStatus {
        self.state.status()
    }

    /// True iff the status is not `available`
    pub fn occupied(&self) -> bool {
        !matches!(self.state, SlotState::Available)
    }

    pub fn booking(&self) -> Option<&Booking> {
        self.state.booking()
    }

    /// Area prefix (first character of the id)
    pub fn area(&self) -> Option<char> {
        self.id.chars().next()
    }
}

/// Flat wire shape of a slot: `{id, status, occupied, booking}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotRecord {
    pub id: String,
    pub status: SlotStatus,
    pub occupied: bool,
    pub booking: Option<Booking>,
}

impl From<Slot> for SlotRecord {
    fn from(slot: Slot) -> Self {
        let status = slot.status();
        let occupied = slot.occupied();
        let booking = match slot.state {
            SlotState::Available => None,
            SlotState::Busy(b) | SlotState::Booked(b) => Some(b),
        };
        Self {
            id: slot.id,
            status,
            occupied,
            booking,
        }
    }
}

/// Rejected flat record
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SlotRecordError {
    #[error("slot {id}: occupied={occupied} does not match status {status}")]
    OccupiedMismatch {
        id: String,
        status: SlotStatus,
        occupied: bool,
    },

    #[error("slot {id}: status {status} requires a booking")]
    MissingBooking { id: String, status: SlotStatus },

    #[error("slot {id}: available slot must not carry a booking")]
    UnexpectedBooking { id: String },
}

impl TryFrom<SlotRecord> for Slot {
    type Error = SlotRecordError;

    fn try_from(record: SlotRecord) -> Result<Self, Self::Error> {
        let expected_occupied = record.status != SlotStatus::Available;
        if record.occupied != expected_occupied {
            return Err(SlotRecordError::OccupiedMismatch {
                id: record.id,
                status: record.status,
                occupied: record.occupied,
            });
        }

        let state = match (record.status, record.booking) {
            (SlotStatus::Available, None) => SlotState::Available,
            (SlotStatus::Available, Some(_)) => {
                return Err(SlotRecordError::UnexpectedBooking { id: record.id });
            }
            (SlotStatus::Busy, Some(b)) => SlotState::Busy(b),
            (SlotStatus::Booked, Some(b)) => SlotState::Booked(b),
            (status, None) => {
                return Err(SlotRecordError::MissingBooking {
                    id: record.id,
                    status,
                });
            }
        };

        Ok(Self {
            id: record.id,
            state,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_booking() -> Booking {
        Booking::new("51B-678.90", "2024-06-01 09:00")
    }

    #[test]
    fn test_slot_id_format() {
        assert_eq!(slot_id('A', 1), "A01");
        assert_eq!(slot_id('C', 5), "C05");
        assert_eq!(slot_id('D', 12), "D12");
    }

    #[test]
    fn test_derived_fields_follow_state() {
        let slot = Slot::available("A01");
        assert_eq!(slot.status(), SlotStatus::Available);
        assert!(!slot.occupied());
        assert!(slot.booking().is_none());

        let slot = Slot::booked("C05", sample_booking());
        assert_eq!(slot.status(), SlotStatus::Booked);
        assert!(slot.occupied());
        assert_eq!(slot.booking().unwrap().plate, "51B-678.90");
        assert_eq!(slot.area(), Some('C'));
    }

    #[test]
    fn test_serialize_flat_record() {
        let slot = Slot::busy("B02", Booking::new("59A-123.45", "2024-06-01 09:00"));
        let json = serde_json::to_value(&slot).unwrap();

        assert_eq!(json["id"], "B02");
        assert_eq!(json["status"], "busy");
        assert_eq!(json["occupied"], true);
        assert_eq!(json["booking"]["plate"], "59A-123.45");

        let json = serde_json::to_value(Slot::available("A01")).unwrap();
        assert_eq!(json["occupied"], false);
        assert!(json["booking"].is_null());
    }

    #[test]
    fn test_deserialize_consistent_record() {
        let json = r#"{"id":"C05","status":"booked","occupied":true,
            "booking":{"plate":"51B-678.90","entry":"2024-06-01 09:00"}}"#;
        let slot: Slot = serde_json::from_str(json).unwrap();
        assert_eq!(slot, Slot::booked("C05", sample_booking()));
    }

    #[test]
    fn test_deserialize_rejects_inconsistent_records() {
        let occupied_mismatch = r#"{"id":"A01","status":"available","occupied":true,"booking":null}"#;
        assert!(serde_json::from_str::<Slot>(occupied_mismatch).is_err());

        let missing_booking = r#"{"id":"A01","status":"busy","occupied":true,"booking":null}"#;
        let err = serde_json::from_str::<Slot>(missing_booking).unwrap_err();
        assert!(err.to_string().contains("requires a booking"));

        let stray_booking = r#"{"id":"A01","status":"available","occupied":false,
            "booking":{"plate":"X","entry":"Y"}}"#;
        assert!(serde_json::from_str::<Slot>(stray_booking).is_err());
    }

    #[test]
    fn test_record_error_messages() {
        let err = SlotRecordError::OccupiedMismatch {
            id: "A01".into(),
            status: SlotStatus::Available,
            occupied: true,
        };
        assert_eq!(
            err.to_string(),
            "slot A01: occupied=true does not match status available"
        );
    }
}
