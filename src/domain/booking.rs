use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::domain::types::{BookingId, HallName};

/// Unvalidated slot as entered by a caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SlotRequest {
    pub hall_name: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
}

impl SlotRequest {
    pub fn new(
        hall_name: impl Into<String>,
        date: impl Into<String>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Self {
        Self {
            hall_name: hall_name.into(),
            date: date.into(),
            start_time: start_time.into(),
            end_time: end_time.into(),
        }
    }
}

/// A hall reserved for `[start_time, end_time)` on a single calendar day.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Slot {
    pub hall: HallName,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

impl Slot {
    pub fn start(&self) -> NaiveDateTime {
        self.date.and_time(self.start_time)
    }

    pub fn end(&self) -> NaiveDateTime {
        self.date.and_time(self.end_time)
    }

    /// Half-open overlap test; slots that merely touch do not overlap.
    pub fn overlaps(&self, other: &Slot) -> bool {
        self.hall == other.hall
            && self.date == other.date
            && other.start_time < self.end_time
            && other.end_time > self.start_time
    }
}

/// Stored reservation record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Booking {
    pub id: BookingId,
    #[serde(flatten)]
    pub slot: Slot,
    pub created_at: NaiveDateTime,
}

/// Data required to insert a new [`Booking`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewBooking {
    pub slot: Slot,
    pub created_at: NaiveDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(hall: HallName, start: &str, end: &str) -> Slot {
        Slot {
            hall,
            date: NaiveDate::from_ymd_opt(2030, 1, 1).unwrap(),
            start_time: NaiveTime::parse_from_str(start, "%H:%M").unwrap(),
            end_time: NaiveTime::parse_from_str(end, "%H:%M").unwrap(),
        }
    }

    #[test]
    fn overlapping_intervals_conflict_in_both_directions() {
        let a = slot(HallName::Ganga, "10:00", "11:00");
        let b = slot(HallName::Ganga, "10:30", "11:30");
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn touching_intervals_do_not_conflict() {
        let a = slot(HallName::Ganga, "10:00", "11:00");
        let b = slot(HallName::Ganga, "11:00", "12:00");
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn contained_interval_conflicts() {
        let outer = slot(HallName::Ganga, "09:00", "17:00");
        let inner = slot(HallName::Ganga, "12:00", "12:30");
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn different_halls_never_conflict() {
        let a = slot(HallName::Ganga, "10:00", "11:00");
        let b = slot(HallName::Kaveri, "10:00", "11:00");
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn combines_date_and_time() {
        let s = slot(HallName::Yamuna, "10:00", "11:00");
        assert_eq!(s.start().to_string(), "2030-01-01 10:00:00");
        assert_eq!(s.end().to_string(), "2030-01-01 11:00:00");
    }
}
