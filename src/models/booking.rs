use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use diesel::prelude::*;

use crate::domain::booking::{Booking as DomainBooking, NewBooking as DomainNewBooking, Slot};
use crate::domain::types::{
    DATE_FORMAT, HallName, TIME_FORMAT, TIMESTAMP_FORMAT, TypeConstraintError,
};

/// Diesel model representing the `bookings` table.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::bookings)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Booking {
    pub id: i32,
    pub hall_name: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub created_at: String,
}

/// Insertable form of [`Booking`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::bookings)]
pub struct NewBooking {
    pub hall_name: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub created_at: String,
}

/// Column values identifying a slot, formatted the way they are stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotColumns {
    pub hall_name: &'static str,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
}

impl From<&Slot> for SlotColumns {
    fn from(slot: &Slot) -> Self {
        Self {
            hall_name: slot.hall.as_str(),
            date: slot.date.format(DATE_FORMAT).to_string(),
            start_time: slot.start_time.format(TIME_FORMAT).to_string(),
            end_time: slot.end_time.format(TIME_FORMAT).to_string(),
        }
    }
}

fn parse_column<T>(
    value: &str,
    column: &str,
    parse: impl FnOnce(&str) -> chrono::ParseResult<T>,
) -> Result<T, TypeConstraintError> {
    parse(value).map_err(|e| TypeConstraintError::InvalidValue(format!("{column} '{value}': {e}")))
}

impl TryFrom<Booking> for DomainBooking {
    type Error = TypeConstraintError;

    fn try_from(booking: Booking) -> Result<Self, Self::Error> {
        Ok(Self {
            id: booking.id.try_into()?,
            slot: Slot {
                hall: HallName::try_from(booking.hall_name.as_str())?,
                date: parse_column(&booking.date, "date", |v| {
                    NaiveDate::parse_from_str(v, DATE_FORMAT)
                })?,
                start_time: parse_column(&booking.start_time, "start_time", |v| {
                    NaiveTime::parse_from_str(v, TIME_FORMAT)
                })?,
                end_time: parse_column(&booking.end_time, "end_time", |v| {
                    NaiveTime::parse_from_str(v, TIME_FORMAT)
                })?,
            },
            created_at: parse_column(&booking.created_at, "created_at", |v| {
                NaiveDateTime::parse_from_str(v, TIMESTAMP_FORMAT)
            })?,
        })
    }
}

impl From<&DomainNewBooking> for NewBooking {
    fn from(booking: &DomainNewBooking) -> Self {
        let columns = SlotColumns::from(&booking.slot);
        Self {
            hall_name: columns.hall_name.to_string(),
            date: columns.date,
            start_time: columns.start_time,
            end_time: columns.end_time,
            created_at: booking.created_at.format(TIMESTAMP_FORMAT).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> Booking {
        Booking {
            id: 7,
            hall_name: "Yamuna".into(),
            date: "2030-01-01".into(),
            start_time: "09:05".into(),
            end_time: "10:30".into(),
            created_at: "2026-10-16 08:00:01".into(),
        }
    }

    #[test]
    fn converts_stored_row_to_domain() {
        let booking = DomainBooking::try_from(row()).unwrap();
        assert_eq!(booking.id, 7);
        assert_eq!(booking.slot.hall, HallName::Yamuna);
        assert_eq!(booking.slot.start_time, NaiveTime::from_hms_opt(9, 5, 0).unwrap());
        assert_eq!(booking.created_at.to_string(), "2026-10-16 08:00:01");
    }

    #[test]
    fn rejects_rows_with_unknown_hall() {
        let mut row = row();
        row.hall_name = "Narmada".into();
        assert!(DomainBooking::try_from(row).is_err());
    }

    #[test]
    fn formats_columns_zero_padded() {
        let booking = DomainBooking::try_from(row()).unwrap();
        let new = DomainNewBooking {
            slot: booking.slot,
            created_at: booking.created_at,
        };
        let insert = NewBooking::from(&new);
        assert_eq!(insert.hall_name, "Yamuna");
        assert_eq!(insert.date, "2030-01-01");
        assert_eq!(insert.start_time, "09:05");
        assert_eq!(insert.end_time, "10:30");
        assert_eq!(insert.created_at, "2026-10-16 08:00:01");
    }
}
