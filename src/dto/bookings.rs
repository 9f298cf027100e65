use serde::Serialize;

use crate::domain::booking::Booking;
use crate::domain::types::{DATE_FORMAT, TIME_FORMAT, TIMESTAMP_FORMAT};

/// Column headers of the bookings table, in display order.
pub const BOOKING_TABLE_HEADERS: [&str; 6] = [
    "ID",
    "Hall Name",
    "Date",
    "Start Time",
    "End Time",
    "Created At",
];

/// One row of the bookings table, formatted for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingRow {
    pub id: i32,
    pub hall_name: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub created_at: String,
}

impl From<Booking> for BookingRow {
    fn from(value: Booking) -> Self {
        Self {
            id: value.id.get(),
            hall_name: value.slot.hall.as_str().to_string(),
            date: value.slot.date.format(DATE_FORMAT).to_string(),
            start_time: value.slot.start_time.format(TIME_FORMAT).to_string(),
            end_time: value.slot.end_time.format(TIME_FORMAT).to_string(),
            created_at: value.created_at.format(TIMESTAMP_FORMAT).to_string(),
        }
    }
}
