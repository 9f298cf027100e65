//! Pure checks turning a [`SlotRequest`] into a bookable [`Slot`].
//!
//! Nothing here touches storage or the clock; the caller supplies `now` and
//! decides how to present a failure.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use thiserror::Error;

use crate::domain::booking::{Slot, SlotRequest};
use crate::domain::types::{DATE_FORMAT, HallName, TIME_FORMAT};

/// Reason a slot was rejected before reaching storage.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SlotValidationError {
    #[error("Invalid hall name. Choose from {}.", HallName::choices())]
    InvalidHall,
    #[error("Start time {start} is not in the future.")]
    PastStart { start: NaiveDateTime },
    #[error("End time {end} is not after start time {start}.")]
    EndBeforeStart {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
    #[error("Incorrect date or time format: {0}")]
    MalformedInput(String),
}

pub fn parse_hall(value: &str) -> Result<HallName, SlotValidationError> {
    HallName::try_from(value).map_err(|_| SlotValidationError::InvalidHall)
}

fn parse_date(value: &str) -> Result<NaiveDate, SlotValidationError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|_| SlotValidationError::MalformedInput(format!("date '{value}'")))
}

/// Parses `HH:MM`; `HH:MM:SS` is accepted and truncated to the minute.
fn parse_time(value: &str) -> Result<NaiveTime, SlotValidationError> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, TIME_FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .ok()
        .and_then(|time| time.with_second(0))
        .and_then(|time| time.with_nanosecond(0))
        .ok_or_else(|| SlotValidationError::MalformedInput(format!("time '{value}'")))
}

/// Checks hall membership first, then the date and time formats.
pub fn parse_slot(request: &SlotRequest) -> Result<Slot, SlotValidationError> {
    let hall = parse_hall(&request.hall_name)?;
    Ok(Slot {
        hall,
        date: parse_date(&request.date)?,
        start_time: parse_time(&request.start_time)?,
        end_time: parse_time(&request.end_time)?,
    })
}

/// The slot must start strictly after `now` and end strictly after it starts.
pub fn validate_schedule(slot: &Slot, now: NaiveDateTime) -> Result<(), SlotValidationError> {
    let start = slot.start();
    let end = slot.end();
    if start <= now {
        return Err(SlotValidationError::PastStart { start });
    }
    if end <= start {
        return Err(SlotValidationError::EndBeforeStart { start, end });
    }
    Ok(())
}
