//! The booking engine: book, cancel, update and availability checks.
//!
//! Every operation validates its input before touching storage and reports
//! failures as [`ServiceError`]. The validation instant is passed in by the
//! caller.

use std::fmt::{Display, Formatter};

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::booking::{Booking, NewBooking, SlotRequest};
use crate::domain::validation::{parse_slot, validate_schedule};
use crate::repository::errors::RepositoryError;
use crate::repository::{BookingReader, BookingWriter};

use super::{ServiceError, ServiceResult};

/// Successful result of a booking operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingOutcome {
    Booked,
    Cancelled,
    Available,
    Unavailable,
}

impl BookingOutcome {
    /// Human readable message shown to the user.
    pub const fn message(self) -> &'static str {
        match self {
            Self::Booked => "Booking successful.",
            Self::Cancelled => "Booking cancelled.",
            Self::Available => "Hall is available.",
            Self::Unavailable => "Hall is not available.",
        }
    }
}

impl Display for BookingOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

pub fn book_hall<R>(
    request: &SlotRequest,
    now: NaiveDateTime,
    repo: &R,
) -> ServiceResult<BookingOutcome>
where
    R: BookingWriter,
{
    let slot = parse_slot(request)?;
    validate_schedule(&slot, now)?;

    let booking = NewBooking {
        slot,
        created_at: now,
    };

    match repo.create_booking(&booking) {
        Ok(created) => {
            log::info!(
                "Booked {} on {} {}-{} as #{}",
                slot.hall,
                slot.date,
                slot.start_time,
                slot.end_time,
                created.id
            );
            Ok(BookingOutcome::Booked)
        }
        Err(RepositoryError::Conflict) => Err(ServiceError::SlotUnavailable),
        Err(e) => {
            log::error!("Failed to create booking: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Cancel the booking matching all four fields of `request` exactly.
///
/// Only the hall and the input format are validated; bookings in the past can
/// still be cancelled.
pub fn cancel_booking<R>(request: &SlotRequest, repo: &R) -> ServiceResult<BookingOutcome>
where
    R: BookingWriter,
{
    let slot = parse_slot(request)?;

    match repo.delete_booking(&slot) {
        Ok(0) => Err(ServiceError::NotFound),
        Ok(removed) => {
            log::info!(
                "Cancelled {removed} booking(s) of {} on {} {}-{}",
                slot.hall,
                slot.date,
                slot.start_time,
                slot.end_time
            );
            Ok(BookingOutcome::Cancelled)
        }
        Err(e) => {
            log::error!("Failed to delete booking: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Move a booking by cancelling `old` and then booking `new`.
///
/// The two steps are not atomic: when the new slot cannot be booked the old
/// booking stays cancelled.
pub fn update_booking<R>(
    old: &SlotRequest,
    new: &SlotRequest,
    now: NaiveDateTime,
    repo: &R,
) -> ServiceResult<BookingOutcome>
where
    R: BookingWriter,
{
    if let Err(e) = cancel_booking(old, repo) {
        return Err(ServiceError::UpdateFailed(Box::new(e)));
    }

    let result = book_hall(new, now, repo);
    if let Err(e) = &result {
        log::warn!("Booking was cancelled but its replacement failed: {e}");
    }
    result
}

pub fn check_availability<R>(
    request: &SlotRequest,
    now: NaiveDateTime,
    repo: &R,
) -> ServiceResult<BookingOutcome>
where
    R: BookingReader,
{
    let slot = parse_slot(request)?;
    validate_schedule(&slot, now)?;

    match repo.find_overlapping(&slot) {
        Ok(existing) if existing.is_empty() => Ok(BookingOutcome::Available),
        Ok(_) => Ok(BookingOutcome::Unavailable),
        Err(e) => {
            log::error!("Failed to query overlapping bookings: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Every stored booking in insertion order.
pub fn list_bookings<R>(repo: &R) -> ServiceResult<Vec<Booking>>
where
    R: BookingReader,
{
    repo.list_bookings().map_err(|e| {
        log::error!("Failed to list bookings: {e}");
        ServiceError::Internal
    })
}
