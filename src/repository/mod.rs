use crate::db::{DbConnection, DbPool};
use crate::domain::booking::{Booking, NewBooking, Slot};

pub mod booking;
pub mod errors;

use errors::RepositoryResult;

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations for bookings.
pub trait BookingReader {
    /// List every booking ordered by identifier.
    fn list_bookings(&self) -> RepositoryResult<Vec<Booking>>;
    /// Bookings of the same hall and date whose interval overlaps `slot`.
    fn find_overlapping(&self, slot: &Slot) -> RepositoryResult<Vec<Booking>>;
}

/// Write operations for bookings.
pub trait BookingWriter {
    /// Persist a booking unless its slot overlaps an existing one.
    ///
    /// The overlap check and the insert happen atomically; an overlap is
    /// reported as [`errors::RepositoryError::Conflict`].
    fn create_booking(&self, booking: &NewBooking) -> RepositoryResult<Booking>;
    /// Delete bookings matching all four fields of `slot`, returning how many were removed.
    fn delete_booking(&self, slot: &Slot) -> RepositoryResult<usize>;
}
