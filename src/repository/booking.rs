use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::domain::booking::{Booking, NewBooking, Slot};
use crate::models::booking::{Booking as DbBooking, NewBooking as DbNewBooking, SlotColumns};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{BookingReader, BookingWriter, DieselRepository};

fn overlapping_in(conn: &mut SqliteConnection, slot: &Slot) -> RepositoryResult<Vec<Booking>> {
    use crate::schema::bookings;

    let columns = SlotColumns::from(slot);

    let candidates = bookings::table
        .filter(bookings::hall_name.eq(columns.hall_name))
        .filter(bookings::date.eq(columns.date.as_str()))
        .order(bookings::id.asc())
        .select(DbBooking::as_select())
        .load::<DbBooking>(conn)?;

    let mut overlapping = Vec::new();
    for row in candidates {
        let booking = Booking::try_from(row)?;
        if booking.slot.overlaps(slot) {
            overlapping.push(booking);
        }
    }
    Ok(overlapping)
}

impl BookingReader for DieselRepository {
    fn list_bookings(&self) -> RepositoryResult<Vec<Booking>> {
        use crate::schema::bookings;

        let mut conn = self.conn()?;

        let items = bookings::table
            .order(bookings::id.asc())
            .select(DbBooking::as_select())
            .load::<DbBooking>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Booking>, _>>()?;

        Ok(items)
    }

    fn find_overlapping(&self, slot: &Slot) -> RepositoryResult<Vec<Booking>> {
        let mut conn = self.conn()?;
        overlapping_in(&mut conn, slot)
    }
}

impl BookingWriter for DieselRepository {
    fn create_booking(&self, booking: &NewBooking) -> RepositoryResult<Booking> {
        use crate::schema::bookings;

        let mut conn = self.conn()?;
        let db_booking = DbNewBooking::from(booking);

        // IMMEDIATE takes the write lock up front so two writers cannot both
        // pass the overlap check.
        let created = conn.immediate_transaction(|conn| {
            if !overlapping_in(conn, &booking.slot)?.is_empty() {
                return Err(RepositoryError::Conflict);
            }

            let row = diesel::insert_into(bookings::table)
                .values(&db_booking)
                .returning(DbBooking::as_returning())
                .get_result::<DbBooking>(conn)?;

            Ok(Booking::try_from(row)?)
        })?;

        Ok(created)
    }

    fn delete_booking(&self, slot: &Slot) -> RepositoryResult<usize> {
        use crate::schema::bookings;

        let mut conn = self.conn()?;
        let columns = SlotColumns::from(slot);

        let affected = diesel::delete(
            bookings::table
                .filter(bookings::hall_name.eq(columns.hall_name))
                .filter(bookings::date.eq(columns.date.as_str()))
                .filter(bookings::start_time.eq(columns.start_time.as_str()))
                .filter(bookings::end_time.eq(columns.end_time.as_str())),
        )
        .execute(&mut conn)?;

        Ok(affected)
    }
}
