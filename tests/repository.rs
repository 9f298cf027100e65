use chrono::{NaiveDate, NaiveTime};
use hall_booking::domain::booking::{NewBooking, Slot};
use hall_booking::domain::types::HallName;
use hall_booking::repository::errors::RepositoryError;
use hall_booking::repository::{BookingReader, BookingWriter, DieselRepository};

mod common;

fn slot(hall: HallName, start: (u32, u32), end: (u32, u32)) -> Slot {
    Slot {
        hall,
        date: NaiveDate::from_ymd_opt(2030, 1, 1).unwrap(),
        start_time: NaiveTime::from_hms_opt(start.0, start.1, 0).unwrap(),
        end_time: NaiveTime::from_hms_opt(end.0, end.1, 0).unwrap(),
    }
}

fn new_booking(slot: Slot) -> NewBooking {
    NewBooking {
        slot,
        created_at: common::now(),
    }
}

#[test]
fn creates_and_lists_bookings_in_id_order() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let first = repo
        .create_booking(&new_booking(slot(HallName::Kaveri, (15, 0), (16, 0))))
        .expect("should create booking");
    let second = repo
        .create_booking(&new_booking(slot(HallName::Ganga, (8, 0), (9, 0))))
        .expect("should create booking");

    assert!(first.id < second.id);
    assert_eq!(first.created_at, common::now());

    let bookings = repo.list_bookings().expect("should list bookings");
    assert_eq!(bookings, vec![first, second]);
}

#[test]
fn rejects_overlapping_insert() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    repo.create_booking(&new_booking(slot(HallName::Ganga, (10, 0), (11, 0))))
        .unwrap();
    let err = repo
        .create_booking(&new_booking(slot(HallName::Ganga, (10, 30), (11, 30))))
        .unwrap_err();

    assert!(matches!(err, RepositoryError::Conflict));
    assert_eq!(repo.list_bookings().unwrap().len(), 1);
}

#[test]
fn finds_only_overlapping_bookings_of_same_hall_and_date() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    repo.create_booking(&new_booking(slot(HallName::Ganga, (9, 0), (10, 0))))
        .unwrap();
    let hit = repo
        .create_booking(&new_booking(slot(HallName::Ganga, (10, 0), (11, 0))))
        .unwrap();
    repo.create_booking(&new_booking(slot(HallName::Kaveri, (10, 0), (11, 0))))
        .unwrap();
    let mut other_day = slot(HallName::Ganga, (10, 0), (11, 0));
    other_day.date = NaiveDate::from_ymd_opt(2030, 1, 2).unwrap();
    repo.create_booking(&new_booking(other_day)).unwrap();

    let found = repo
        .find_overlapping(&slot(HallName::Ganga, (10, 30), (12, 0)))
        .unwrap();
    assert_eq!(found, vec![hit]);
}

#[test]
fn deletes_only_exact_matches() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let booked = slot(HallName::Yamuna, (10, 0), (11, 0));
    repo.create_booking(&new_booking(booked)).unwrap();

    assert_eq!(
        repo.delete_booking(&slot(HallName::Yamuna, (10, 0), (10, 59)))
            .unwrap(),
        0
    );
    assert_eq!(repo.delete_booking(&booked).unwrap(), 1);
    assert_eq!(repo.delete_booking(&booked).unwrap(), 0);
    assert!(repo.list_bookings().unwrap().is_empty());
}

#[test]
fn bookings_survive_reopening_the_database() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let created = repo
        .create_booking(&new_booking(slot(HallName::Saraswati, (10, 0), (11, 0))))
        .unwrap();
    drop(repo);

    let reopened = DieselRepository::new(test_db.reopen());
    assert_eq!(reopened.list_bookings().unwrap(), vec![created]);
}
