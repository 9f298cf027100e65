//! Helpers for integration tests.

use chrono::NaiveDateTime;
use hall_booking::db::{DbPool, establish_connection_pool, run_migrations};
use tempfile::NamedTempFile;

/// Temporary database used in integration tests.
pub struct TestDb {
    tempfile: NamedTempFile,
    pool: DbPool,
}

impl TestDb {
    pub fn new() -> Self {
        let tempfile = NamedTempFile::new().expect("Failed to create temp file");
        let pool = Self::open(&tempfile);
        TestDb { tempfile, pool }
    }

    fn open(tempfile: &NamedTempFile) -> DbPool {
        let pool = establish_connection_pool(tempfile.path().to_str().unwrap())
            .expect("Failed to establish SQLite connection.");
        run_migrations(&pool).expect("Migrations failed");
        pool
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }

    /// A fresh pool over the same file, as after a process restart.
    #[allow(dead_code)]
    pub fn reopen(&self) -> DbPool {
        Self::open(&self.tempfile)
    }
}

#[allow(dead_code)]
pub fn now() -> NaiveDateTime {
    NaiveDateTime::parse_from_str("2026-10-16 12:00:00", "%Y-%m-%d %H:%M:%S").unwrap()
}
