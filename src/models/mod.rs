pub mod booking;
#[cfg(feature = "server")]
pub mod config;
