pub use errors::{ServiceError, ServiceResult};

pub mod bookings;
pub mod errors;
