//! Domain entities and the pure validation rules applied to them.

pub mod booking;
pub mod types;
pub mod validation;
