use thiserror::Error;

use crate::domain::validation::SlotValidationError;

/// Failure of a booking operation. The `Display` text is meant for end users.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// The request did not describe a valid future slot.
    #[error(transparent)]
    Invalid(#[from] SlotValidationError),
    /// The slot overlaps an existing booking.
    #[error("Time slot not available.")]
    SlotUnavailable,
    /// No booking matched the slot to cancel.
    #[error("No booking found to cancel.")]
    NotFound,
    /// The cancel phase of an update failed; no new booking was attempted.
    #[error("Update failed: {0}")]
    UpdateFailed(Box<ServiceError>),
    /// Storage failed; details are logged.
    #[error("internal error")]
    Internal,
}

/// Convenient alias for results returned from service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;
