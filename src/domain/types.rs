//! Strongly-typed value objects used by domain entities.
//!
//! Domain structs should carry these wrappers instead of raw primitives so that
//! identifiers and the closed set of halls are enforced at the boundary.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// Storage and display format of a booking date.
pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// Storage and display format of a booking start or end time.
pub const TIME_FORMAT: &str = "%H:%M";
/// Storage and display format of the `created_at` timestamp.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Errors produced when attempting to construct constrained domain types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// An identifier was zero or negative.
    #[error("{0} must be greater than zero")]
    NonPositiveId(&'static str),
    /// Catch-all for custom validation failures.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

/// Macro to generate lightweight newtypes for positive identifiers.
macro_rules! id_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(
            Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord,
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Creates a new identifier ensuring it is greater than zero.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId($field))
                }
            }

            /// Returns the raw `i32` backing this identifier.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<i32> for $name {
            fn eq(&self, other: &i32) -> bool {
                self.0 == *other
            }
        }

        impl PartialEq<$name> for i32 {
            fn eq(&self, other: &$name) -> bool {
                *self == other.0
            }
        }
    };
}

id_newtype!(BookingId, "Identifier of a stored booking.", "booking_id");

/// One of the fixed set of bookable halls.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "String", into = "String")]
pub enum HallName {
    Saraswati,
    Ganga,
    Yamuna,
    Kaveri,
}

impl HallName {
    /// Every hall, in the order they are offered to users.
    pub const ALL: [HallName; 4] = [Self::Saraswati, Self::Ganga, Self::Yamuna, Self::Kaveri];

    /// String representation used in persistence.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Saraswati => "Saraswati",
            Self::Ganga => "Ganga",
            Self::Yamuna => "Yamuna",
            Self::Kaveri => "Kaveri",
        }
    }

    /// Comma separated list of all hall names, e.g. for error messages.
    pub fn choices() -> String {
        Self::ALL
            .iter()
            .map(|hall| hall.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Display for HallName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for HallName {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|hall| hall.as_str() == value)
            .ok_or_else(|| TypeConstraintError::InvalidValue(format!("hall name: {value}")))
    }
}

impl TryFrom<String> for HallName {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

impl From<HallName> for String {
    fn from(value: HallName) -> Self {
        value.as_str().to_string()
    }
}
