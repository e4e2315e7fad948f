//! Error types for prayer configuration and boundary parsing.

use std::error::Error;
use std::fmt::{Display, Formatter};

use miqat_time::TimeError;

/// Errors from configuration and input parsing.
///
/// The calculations themselves never fail: undefined geometry is reported
/// as an undefined (`None`) time, not as an error.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum MiqatError {
    /// Error from clock-time or date parsing.
    Time(TimeError),
    /// Calculation method key not in the registry.
    UnknownMethod(String),
    /// Qiyam reminder setting is neither `DEFAULT` nor `HH:MM`.
    InvalidQiyamTime(String),
}

impl Display for MiqatError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::UnknownMethod(key) => write!(
                f,
                "unknown calculation method: {key:?} (expected ISNA, MWL, EGYPT, KARACHI or MAKKAH)"
            ),
            Self::InvalidQiyamTime(s) => write!(f, "invalid qiyam time: {s:?}"),
        }
    }
}

impl Error for MiqatError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Time(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TimeError> for MiqatError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
