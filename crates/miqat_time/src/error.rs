//! Error types for clock-time and date parsing.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from parsing clock times or calendar dates.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Text is not a valid `HH:MM` clock time.
    InvalidClockTime(String),
    /// The `--:--` sentinel was given where a defined time is required.
    Sentinel,
    /// Text is not a valid calendar date or date-time.
    InvalidDate(String),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidClockTime(s) => write!(f, "invalid clock time: {s:?} (expected HH:MM)"),
            Self::Sentinel => write!(f, "clock time is undefined (--:--)"),
            Self::InvalidDate(s) => write!(f, "invalid date: {s}"),
        }
    }
}

impl Error for TimeError {}

impl From<chrono::ParseError> for TimeError {
    fn from(e: chrono::ParseError) -> Self {
        Self::InvalidDate(e.to_string())
    }
}
