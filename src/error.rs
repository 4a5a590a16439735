//! Parse errors for duration strings
//!
//! Each variant carries the offending text so the `Display` message can
//! echo it back to the caller. The messages are part of the observable
//! contract: callers match on them (e.g., "negative", "Unknown unit").

use std::error::Error;
use std::fmt;

use crate::units::supported_units;

/// Error returned when a duration string cannot be parsed
#[derive(Debug, Clone, PartialEq)]
pub enum ParseDurationError {
    /// Input does not match the `<number> <unit>` shape
    InvalidFormat(String),
    /// Input carries a leading minus sign
    Negative(String),
    /// Numeric token contains comma separators
    ///
    /// The grammar never matches a comma, so this cannot surface through
    /// [`crate::Duration::parse`]; it exists as an explicit guard should
    /// the pattern ever be relaxed.
    CommaSeparators(String),
    /// Numeric token did not parse to a finite number
    InvalidNumber(String),
    /// Unit token is not in the alias table
    UnknownUnit(String),
}

impl fmt::Display for ParseDurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat(input) => write!(
                f,
                "Invalid duration format: \"{input}\". Expected format: \"<number> <unit>\" (e.g., \"5 seconds\", \"1.5h\"). Unit is required."
            ),
            Self::Negative(input) => {
                write!(f, "Negative durations not supported: \"{input}\"")
            }
            Self::CommaSeparators(number) => write!(
                f,
                "Invalid duration: commas not supported in numbers. Use underscores instead: \"{}\"",
                number.replace(',', "_")
            ),
            Self::InvalidNumber(number) => {
                write!(f, "Invalid number in duration: \"{number}\"")
            }
            Self::UnknownUnit(unit) => write!(
                f,
                "Unknown unit: \"{unit}\". Supported units (case-insensitive): {}",
                supported_units()
            ),
        }
    }
}

impl Error for ParseDurationError {}
