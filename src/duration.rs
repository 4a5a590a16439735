//! The `Duration` value type

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseDurationError;
use crate::parse::parse_seconds;
use crate::units::{MILLISECONDS_PER_SECOND, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};

/// An immutable span of time
///
/// The canonical representation is a single `f64` magnitude in seconds.
/// Values are created through the unit factories or [`Duration::parse`] and
/// never mutated afterwards. Serializes transparently as the seconds value.
///
/// All arithmetic is standard double-precision floating point with no
/// rounding, so repeated unit round-trips are exact only to f64 precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Duration {
    seconds: f64,
}

impl Duration {
    /// Create a duration from a raw seconds value
    ///
    /// This is the trusted low-level entry point used by the unit factories
    /// and the parser. It applies no validation of sign or finiteness. To
    /// interpret text like "5 seconds", use [`Duration::parse`] instead.
    #[must_use]
    pub const fn from_seconds(seconds: f64) -> Self {
        Self { seconds }
    }

    /// Create a duration from a milliseconds value
    #[must_use]
    pub const fn from_milliseconds(value: f64) -> Self {
        Self::from_seconds(value / MILLISECONDS_PER_SECOND)
    }

    /// Create a duration from a minutes value
    #[must_use]
    pub const fn from_minutes(value: f64) -> Self {
        Self::from_seconds(value * SECONDS_PER_MINUTE)
    }

    /// Create a duration from an hours value
    #[must_use]
    pub const fn from_hours(value: f64) -> Self {
        Self::from_seconds(value * SECONDS_PER_HOUR)
    }

    /// Parse a natural-language duration string
    ///
    /// Accepts a single `<number> <unit>` pair (e.g., "5 seconds", "1.5h").
    /// See the crate documentation for the accepted grammar.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseDurationError`] for malformed input, negative values,
    /// non-finite numbers, or unrecognized units.
    pub fn parse(input: &str) -> Result<Self, ParseDurationError> {
        parse_seconds(input).map(Self::from_seconds)
    }

    /// The duration expressed in milliseconds
    #[must_use]
    pub const fn to_milliseconds(&self) -> f64 {
        self.seconds * MILLISECONDS_PER_SECOND
    }

    /// The duration expressed in seconds
    #[must_use]
    pub const fn to_seconds(&self) -> f64 {
        self.seconds
    }

    /// The duration expressed in minutes
    #[must_use]
    pub const fn to_minutes(&self) -> f64 {
        self.seconds / SECONDS_PER_MINUTE
    }

    /// The duration expressed in hours
    #[must_use]
    pub const fn to_hours(&self) -> f64 {
        self.seconds / SECONDS_PER_HOUR
    }
}

impl FromStr for Duration {
    type Err = ParseDurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
