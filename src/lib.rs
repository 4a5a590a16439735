//! Timespan Library
//!
//! A small value library for spans of time. A [`Duration`] is constructed
//! from a numeric quantity in milliseconds, seconds, minutes, or hours, or
//! parsed from a natural-language string like `"5 seconds"` or `"1.5h"`,
//! and converts back to a numeric value in any of those units.
//!
//! Every operation is a pure function over immutable values, so the crate
//! is safe for unrestricted concurrent use.

mod duration;
mod error;
mod parse;
pub mod units;

pub use duration::Duration;
pub use error::ParseDurationError;
