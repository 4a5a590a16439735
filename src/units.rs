//! Unit constants and the alias table
//!
//! Shared multipliers used by both the numeric factories and the string
//! parser. The alias table is populated once on first use and never
//! mutated afterwards.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Seconds per millisecond
pub const SECONDS_PER_MILLISECOND: f64 = 0.001;

/// Seconds per minute
pub const SECONDS_PER_MINUTE: f64 = 60.0;

/// Seconds per hour
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Milliseconds per second
pub const MILLISECONDS_PER_SECOND: f64 = 1000.0;

/// All recognized unit aliases with their seconds-per-unit multipliers.
///
/// Aliases are lowercase and maintained in alphabetical order. Lookup is
/// case-insensitive via [`multiplier_for`], so `"SECONDS"` and `"SeCoNdS"`
/// both resolve to the `seconds` entry.
pub const UNIT_ALIASES: &[(&str, f64)] = &[
    ("h", SECONDS_PER_HOUR),
    ("hour", SECONDS_PER_HOUR),
    ("hours", SECONDS_PER_HOUR),
    ("hr", SECONDS_PER_HOUR),
    ("m", SECONDS_PER_MINUTE),
    ("millisecond", SECONDS_PER_MILLISECOND),
    ("milliseconds", SECONDS_PER_MILLISECOND),
    ("min", SECONDS_PER_MINUTE),
    ("minute", SECONDS_PER_MINUTE),
    ("minutes", SECONDS_PER_MINUTE),
    ("ms", SECONDS_PER_MILLISECOND),
    ("s", 1.0),
    ("sec", 1.0),
    ("second", 1.0),
    ("seconds", 1.0),
];

/// Seconds-per-unit multiplier for each lowercase alias
static UNIT_MULTIPLIERS: LazyLock<HashMap<&'static str, f64>> =
    LazyLock::new(|| UNIT_ALIASES.iter().copied().collect());

/// Look up the seconds-per-unit multiplier for a unit token
///
/// Matching is case-insensitive: the token is lowercased before lookup.
///
/// # Arguments
/// * `unit` - The unit token to resolve (e.g., "seconds", "MS", "h")
///
/// # Returns
/// * `Some(multiplier)` if the alias is recognized
/// * `None` otherwise
#[must_use]
pub fn multiplier_for(unit: &str) -> Option<f64> {
    UNIT_MULTIPLIERS.get(unit.to_lowercase().as_str()).copied()
}

/// Comma-separated list of every recognized alias, for error messages
#[must_use]
pub fn supported_units() -> String {
    UNIT_ALIASES
        .iter()
        .map(|(alias, _)| *alias)
        .collect::<Vec<_>>()
        .join(", ")
}
