//! Natural-language duration string parsing
//!
//! Accepts a single `<number> <unit>` pair like `"5 seconds"`, `"1.5h"`,
//! or `"250 ms"`. The numeric literal may use underscore digit-group
//! separators (`"1_000"`) and a leading decimal point (`".5"`); scientific
//! notation, commas, negative values, and multi-unit strings are rejected.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ParseDurationError;
use crate::units::multiplier_for;

/// Grammar for a duration string: optional minus sign, a numeric literal
/// (optional integer part, optional decimal point, optional underscore
/// separators, at least one digit overall), optional whitespace, then an
/// alphabetic unit token and nothing else. No exponent support.
static DURATION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(-?)(\d*\.?\d[\d_]*)\s*([a-zA-Z]+)\s*$").expect("duration pattern is valid")
});

/// Parse a natural-language duration string into a seconds value
///
/// # Arguments
/// * `input` - The text to parse (e.g., "5 seconds", "1.5h")
///
/// # Errors
///
/// Returns a `ParseDurationError` variant describing the failure: malformed
/// shape, negative value, non-finite number, or unrecognized unit.
pub(crate) fn parse_seconds(input: &str) -> Result<f64, ParseDurationError> {
    let trimmed = input.trim();

    let Some(captures) = DURATION_PATTERN.captures(trimmed) else {
        return Err(ParseDurationError::InvalidFormat(input.to_string()));
    };

    let minus_sign = &captures[1];
    let number = &captures[2];
    let unit = &captures[3];

    if !minus_sign.is_empty() {
        return Err(ParseDurationError::Negative(input.to_string()));
    }

    // The grammar never matches a comma; this guard keeps "1,000" from
    // slipping through should the pattern ever be relaxed.
    if number.contains(',') {
        return Err(ParseDurationError::CommaSeparators(number.to_string()));
    }

    let value: f64 = number
        .replace('_', "")
        .parse()
        .map_err(|_| ParseDurationError::InvalidNumber(number.to_string()))?;
    if !value.is_finite() {
        return Err(ParseDurationError::InvalidNumber(number.to_string()));
    }

    let Some(multiplier) = multiplier_for(unit) else {
        return Err(ParseDurationError::UnknownUnit(unit.to_string()));
    };

    Ok(value * multiplier)
}
