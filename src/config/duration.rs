//! Parsing of duration flags such as `30s` or `1m30s`.

use std::time::Duration;

use super::ConfigError;

/// Nanoseconds per unit suffix. Longer suffixes come first so that `ms`
/// is not read as `m`.
const UNITS: [(&str, f64); 8] = [
    ("ns", 1.0),
    ("us", 1e3),
    ("µs", 1e3),
    ("μs", 1e3),
    ("ms", 1e6),
    ("s", 1e9),
    ("m", 60e9),
    ("h", 3600e9),
];

/// Largest number of nanoseconds a [`Duration`] is built from.
#[allow(clippy::cast_precision_loss)]
const MAX_NANOS: f64 = u64::MAX as f64;

/// Parses a duration made of one or more `<number><unit>` terms.
///
/// Numbers may have a fractional part. Units are `ns`, `us` (or `µs`),
/// `ms`, `s`, `m` and `h`. A zero duration is rejected because it would
/// cancel the request before it starts.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidDuration`] if the input is empty, has a
/// term without a unit, uses an unknown unit, or adds up to zero.
pub fn parse_duration(input: &str) -> Result<Duration, ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidDuration {
        field: "timeout",
        reason: format!("{reason} in {input:?}"),
    };

    let mut rest = input.trim();
    if rest.is_empty() {
        return Err(invalid("empty duration"));
    }

    let mut total_nanos = 0.0_f64;
    while !rest.is_empty() {
        let number_len = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(rest.len());
        let (number, tail) = rest.split_at(number_len);
        if number.is_empty() || number == "." {
            return Err(invalid("expected a number"));
        }
        let value: f64 = number.parse().map_err(|_| invalid("malformed number"))?;

        let (unit, scale) = UNITS
            .iter()
            .find(|(suffix, _)| tail.starts_with(suffix))
            .ok_or_else(|| invalid("missing or unknown unit"))?;

        total_nanos += value * scale;
        rest = &tail[unit.len()..];
    }

    if total_nanos < 1.0 {
        return Err(invalid("duration must be greater than zero"));
    }
    if total_nanos >= MAX_NANOS {
        return Err(invalid("duration is too large"));
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let nanos = total_nanos.round() as u64;
    Ok(Duration::from_nanos(nanos))
}
