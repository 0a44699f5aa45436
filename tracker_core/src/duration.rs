//! Duration expressions as sent by the wearable: `45m`, `1h30m`, `1.5h`.
//!
//! Grammar: `[-+]?([0-9]*(\.[0-9]*)?[a-z]+)+`, with units `ns`, `us`
//! (also `µs`/`μs`), `ms`, `s`, `m` and `h`. A bare `0` needs no unit.
//! Values are kept as signed nanoseconds in a [`TimeDelta`] so that
//! negative spans parse and are rejected by the callers' sign checks.

use chrono::TimeDelta;

const NANOS_PER_MINUTE: i64 = 60_000_000_000;
const NANOS_PER_HOUR: i64 = 60 * NANOS_PER_MINUTE;

/// Magnitude limit: 2^63 nanoseconds.
const LIMIT: u64 = 1 << 63;

/// Failure to read a duration expression
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseDurationError {
    /// Malformed text or a value beyond the nanosecond range
    #[error("time: invalid duration {0:?}")]
    Invalid(String),

    /// A number with no unit after it
    #[error("time: missing unit in duration {0:?}")]
    MissingUnit(String),

    /// A unit outside the supported set
    #[error("time: unknown unit {unit:?} in duration {input:?}")]
    UnknownUnit { unit: String, input: String },
}

/// Parse a duration expression into a signed [`TimeDelta`]
///
/// Fractional parts are scaled into nanoseconds and truncated, so `1.5h`
/// is exactly ninety minutes.
pub fn parse_duration(input: &str) -> Result<TimeDelta, ParseDurationError> {
    let invalid = || ParseDurationError::Invalid(input.to_string());

    let mut s = input.as_bytes();
    let mut negative = false;
    if let Some(&sign) = s.first() {
        if sign == b'-' || sign == b'+' {
            negative = sign == b'-';
            s = &s[1..];
        }
    }

    if s == b"0" {
        return Ok(TimeDelta::zero());
    }
    if s.is_empty() {
        return Err(invalid());
    }

    let mut total: u64 = 0;
    while !s.is_empty() {
        if !(s[0] == b'.' || s[0].is_ascii_digit()) {
            return Err(invalid());
        }

        let (mut value, consumed) = leading_int(s).ok_or_else(invalid)?;
        let has_integer = consumed > 0;
        s = &s[consumed..];

        let mut fraction = 0;
        let mut scale = 1.0;
        let mut has_fraction = false;
        if s.first() == Some(&b'.') {
            s = &s[1..];
            let (digits, digits_scale, consumed) = leading_fraction(s);
            fraction = digits;
            scale = digits_scale;
            has_fraction = consumed > 0;
            s = &s[consumed..];
        }
        if !has_integer && !has_fraction {
            return Err(invalid());
        }

        let unit_len = s
            .iter()
            .position(|c| *c == b'.' || c.is_ascii_digit())
            .unwrap_or(s.len());
        if unit_len == 0 {
            return Err(ParseDurationError::MissingUnit(input.to_string()));
        }
        let unit = String::from_utf8_lossy(&s[..unit_len]).into_owned();
        s = &s[unit_len..];

        let unit_nanos = unit_nanos(&unit).ok_or_else(|| ParseDurationError::UnknownUnit {
            unit,
            input: input.to_string(),
        })?;

        if value > LIMIT / unit_nanos {
            return Err(invalid());
        }
        value *= unit_nanos;
        if fraction > 0 {
            value += (fraction as f64 * (unit_nanos as f64 / scale)) as u64;
            if value > LIMIT {
                return Err(invalid());
            }
        }

        total = total.checked_add(value).ok_or_else(invalid)?;
        if total > LIMIT {
            return Err(invalid());
        }
    }

    let nanos = if negative {
        if total == LIMIT {
            i64::MIN
        } else {
            -(total as i64)
        }
    } else {
        i64::try_from(total).map_err(|_| invalid())?
    };

    Ok(TimeDelta::nanoseconds(nanos))
}

/// Duration as fractional hours
pub fn hours(duration: TimeDelta) -> f64 {
    split_float(duration, NANOS_PER_HOUR)
}

/// Duration as fractional minutes
pub fn minutes(duration: TimeDelta) -> f64 {
    split_float(duration, NANOS_PER_MINUTE)
}

// Whole units and remainder are converted separately to keep precision on
// long spans.
fn split_float(duration: TimeDelta, unit: i64) -> f64 {
    let nanos = duration.num_nanoseconds().unwrap_or(if duration < TimeDelta::zero() {
        i64::MIN
    } else {
        i64::MAX
    });
    let whole = nanos / unit;
    let rem = nanos % unit;
    whole as f64 + rem as f64 / unit as f64
}

fn unit_nanos(unit: &str) -> Option<u64> {
    match unit {
        "ns" => Some(1),
        "us" | "µs" | "μs" => Some(1_000),
        "ms" => Some(1_000_000),
        "s" => Some(1_000_000_000),
        "m" => Some(NANOS_PER_MINUTE as u64),
        "h" => Some(NANOS_PER_HOUR as u64),
        _ => None,
    }
}

/// Leading decimal digits; `None` on overflow past 2^63.
fn leading_int(s: &[u8]) -> Option<(u64, usize)> {
    let mut value: u64 = 0;
    let mut consumed = 0;
    for &c in s.iter().take_while(|c| c.is_ascii_digit()) {
        if value > LIMIT / 10 {
            return None;
        }
        value = value * 10 + u64::from(c - b'0');
        if value > LIMIT {
            return None;
        }
        consumed += 1;
    }
    Some((value, consumed))
}

/// Leading fraction digits with their power-of-ten scale. Digits past the
/// representable precision are consumed and dropped.
fn leading_fraction(s: &[u8]) -> (u64, f64, usize) {
    let mut value: u64 = 0;
    let mut scale = 1.0;
    let mut overflow = false;
    let mut consumed = 0;
    for &c in s.iter().take_while(|c| c.is_ascii_digit()) {
        consumed += 1;
        if overflow {
            continue;
        }
        if value > (LIMIT - 1) / 10 {
            overflow = true;
            continue;
        }
        let next = value * 10 + u64::from(c - b'0');
        if next > LIMIT {
            overflow = true;
            continue;
        }
        value = next;
        scale *= 10.0;
    }
    (value, scale, consumed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_units() {
        assert_eq!(parse_duration("45m").unwrap(), TimeDelta::minutes(45));
        assert_eq!(parse_duration("2h").unwrap(), TimeDelta::hours(2));
        assert_eq!(parse_duration("300ms").unwrap(), TimeDelta::milliseconds(300));
        assert_eq!(parse_duration("15s").unwrap(), TimeDelta::seconds(15));
        assert_eq!(parse_duration("7µs").unwrap(), TimeDelta::microseconds(7));
        assert_eq!(parse_duration("7us").unwrap(), TimeDelta::microseconds(7));
        assert_eq!(parse_duration("12ns").unwrap(), TimeDelta::nanoseconds(12));
    }

    #[test]
    fn test_parse_compound_and_fractional() {
        assert_eq!(parse_duration("1h30m").unwrap(), TimeDelta::minutes(90));
        assert_eq!(parse_duration("1.5h").unwrap(), TimeDelta::minutes(90));
        assert_eq!(parse_duration(".5s").unwrap(), TimeDelta::milliseconds(500));
        assert_eq!(parse_duration("1.s").unwrap(), TimeDelta::seconds(1));
        assert_eq!(
            parse_duration("1h2m3s").unwrap(),
            TimeDelta::seconds(3600 + 120 + 3)
        );
    }

    #[test]
    fn test_parse_signs_and_zero() {
        assert_eq!(parse_duration("-30m").unwrap(), TimeDelta::minutes(-30));
        assert_eq!(parse_duration("+30m").unwrap(), TimeDelta::minutes(30));
        assert_eq!(parse_duration("0").unwrap(), TimeDelta::zero());
        assert_eq!(parse_duration("-0").unwrap(), TimeDelta::zero());
        assert_eq!(parse_duration("0s").unwrap(), TimeDelta::zero());
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            parse_duration(""),
            Err(ParseDurationError::Invalid(String::new()))
        );
        assert_eq!(
            parse_duration("abc"),
            Err(ParseDurationError::Invalid("abc".into()))
        );
        assert_eq!(parse_duration("."), Err(ParseDurationError::Invalid(".".into())));
        assert_eq!(parse_duration("-"), Err(ParseDurationError::Invalid("-".into())));
        assert_eq!(
            parse_duration("30"),
            Err(ParseDurationError::MissingUnit("30".into()))
        );
        assert_eq!(
            parse_duration("10x"),
            Err(ParseDurationError::UnknownUnit {
                unit: "x".into(),
                input: "10x".into(),
            })
        );
        assert!(parse_duration("30 m").is_err());
    }

    #[test]
    fn test_parse_range_limits() {
        assert!(parse_duration("2562047h").is_ok());
        assert!(parse_duration("2562048h").is_err());
        assert!(parse_duration("9223372036854775808ns").is_err());
        assert_eq!(
            parse_duration("-9223372036854775808ns").unwrap(),
            TimeDelta::nanoseconds(i64::MIN)
        );
    }

    #[test]
    fn test_error_messages() {
        let err = parse_duration("10x").unwrap_err();
        assert_eq!(err.to_string(), r#"time: unknown unit "x" in duration "10x""#);
        let err = parse_duration("30").unwrap_err();
        assert_eq!(err.to_string(), r#"time: missing unit in duration "30""#);
    }

    #[test]
    fn test_hours_and_minutes() {
        assert_eq!(hours(TimeDelta::minutes(30)), 0.5);
        assert_eq!(hours(TimeDelta::minutes(90)), 1.5);
        assert_eq!(minutes(TimeDelta::seconds(90)), 1.5);
        assert_eq!(minutes(TimeDelta::hours(2)), 120.0);
        assert_eq!(hours(TimeDelta::minutes(-45)), -0.75);
    }
}
