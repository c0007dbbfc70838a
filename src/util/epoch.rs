// logtriage - util/epoch.rs
//
// Unix epoch to UTC datetime conversion. Pure, stateless, single-field
// transform; lives alongside the engine as a standalone helper.

use crate::util::constants::EPOCH_MILLIS_THRESHOLD;
use crate::util::error::EpochError;
use chrono::{DateTime, Utc};

/// Convert a raw epoch string to a UTC datetime.
///
/// Accepts integer seconds with an optional fractional part
/// (e.g. `1584542430` or `1584542430.125`). Integer values at or above
/// [`EPOCH_MILLIS_THRESHOLD`] are interpreted as milliseconds, so both
/// `1584542430` and `1584542430000` resolve to the same instant.
/// Negative values (pre-1970) are accepted.
pub fn epoch_to_utc(raw: &str) -> Result<DateTime<Utc>, EpochError> {
    let trimmed = raw.trim();

    let (int_part, frac_part) = match trimmed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (trimmed, None),
    };

    let value: i64 = int_part
        .parse()
        .map_err(|_| EpochError::InvalidNumber {
            input: raw.to_string(),
        })?;

    // checked_abs: i64::MIN has no positive counterpart; treat it as
    // millisecond-magnitude (it is) rather than panicking.
    let (secs, mut nanos) = if value.checked_abs().unwrap_or(i64::MAX) >= EPOCH_MILLIS_THRESHOLD {
        // Millisecond-magnitude input. div_euclid/rem_euclid keep the
        // nanosecond component non-negative for pre-1970 values.
        (
            value.div_euclid(1_000),
            (value.rem_euclid(1_000) as u32) * 1_000_000,
        )
    } else {
        (value, 0)
    };

    if let Some(frac) = frac_part {
        nanos += parse_fraction_nanos(frac).ok_or_else(|| EpochError::InvalidNumber {
            input: raw.to_string(),
        })?;
    }

    DateTime::from_timestamp(secs, nanos).ok_or_else(|| EpochError::OutOfRange {
        input: raw.to_string(),
    })
}

/// Parse a fractional-seconds string (digits after the dot) to nanoseconds.
/// Truncates beyond 9 digits of precision. Returns None for non-digit input
/// or an empty fraction.
fn parse_fraction_nanos(frac: &str) -> Option<u32> {
    if frac.is_empty() || !frac.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let mut nanos: u32 = 0;
    for (i, b) in frac.bytes().take(9).enumerate() {
        nanos += (b - b'0') as u32 * 10u32.pow(8 - i as u32);
    }
    Some(nanos)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch_seconds() {
        let dt = epoch_to_utc("1584542430").unwrap();
        assert_eq!(
            dt.format("%Y-%m-%d %H:%M:%S").to_string(),
            "2020-03-18 14:40:30"
        );
    }

    #[test]
    fn test_epoch_milliseconds_auto_scaled() {
        let dt = epoch_to_utc("1584542430125").unwrap();
        assert_eq!(
            dt.format("%Y-%m-%d %H:%M:%S%.3f").to_string(),
            "2020-03-18 14:40:30.125"
        );
    }

    #[test]
    fn test_epoch_fractional_seconds() {
        let dt = epoch_to_utc("1584542430.5").unwrap();
        assert_eq!(
            dt.format("%Y-%m-%d %H:%M:%S%.1f").to_string(),
            "2020-03-18 14:40:30.5"
        );
    }

    #[test]
    fn test_epoch_negative_pre_1970() {
        let dt = epoch_to_utc("-86400").unwrap();
        assert_eq!(dt.format("%Y-%m-%d").to_string(), "1969-12-31");
    }

    #[test]
    fn test_epoch_whitespace_trimmed() {
        assert!(epoch_to_utc("  1584542430  ").is_ok());
    }

    #[test]
    fn test_epoch_invalid_input() {
        assert!(matches!(
            epoch_to_utc("not-a-number"),
            Err(EpochError::InvalidNumber { .. })
        ));
        assert!(matches!(
            epoch_to_utc(""),
            Err(EpochError::InvalidNumber { .. })
        ));
        assert!(matches!(
            epoch_to_utc("15.ab"),
            Err(EpochError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn test_epoch_out_of_range() {
        // i64::MAX seconds is far outside chrono's representable range.
        assert!(matches!(
            epoch_to_utc("9223372036854775"),
            Err(EpochError::OutOfRange { .. })
        ));
    }
}
