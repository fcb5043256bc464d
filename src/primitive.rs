//! Primitive conversions between leaf tokens and typed values.
//!
//! Leaf slots hold one of four value domains: plain strings, optional unsigned
//! integers, optional decimals, and optional date/times at a declared
//! precision. This module is the single place where tokens cross into and out
//! of those domains.
//!
//! Two rules hold everywhere here:
//!
//! - **Empty means absent.** An empty token parses to `None`, never to a
//!   default numeric value, and `None` renders back to the empty string.
//! - **Rendering is culture-invariant.** Integers and decimals always render
//!   with ASCII digits and `.` as the decimal point; date/times render as
//!   fixed-width digit strings. No locale setting can influence the output.
//!
//! ## Examples
//!
//! ```rust
//! use hl7v2_codec::primitive::{parse_uint, parse_decimal, render_decimal};
//!
//! assert_eq!(parse_uint("42").unwrap(), Some(42));
//! assert_eq!(parse_uint("").unwrap(), None);
//! assert!(parse_uint("abc").is_err());
//!
//! let d = parse_decimal("1234.5").unwrap().unwrap();
//! assert_eq!(render_decimal(Some(d)), "1234.5");
//! ```

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Error, Result};

/// Parses an optional unsigned integer token.
///
/// # Errors
///
/// Returns [`Error::MalformedScalar`] if the token is non-empty and not a
/// valid unsigned integer. The position in the error is filled in by the
/// calling codec.
pub fn parse_uint(token: &str) -> Result<Option<u32>> {
    if token.is_empty() {
        return Ok(None);
    }
    token
        .parse::<u32>()
        .map(Some)
        .map_err(|_| Error::malformed_scalar(0, "unsigned integer", token))
}

/// Renders an optional unsigned integer back to its token form.
#[must_use]
pub fn render_uint(value: Option<u32>) -> String {
    match value {
        Some(n) => n.to_string(),
        None => String::new(),
    }
}

/// Parses an optional decimal token.
///
/// Decimals keep their digits exactly (`"0.10"` stays `0.10`, not `0.1`), so
/// re-rendering reproduces the original token.
///
/// # Errors
///
/// Returns [`Error::MalformedScalar`] if the token is non-empty and not a
/// plain decimal (`[+-]?digits[.digits]`; no exponent, no grouping).
pub fn parse_decimal(token: &str) -> Result<Option<Decimal>> {
    if token.is_empty() {
        return Ok(None);
    }
    token
        .parse::<Decimal>()
        .map(Some)
        .map_err(|_| Error::malformed_scalar(0, "decimal", token))
}

/// Renders an optional decimal back to its token form, always with `.` as the
/// decimal point.
#[must_use]
pub fn render_decimal(value: Option<Decimal>) -> String {
    match value {
        Some(d) => d.to_string(),
        None => String::new(),
    }
}

/// How much of a date/time a timestamp token carries.
///
/// The wire format is a fixed-width digit string that grows to the right:
/// `YYYY`, `YYYYMM`, `YYYYMMDD`, `YYYYMMDDHHMM`, or `YYYYMMDDHHMMSS`.
///
/// # Examples
///
/// ```rust
/// use hl7v2_codec::TimePrecision;
///
/// assert_eq!(TimePrecision::Day.width(), 8);
/// assert_eq!(TimePrecision::from_width(14), Some(TimePrecision::Second));
/// assert!(TimePrecision::Year < TimePrecision::Minute);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TimePrecision {
    Year,
    Month,
    Day,
    Minute,
    Second,
}

impl TimePrecision {
    /// The token width (digit count) for this precision.
    #[must_use]
    pub const fn width(self) -> usize {
        match self {
            TimePrecision::Year => 4,
            TimePrecision::Month => 6,
            TimePrecision::Day => 8,
            TimePrecision::Minute => 12,
            TimePrecision::Second => 14,
        }
    }

    /// Maps a token width back to a precision, if the width is one of the
    /// five valid ones.
    #[must_use]
    pub const fn from_width(width: usize) -> Option<Self> {
        match width {
            4 => Some(TimePrecision::Year),
            6 => Some(TimePrecision::Month),
            8 => Some(TimePrecision::Day),
            12 => Some(TimePrecision::Minute),
            14 => Some(TimePrecision::Second),
            _ => None,
        }
    }
}

/// A decoded date/time value together with the precision it actually carried.
///
/// A slot declares the *maximum* precision it accepts; real-world tokens are
/// often shallower (a birth date in a timestamp-capable slot, say). The
/// decoded value remembers its own precision so re-encoding reproduces the
/// original width.
///
/// # Examples
///
/// ```rust
/// use hl7v2_codec::{Timestamp, TimePrecision};
///
/// let ts = Timestamp::parse("20240607", TimePrecision::Second).unwrap().unwrap();
/// assert_eq!(ts.precision, TimePrecision::Day);
/// assert_eq!(ts.render(), "20240607");
///
/// let ts = Timestamp::parse("20240607131500", TimePrecision::Second).unwrap().unwrap();
/// assert_eq!(ts.render(), "20240607131500");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timestamp {
    /// The instant, with unspecified parts defaulted (January, day 1, 00:00:00).
    pub at: NaiveDateTime,
    /// The precision the token actually carried.
    pub precision: TimePrecision,
}

impl Timestamp {
    /// Builds a timestamp from an instant and an explicit precision.
    ///
    /// Parts of `at` finer than `precision` are ignored when rendering.
    #[must_use]
    pub fn new(at: NaiveDateTime, precision: TimePrecision) -> Self {
        Timestamp { at, precision }
    }

    /// Parses an optional timestamp token against the slot's maximum precision.
    ///
    /// An empty token is absent. A non-empty token must be all ASCII digits,
    /// its width must be one of the five valid widths, the implied precision
    /// must not exceed `max`, and the digit groups must form a real calendar
    /// date and clock time.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedScalar`] otherwise (position filled in by the
    /// calling codec).
    pub fn parse(token: &str, max: TimePrecision) -> Result<Option<Self>> {
        if token.is_empty() {
            return Ok(None);
        }
        let malformed = || Error::malformed_scalar(0, "timestamp", token);
        if !token.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }
        let precision = TimePrecision::from_width(token.len()).ok_or_else(malformed)?;
        if precision > max {
            return Err(malformed());
        }

        let digits = |range: std::ops::Range<usize>| -> u32 {
            // Slicing is in range: width was validated against the precision.
            token[range].parse().unwrap_or(0)
        };
        let year = token[0..4].parse::<i32>().map_err(|_| malformed())?;
        let month = if precision >= TimePrecision::Month { digits(4..6) } else { 1 };
        let day = if precision >= TimePrecision::Day { digits(6..8) } else { 1 };
        let (hour, minute) = if precision >= TimePrecision::Minute {
            (digits(8..10), digits(10..12))
        } else {
            (0, 0)
        };
        let second = if precision >= TimePrecision::Second { digits(12..14) } else { 0 };

        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(malformed)?;
        let at = date
            .and_hms_opt(hour, minute, second)
            .ok_or_else(malformed)?;
        Ok(Some(Timestamp { at, precision }))
    }

    /// Renders this timestamp as a fixed-width digit string at its own
    /// precision.
    #[must_use]
    pub fn render(&self) -> String {
        let d = self.at;
        match self.precision {
            TimePrecision::Year => format!("{:04}", d.year()),
            TimePrecision::Month => format!("{:04}{:02}", d.year(), d.month()),
            TimePrecision::Day => format!("{:04}{:02}{:02}", d.year(), d.month(), d.day()),
            TimePrecision::Minute => format!(
                "{:04}{:02}{:02}{:02}{:02}",
                d.year(),
                d.month(),
                d.day(),
                d.hour(),
                d.minute()
            ),
            TimePrecision::Second => format!(
                "{:04}{:02}{:02}{:02}{:02}{:02}",
                d.year(),
                d.month(),
                d.day(),
                d.hour(),
                d.minute(),
                d.second()
            ),
        }
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Renders an optional timestamp back to its token form.
#[must_use]
pub fn render_timestamp(value: Option<&Timestamp>) -> String {
    match value {
        Some(ts) => ts.render(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uint_roundtrip() {
        assert_eq!(parse_uint("0").unwrap(), Some(0));
        assert_eq!(render_uint(Some(42)), "42");
        assert_eq!(render_uint(None), "");
    }

    #[test]
    fn test_uint_rejects_junk() {
        assert!(parse_uint("1.5").is_err());
        assert!(parse_uint("-1").is_err());
        assert!(parse_uint(" 1").is_err());
    }

    #[test]
    fn test_decimal_keeps_scale() {
        let d = parse_decimal("0.10").unwrap().unwrap();
        assert_eq!(render_decimal(Some(d)), "0.10");
    }

    #[test]
    fn test_decimal_rejects_comma() {
        assert!(parse_decimal("12,5").is_err());
    }

    #[test]
    fn test_timestamp_widths() {
        for (token, precision) in [
            ("1999", TimePrecision::Year),
            ("199912", TimePrecision::Month),
            ("19991231", TimePrecision::Day),
            ("199912312359", TimePrecision::Minute),
            ("19991231235959", TimePrecision::Second),
        ] {
            let ts = Timestamp::parse(token, TimePrecision::Second)
                .unwrap()
                .unwrap();
            assert_eq!(ts.precision, precision);
            assert_eq!(ts.render(), token);
        }
    }

    #[test]
    fn test_timestamp_rejects_overlong_for_slot() {
        assert!(Timestamp::parse("19991231", TimePrecision::Month).is_err());
    }

    #[test]
    fn test_timestamp_rejects_odd_width() {
        assert!(Timestamp::parse("199", TimePrecision::Second).is_err());
        assert!(Timestamp::parse("1999123", TimePrecision::Second).is_err());
    }

    #[test]
    fn test_timestamp_rejects_impossible_date() {
        assert!(Timestamp::parse("19990231", TimePrecision::Day).is_err());
        assert!(Timestamp::parse("199913", TimePrecision::Month).is_err());
    }

    #[test]
    fn test_timestamp_empty_is_absent() {
        assert_eq!(Timestamp::parse("", TimePrecision::Second).unwrap(), None);
    }
}
