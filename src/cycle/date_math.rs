//! Day-granularity date arithmetic
//!
//! All functions here are pure and operate on [`NaiveDate`], so there is no
//! time-of-day or timezone component to get in the way of calendar math.

use chrono::{Datelike, Days, NaiveDate};
use thiserror::Error;

/// Error returned by [`from_iso`] for malformed `YYYY-MM-DD` strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input did not split into exactly three `-` separated segments.
    #[error("invalid date '{input}': expected YYYY-MM-DD, found {segments} segment(s)")]
    SegmentCount {
        /// The rejected input.
        input: String,
        /// Number of segments found.
        segments: usize,
    },

    /// One of the segments is not a number.
    #[error("invalid date '{input}': segment '{segment}' is not numeric")]
    NotNumeric {
        /// The rejected input.
        input: String,
        /// The offending segment.
        segment: String,
    },

    /// The segments are numeric but do not name a real calendar day.
    #[error("invalid date '{input}': {year}-{month}-{day} is not a calendar date")]
    OutOfRange {
        /// The rejected input.
        input: String,
        year: i32,
        month: u32,
        day: u32,
    },
}

/// Add `days` (possibly negative) to `date`, or `None` if the result falls
/// outside the range chrono can represent.
pub fn try_add_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    if days >= 0 {
        date.checked_add_days(Days::new(days.unsigned_abs()))
    } else {
        date.checked_sub_days(Days::new(days.unsigned_abs()))
    }
}

/// Add `days` (possibly negative) to `date`, rolling across month and year
/// boundaries.
///
/// Saturates at [`NaiveDate::MIN`] / [`NaiveDate::MAX`] instead of panicking.
pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    try_add_days(date, days).unwrap_or(if days >= 0 {
        NaiveDate::MAX
    } else {
        NaiveDate::MIN
    })
}

/// True if both values fall on the same calendar day.
///
/// Works across chrono types, so a `NaiveDateTime` for "now" can be compared
/// with a grid `NaiveDate` directly.
pub fn is_same_day<A: Datelike, B: Datelike>(a: &A, b: &B) -> bool {
    a.year() == b.year() && a.month() == b.month() && a.day() == b.day()
}

/// Format as zero-padded `YYYY-MM-DD`.
pub fn to_iso(date: NaiveDate) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

/// Parse a `YYYY-MM-DD` string.
///
/// Surrounding whitespace is ignored. Segments need not be zero padded
/// (`2025-1-5` is accepted), but impossible dates such as `2025-02-30` are
/// rejected rather than rolled over into the next month.
pub fn from_iso(input: &str) -> Result<NaiveDate, ParseError> {
    let trimmed = input.trim();
    // A leading sign belongs to the year, not to a separator
    let (sign, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let segments: Vec<&str> = unsigned.split('-').collect();
    if segments.len() != 3 {
        return Err(ParseError::SegmentCount {
            input: input.to_string(),
            segments: segments.len(),
        });
    }

    let not_numeric = |segment: &str| ParseError::NotNumeric {
        input: input.to_string(),
        segment: segment.to_string(),
    };

    if segments[0].starts_with(['+', '-']) {
        return Err(not_numeric(segments[0]));
    }
    let year: i32 = segments[0]
        .parse::<i32>()
        .map_err(|_| not_numeric(segments[0]))?
        * sign;
    let month: u32 = segments[1].parse().map_err(|_| not_numeric(segments[1]))?;
    let day: u32 = segments[2].parse().map_err(|_| not_numeric(segments[2]))?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| ParseError::OutOfRange {
        input: input.to_string(),
        year,
        month,
        day,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn add_days_rolls_over_month_end() {
        assert_eq!(add_days(ymd(2025, 1, 31), 1), ymd(2025, 2, 1));
    }

    #[test]
    fn add_days_rolls_over_year_end_backwards() {
        assert_eq!(add_days(ymd(2025, 1, 1), -1), ymd(2024, 12, 31));
        assert_eq!(add_days(ymd(2025, 1, 1), -28), ymd(2024, 12, 4));
    }

    #[test]
    fn add_days_handles_leap_february() {
        assert_eq!(add_days(ymd(2024, 2, 28), 1), ymd(2024, 2, 29));
        assert_eq!(add_days(ymd(2025, 2, 28), 1), ymd(2025, 3, 1));
    }

    #[test]
    fn add_days_saturates_instead_of_panicking() {
        assert_eq!(add_days(NaiveDate::MAX, 1), NaiveDate::MAX);
        assert_eq!(add_days(NaiveDate::MIN, -1), NaiveDate::MIN);
        assert_eq!(try_add_days(NaiveDate::MAX, 1), None);
        assert_eq!(add_days(ymd(2025, 1, 1), i64::MIN), NaiveDate::MIN);
    }

    #[test]
    fn same_day_ignores_time_of_day() {
        let date = ymd(2025, 3, 9);
        let evening = date.and_hms_opt(23, 59, 0).unwrap();
        assert!(is_same_day(&date, &evening));
        assert!(!is_same_day(&date, &ymd(2025, 3, 10)));
    }

    #[test]
    fn iso_is_zero_padded() {
        assert_eq!(to_iso(ymd(2025, 1, 5)), "2025-01-05");
        assert_eq!(to_iso(ymd(987, 11, 30)), "0987-11-30");
    }

    #[test]
    fn from_iso_accepts_unpadded_segments() {
        assert_eq!(from_iso("2025-1-5"), Ok(ymd(2025, 1, 5)));
        assert_eq!(from_iso(" 2025-01-05\n"), Ok(ymd(2025, 1, 5)));
    }

    #[test]
    fn from_iso_rejects_wrong_segment_count() {
        assert!(matches!(
            from_iso("2025-01"),
            Err(ParseError::SegmentCount { segments: 2, .. })
        ));
        assert!(matches!(
            from_iso(""),
            Err(ParseError::SegmentCount { segments: 1, .. })
        ));
        assert!(matches!(
            from_iso("2025-01-01-01"),
            Err(ParseError::SegmentCount { segments: 4, .. })
        ));
    }

    #[test]
    fn from_iso_rejects_non_numeric_segments() {
        let err = from_iso("2025-ab-01").unwrap_err();
        assert_eq!(
            err,
            ParseError::NotNumeric {
                input: "2025-ab-01".to_string(),
                segment: "ab".to_string(),
            }
        );
        assert_eq!(
            err.to_string(),
            "invalid date '2025-ab-01': segment 'ab' is not numeric"
        );
        assert!(from_iso("2025--01").is_err());
    }

    #[test]
    fn from_iso_rejects_impossible_dates() {
        assert!(matches!(
            from_iso("2025-02-30"),
            Err(ParseError::OutOfRange { month: 2, day: 30, .. })
        ));
        assert!(from_iso("2025-13-01").is_err());
    }

    #[test]
    fn from_iso_reads_signed_years() {
        assert_eq!(from_iso("-005-03-01"), Ok(ymd(-5, 3, 1)));
        assert_eq!(from_iso("+2025-03-01"), Ok(ymd(2025, 3, 1)));
        assert!(from_iso("--5-03-01").is_err());
        assert!(from_iso("-+5-03-01").is_err());
    }

    #[test]
    fn iso_round_trip_at_calendar_limits() {
        for date in [
            ymd(-5, 3, 1),
            ymd(0, 2, 29),
            ymd(10000, 1, 1),
            NaiveDate::MIN,
            NaiveDate::MAX,
            add_days(ymd(2025, 1, 1), i64::MIN),
        ] {
            assert_eq!(from_iso(&to_iso(date)), Ok(date), "{}", to_iso(date));
        }
    }

    #[test]
    fn iso_round_trip_across_a_leap_year() {
        let mut date = ymd(2023, 12, 25);
        for _ in 0..400 {
            assert_eq!(from_iso(&to_iso(date)), Ok(date));
            date = add_days(date, 1);
        }
    }
}
