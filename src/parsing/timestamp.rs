//! Timestamp normalization.
//!
//! Converts the raw date/time string pair captured by the line matchers
//! into a canonical [`DateTime<Utc>`]. Exports never carry a timezone, so
//! the naive wall-clock values are taken as UTC.
//!
//! Date order is day-first unconditionally (the international default for
//! chat exports). Month-first exports without an AM/PM marker are a known
//! ambiguity and parse to the wrong calendar day, or to `None` when the
//! day lands out of range in the month slot.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use tracing::debug;

/// Normalizes a raw date/time string pair into a canonical timestamp.
///
/// Accepted date separators are `/`, `.` and `-`; the three numeric parts
/// are read as day/month/year, with two-digit years mapped into 2000+.
/// The time is `hours:minutes[:seconds]` with an optional case-insensitive
/// `AM`/`PM` suffix; seconds default to 0.
///
/// Returns `None` on any failure. The failure is logged, never raised:
/// a record with an unnormalizable timestamp still participates in plain
/// counters, it is just excluded from time-bucketed statistics.
///
/// # Example
///
/// ```
/// use chatlens::parsing::normalize_timestamp;
/// use chrono::Timelike;
///
/// let ts = normalize_timestamp("24/03/24", "10:15 PM").unwrap();
/// assert_eq!(ts.hour(), 22);
/// assert!(normalize_timestamp("not a date", "10:15").is_none());
/// ```
pub fn normalize_timestamp(date_str: &str, time_str: &str) -> Option<DateTime<Utc>> {
    match parse_parts(date_str, time_str) {
        Some(ts) => Some(ts),
        None => {
            debug!(date = date_str, time = time_str, "unparseable timestamp");
            None
        }
    }
}

fn parse_parts(date_str: &str, time_str: &str) -> Option<DateTime<Utc>> {
    // Normalize date separators, then read day/month/year.
    let normalized = date_str.replace(['.', '-'], "/");
    let mut parts = normalized.split('/');

    let day: u32 = parts.next()?.trim().parse().ok()?;
    let month: u32 = parts.next()?.trim().parse().ok()?;
    let mut year: i32 = parts.next()?.trim().parse().ok()?;
    if parts.next().is_some() {
        return None;
    }

    if year < 100 {
        year += 2000;
    }

    let (hours, minutes, seconds) = parse_time(time_str)?;

    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    let time = NaiveTime::from_hms_opt(hours, minutes, seconds)?;
    Some(date.and_time(time).and_utc())
}

/// Splits `hh:mm[:ss]` with an optional meridiem suffix into components,
/// applying the 12-hour adjustment.
fn parse_time(time_str: &str) -> Option<(u32, u32, u32)> {
    let lower = time_str.to_lowercase();
    let is_pm = lower.contains("pm");
    let is_am = lower.contains("am");

    let cleaned = lower.replace("am", "").replace("pm", "");
    let cleaned = cleaned.trim();

    let mut pieces = cleaned.split(':');
    let mut hours: u32 = pieces.next()?.trim().parse().ok()?;
    let minutes: u32 = pieces.next()?.trim().parse().ok()?;
    let seconds: u32 = match pieces.next() {
        Some(s) => s.trim().parse().ok()?,
        None => 0,
    };

    if is_pm && hours < 12 {
        hours += 12;
    }
    if is_am && hours == 12 {
        hours = 0;
    }

    Some((hours, minutes, seconds))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_slash_date_with_seconds() {
        let ts = normalize_timestamp("01/01/24", "10:00:00").unwrap();
        assert_eq!(ts.year(), 2024);
        assert_eq!(ts.month(), 1);
        assert_eq!(ts.day(), 1);
        assert_eq!(ts.hour(), 10);
        assert_eq!(ts.second(), 0);
    }

    #[test]
    fn test_day_first_order() {
        // 24/03 can only be day-first; verify the assignment
        let ts = normalize_timestamp("24/03/24", "10:15:30").unwrap();
        assert_eq!(ts.day(), 24);
        assert_eq!(ts.month(), 3);
    }

    #[test]
    fn test_dot_and_dash_separators() {
        let dot = normalize_timestamp("15.01.24", "09:05").unwrap();
        let dash = normalize_timestamp("15-01-24", "09:05").unwrap();
        assert_eq!(dot, dash);
        assert_eq!(dot.day(), 15);
    }

    #[test]
    fn test_two_digit_year_maps_to_2000s() {
        let ts = normalize_timestamp("01/01/99", "00:00").unwrap();
        assert_eq!(ts.year(), 2099);
    }

    #[test]
    fn test_four_digit_year_unchanged() {
        let ts = normalize_timestamp("01/01/2019", "00:00").unwrap();
        assert_eq!(ts.year(), 2019);
    }

    #[test]
    fn test_missing_seconds_default_zero() {
        let ts = normalize_timestamp("01/01/24", "10:30").unwrap();
        assert_eq!(ts.second(), 0);
    }

    #[test]
    fn test_pm_adjustment() {
        let ts = normalize_timestamp("24/03/24", "10:15 PM").unwrap();
        assert_eq!(ts.hour(), 22);
    }

    #[test]
    fn test_noon_stays_twelve() {
        let ts = normalize_timestamp("24/03/24", "12:00 PM").unwrap();
        assert_eq!(ts.hour(), 12);
    }

    #[test]
    fn test_midnight_becomes_zero() {
        let ts = normalize_timestamp("24/03/24", "12:00 AM").unwrap();
        assert_eq!(ts.hour(), 0);
    }

    #[test]
    fn test_meridiem_case_insensitive() {
        let ts = normalize_timestamp("24/03/24", "1:05pm").unwrap();
        assert_eq!(ts.hour(), 13);
    }

    #[test]
    fn test_garbage_is_invalid() {
        assert!(normalize_timestamp("not a date", "10:15").is_none());
        assert!(normalize_timestamp("01/01/24", "not a time").is_none());
        assert!(normalize_timestamp("", "").is_none());
    }

    #[test]
    fn test_out_of_range_is_invalid() {
        // No JS-style rollover: month 13 is a parse failure, not January
        assert!(normalize_timestamp("01/13/24", "10:00").is_none());
        assert!(normalize_timestamp("32/01/24", "10:00").is_none());
        assert!(normalize_timestamp("01/01/24", "25:00").is_none());
        assert!(normalize_timestamp("01/01/24", "10:61").is_none());
    }

    #[test]
    fn test_two_part_date_is_invalid() {
        assert!(normalize_timestamp("01/24", "10:00").is_none());
        assert!(normalize_timestamp("01/01/24/05", "10:00").is_none());
    }
}
