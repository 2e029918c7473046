use chrono::{DateTime, Datelike, NaiveDate, Utc};
use regex::Regex;

/// "YYYY-MM" with a real month number (01..12).
pub fn is_valid_key(s: &str) -> bool {
    let re = Regex::new(r"^\d{4}-\d{2}$").unwrap();
    re.is_match(s) && parse_key(s).is_some()
}

pub fn parse_key(s: &str) -> Option<(i32, u32)> {
    let (y, m) = s.split_once('-')?;
    let year: i32 = y.parse().ok()?;
    let month: u32 = m.parse().ok()?;
    (1..=12).contains(&month).then_some((year, month))
}

/// Month key for a unix-seconds timestamp, in UTC.
pub fn key_for_timestamp(secs: i64) -> Option<String> {
    let dt = DateTime::<Utc>::from_timestamp(secs, 0)?;
    Some(format!("{:04}-{:02}", dt.year(), dt.month()))
}

/// Half-open unix-seconds range [first day of the month 00:00 UTC, first day
/// of the next month 00:00 UTC). The exclusive upper bound keeps end-of-month
/// transactions out of the next month regardless of day length.
pub fn bounds(month_key: &str) -> Option<(i64, i64)> {
    let (year, month) = parse_key(month_key)?;
    let start = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    let lo = start.and_hms_opt(0, 0, 0)?.and_utc().timestamp();
    let hi = next.and_hms_opt(0, 0, 0)?.and_utc().timestamp();
    Some((lo, hi))
}

/// The month key `n` months before the given one.
pub fn key_minus_months(month_key: &str, n: u32) -> Option<String> {
    let (year, month) = parse_key(month_key)?;
    let total = year as i64 * 12 + (month as i64 - 1) - n as i64;
    let y = total.div_euclid(12);
    let m = total.rem_euclid(12) + 1;
    Some(format!("{:04}-{:02}", y, m))
}

/// Full month name ("January", ...) for display in insight messages.
pub fn display_name(month_key: &str) -> Option<String> {
    let (year, month) = parse_key(month_key)?;
    let date = NaiveDate::from_ymd_opt(year, month, 1)?;
    Some(date.format("%B").to_string())
}
