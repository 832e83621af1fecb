//! Excel serial date numbers
//!
//! Excel stores dates as serial numbers (days since a base date, time as the
//! fractional part). In the 1900 date system, Excel includes the historical
//! "1900 leap year" bug: the non-existent day 1900-02-29 is serial 60, so
//! every date from 1900-03-01 on is one day ahead of a plain day count.

use chrono::{NaiveDate, NaiveDateTime, Timelike};

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Convert a date/time to an Excel serial number (1900 date system).
///
/// Returns `None` for dates Excel cannot represent (before 1900-01-01 or
/// after 9999-12-31).
pub fn excel_serial(dt: NaiveDateTime) -> Option<f64> {
    let date = dt.date();
    let first = NaiveDate::from_ymd_opt(1900, 1, 1)?;
    let last = NaiveDate::from_ymd_opt(9999, 12, 31)?;
    if date < first || date > last {
        return None;
    }

    let leap_bug_start = NaiveDate::from_ymd_opt(1900, 3, 1)?;
    let base = if date >= leap_bug_start {
        NaiveDate::from_ymd_opt(1899, 12, 30)?
    } else {
        NaiveDate::from_ymd_opt(1899, 12, 31)?
    };

    let days = (date - base).num_days() as f64;
    let time = dt.time();
    let seconds = time.num_seconds_from_midnight() as f64 + time.nanosecond() as f64 / 1e9;
    Some(days + seconds / SECONDS_PER_DAY)
}
