//! Calendar math
//!
//! Validation, age decomposition, elapsed totals and next-birthday resolution.
//!
//! Chrono has no year/month/day difference (the equivalent of a
//! `relativedelta`), so the borrowing rules are implemented here:
//!   - day underflow borrows the length of the month before today
//!   - month underflow borrows twelve months from the years
//!   - a birth day missing from a shorter month is that month's last day
//!     (Jan 31 has its monthly anniversary on Feb 28/29, Feb 29 on Feb 28)
//!
//! Everything except [`validate_birth_date`] assumes the birth date has
//! already been validated against the same reference instant.

use chrono::{Datelike, Months, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use tracing::debug;

use crate::error::InvalidReason;
use crate::types::{AgeParts, Countdown, ElapsedTotals, NextBirthday};

/// Oldest accepted birth date, in years before the reference instant
pub const MAX_AGE_YEARS: u32 = 130;

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;

/// Parse a `YYYY-MM-DD` date, ignoring surrounding whitespace
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok()
}

/// Check that a candidate birth date is present, not in the future and not
/// more than [`MAX_AGE_YEARS`] before `now`.
pub fn validate_birth_date(
    candidate: Option<NaiveDate>,
    now: NaiveDateTime,
) -> Result<(), InvalidReason> {
    let Some(date) = candidate else {
        return reject(InvalidReason::MissingDate);
    };

    if date > now.date() {
        return reject(InvalidReason::FutureDate);
    }

    // No oldest bound means `now - 130y` is before chrono's supported range
    if let Some(oldest) = now.checked_sub_months(Months::new(MAX_AGE_YEARS * 12)) {
        if date.and_time(NaiveTime::MIN) < oldest {
            return reject(InvalidReason::Unrealistic);
        }
    }

    Ok(())
}

fn reject(reason: InvalidReason) -> Result<(), InvalidReason> {
    debug!(reason = reason.as_str(), "birth date rejected");
    Err(reason)
}

/// Decompose the age at `now` into calendar years, months and days
pub fn age_parts(birth: NaiveDate, now: NaiveDateTime) -> AgeParts {
    let today = now.date();

    let mut years = today.year() - birth.year();
    let mut months = today.month() as i32 - birth.month() as i32;
    let mut days = today.day() as i32 - birth.day() as i32;

    // Fix day underflow
    if days < 0 {
        months -= 1;

        let (prev_year, prev_month) = previous_month(today.year(), today.month());
        let days_in_prev_month = days_in_month(prev_year, prev_month);
        // A month-end birth day missing from the borrowed month counts as its last day
        let prev_anniversary_day = birth.day().min(days_in_prev_month);
        days = (days_in_prev_month - prev_anniversary_day + today.day()) as i32;
    }

    // Fix month underflow
    if months < 0 {
        years -= 1;
        months += 12;
    }

    AgeParts {
        years: u32::try_from(years).unwrap_or(0),
        months: u32::try_from(months).unwrap_or(0),
        days: u32::try_from(days).unwrap_or(0),
    }
}

/// Whole units elapsed between birth-day midnight and `now`, truncated
pub fn elapsed_totals(birth_midnight: NaiveDateTime, now: NaiveDateTime) -> ElapsedTotals {
    let millis = (now - birth_midnight).num_milliseconds().max(0);
    let total_seconds = millis / 1000;

    ElapsedTotals {
        total_days: total_seconds / SECONDS_PER_DAY,
        total_hours: total_seconds / SECONDS_PER_HOUR,
        total_minutes: total_seconds / SECONDS_PER_MINUTE,
        total_seconds,
    }
}

/// Resolve the nearest birthday on or after today's date.
///
/// A February 29 birthday falls on February 28 in common years.
pub fn next_birthday(birth: NaiveDate, now: NaiveDateTime) -> NextBirthday {
    let today = now.date();

    let mut date = anniversary_in_year(birth, today.year());
    if date < today {
        date = anniversary_in_year(birth, today.year() + 1);
    }

    // Calendar-date difference so the time of day never shifts the count
    let days_left = (date - today).num_days();

    NextBirthday {
        date,
        days_left: u32::try_from(days_left).unwrap_or(0),
        weekday: weekday_name(date.weekday()),
    }
}

/// Time remaining until the next birthday starts, zero on the day itself
pub fn countdown(next: &NextBirthday, now: NaiveDateTime) -> Countdown {
    let remaining = (next.date.and_time(NaiveTime::MIN) - now).num_seconds();
    if remaining <= 0 {
        return Countdown::default();
    }

    Countdown {
        days: remaining / SECONDS_PER_DAY,
        hours: (remaining % SECONDS_PER_DAY) / SECONDS_PER_HOUR,
        minutes: (remaining % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE,
        seconds: remaining % SECONDS_PER_MINUTE,
    }
}

/// The birth date's month and day in `year`, clamped to the month's length
pub fn anniversary_in_year(birth: NaiveDate, year: i32) -> NaiveDate {
    let day = birth.day().min(days_in_month(year, birth.month()));
    NaiveDate::from_ymd_opt(year, birth.month(), day).unwrap_or(birth)
}

/// Number of days in a given year/month (handles leap years)
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 30,
    }
}

/// Gregorian leap-year rule
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
