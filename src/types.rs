//! Core value types for agecalc
//!
//! Every type here is an immutable value created fresh per computation. The
//! calculators in [`crate::calendar`] and [`crate::metrics`] produce them and
//! [`AgeSnapshot`] aggregates them for one render tick.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Serialize, Serializer};

use crate::calendar;
use crate::error::InvalidReason;

/// A validated calendar date of birth (no time-of-day component).
///
/// Only constructible through validation, so holding one means the date was
/// neither in the future nor more than 130 years old at the instant it was
/// checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct BirthDate(NaiveDate);

impl BirthDate {
    /// Validate a candidate date against `now`
    pub fn new(candidate: NaiveDate, now: NaiveDateTime) -> Result<Self, InvalidReason> {
        calendar::validate_birth_date(Some(candidate), now)?;
        Ok(Self(candidate))
    }

    /// Parse a `YYYY-MM-DD` string and validate it against `now`.
    ///
    /// Absent, blank and unparseable input all map to [`InvalidReason::MissingDate`].
    pub fn parse(raw: Option<&str>, now: NaiveDateTime) -> Result<Self, InvalidReason> {
        let candidate = raw.and_then(calendar::parse_date);
        calendar::validate_birth_date(candidate, now)?;
        candidate.map(Self).ok_or(InvalidReason::MissingDate)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Start of the birth day in the local calendar
    pub fn midnight(&self) -> NaiveDateTime {
        self.0.and_time(chrono::NaiveTime::MIN)
    }

    /// Whether the birthday falls on February 29
    pub fn is_leap_day(&self) -> bool {
        self.0.month() == 2 && self.0.day() == 29
    }
}

/// Calendar-correct decomposition of age
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AgeParts {
    pub years: u32,
    /// 0-11
    pub months: u32,
    pub days: u32,
}

/// Whole-unit counts of time elapsed since birth-day midnight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ElapsedTotals {
    pub total_days: i64,
    pub total_hours: i64,
    pub total_minutes: i64,
    pub total_seconds: i64,
}

/// Nearest upcoming (or current) birthday
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NextBirthday {
    pub date: NaiveDate,
    /// Whole calendar days from today, 0 on the birthday itself
    pub days_left: u32,
    /// Day of the week the birthday falls on, e.g. "Friday"
    pub weekday: &'static str,
}

/// Remaining time until the next birthday begins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Countdown {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

/// Western zodiac sign with an inclusive (month, day) range
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct ZodiacSign {
    pub name: &'static str,
    pub icon: &'static str,
    pub start_month: u32,
    pub start_day: u32,
    pub end_month: u32,
    pub end_day: u32,
}

impl ZodiacSign {
    /// Whether (month, day) falls inside this sign's range
    ///
    /// Every range spans the tail of one month and the head of the next, so
    /// the year-end wrap of Capricorn needs no special casing.
    pub fn contains(&self, month: u32, day: u32) -> bool {
        (month == self.start_month && day >= self.start_day)
            || (month == self.end_month && day <= self.end_day)
    }

    /// Range label such as `12/22 - 1/19`
    pub fn range_label(&self) -> String {
        format!(
            "{}/{} - {}/{}",
            self.start_month, self.start_day, self.end_month, self.end_day
        )
    }
}

/// Fixed catalog entry for an upcoming milestone age
#[derive(Debug, PartialEq, Eq)]
pub struct MilestoneDef {
    pub age: u32,
    pub name: &'static str,
}

/// Milestone still ahead of the current age
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Milestone {
    pub age: u32,
    pub name: &'static str,
    pub years_left: u32,
}

/// Fixed catalog entry for an achievement badge
#[derive(Debug, PartialEq, Eq)]
pub struct AchievementDef {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub age: u32,
    pub description: &'static str,
}

/// Achievement badge with its unlock state for the current age
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Achievement {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub threshold_age: u32,
    pub description: &'static str,
    pub unlocked: bool,
}

/// Fixed catalog entry for a life event
#[derive(Debug, PartialEq, Eq)]
pub struct LifeEventDef {
    pub age: u32,
    pub label: &'static str,
}

/// Whether a timeline event has already happened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimelineStatus {
    Past,
    Future,
}

/// Life event placed on the calendar relative to the birth date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimelineEvent {
    pub offset_age: u32,
    pub label: &'static str,
    pub date: NaiveDate,
    pub status: TimelineStatus,
}

/// Everything the presentation layer renders for one tick
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgeSnapshot {
    pub birth_date: BirthDate,
    #[serde(serialize_with = "serialize_reference")]
    pub reference: NaiveDateTime,
    pub age: AgeParts,
    pub totals: ElapsedTotals,
    pub next_birthday: NextBirthday,
    pub countdown: Countdown,
    /// Age reached on the next birthday (the current age on the birthday itself)
    pub turning_age: u32,
    pub zodiac: &'static ZodiacSign,
    pub life_progress_pct: f64,
    pub milestones: Vec<Milestone>,
    pub achievements: Vec<Achievement>,
    pub timeline: Vec<TimelineEvent>,
}

fn serialize_reference<S: Serializer>(value: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&value.format("%Y-%m-%dT%H:%M:%S").to_string())
}
