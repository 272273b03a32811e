//! Pipeline orchestration
//!
//! This module provides the public API for agecalc. It validates the birth
//! date, runs every calculator against one reference instant and aggregates
//! the results into an [`AgeSnapshot`].

use std::time::Duration;

use chrono::NaiveDateTime;
use tracing::debug;

use crate::calendar::{age_parts, countdown, elapsed_totals, next_birthday};
use crate::config::{AgeConfig, ProfileSettings};
use crate::encoder::SnapshotEncoder;
use crate::error::{ComputeError, InvalidReason};
use crate::metrics::{
    achievements, life_progress, life_timeline, milestones, turning_age, zodiac_sign,
};
use crate::types::{AgeSnapshot, BirthDate};

/// Validate a raw `YYYY-MM-DD` birth date against `now`.
///
/// Absent or unparseable input is reported as [`InvalidReason::MissingDate`].
pub fn validate_birth_date(
    candidate: Option<&str>,
    now: NaiveDateTime,
) -> Result<(), InvalidReason> {
    BirthDate::parse(candidate, now).map(|_| ())
}

/// Compute every derived value for one render tick.
///
/// Pure: the same birth date and instant always yield the same snapshot.
///
/// # Example
/// ```
/// use agecalc::{compute_age_snapshot, BirthDate};
/// use chrono::NaiveDate;
///
/// let now = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap().and_hms_opt(9, 0, 0).unwrap();
/// let birth = BirthDate::parse(Some("2000-06-15"), now).unwrap();
/// let snapshot = compute_age_snapshot(&birth, now);
/// assert_eq!(snapshot.age.years, 24);
/// assert_eq!(snapshot.next_birthday.days_left, 0);
/// ```
pub fn compute_age_snapshot(birth: &BirthDate, now: NaiveDateTime) -> AgeSnapshot {
    let date = birth.date();

    // Stage 1: Calendar math
    let age = age_parts(date, now);
    let totals = elapsed_totals(birth.midnight(), now);
    let next = next_birthday(date, now);
    let remaining = countdown(&next, now);

    // Stage 2: Derived metrics
    let snapshot = AgeSnapshot {
        birth_date: *birth,
        reference: now,
        age,
        totals,
        next_birthday: next,
        countdown: remaining,
        turning_age: turning_age(age.years, &next),
        zodiac: zodiac_sign(birth.month(), birth.day()),
        life_progress_pct: life_progress(age.years),
        milestones: milestones(age.years),
        achievements: achievements(age.years),
        timeline: life_timeline(date, age.years),
    };

    debug!(
        birth_date = %date,
        years = age.years,
        days_left = next.days_left,
        "age snapshot computed"
    );

    snapshot
}

/// Validate a raw birth date and return the snapshot as JSON
pub fn age_snapshot_json(
    raw_birth_date: &str,
    now: NaiveDateTime,
) -> Result<String, ComputeError> {
    let birth = BirthDate::parse(Some(raw_birth_date), now)?;
    let snapshot = compute_age_snapshot(&birth, now);
    Ok(serde_json::to_string(&snapshot)?)
}

/// Processor for repeated ticks within one render session.
///
/// Holds only the encoder identity and presentation settings; every tick is
/// computed from the birth date and the freshly sampled instant.
pub struct SnapshotProcessor {
    encoder: SnapshotEncoder,
    settings: ProfileSettings,
}

impl Default for SnapshotProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotProcessor {
    /// Create a processor with default settings
    pub fn new() -> Self {
        Self::with_config(&AgeConfig::default())
    }

    /// Create a processor using the profile from a loaded configuration
    pub fn with_config(config: &AgeConfig) -> Self {
        Self {
            encoder: SnapshotEncoder::new(),
            settings: config.settings(),
        }
    }

    pub fn settings(&self) -> &ProfileSettings {
        &self.settings
    }

    pub fn encoder(&self) -> &SnapshotEncoder {
        &self.encoder
    }

    /// Delay between ticks
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.settings.tick_interval_ms)
    }

    /// Compute one tick
    pub fn tick(&self, birth: &BirthDate, now: NaiveDateTime) -> AgeSnapshot {
        compute_age_snapshot(birth, now)
    }

    /// Compute one tick and encode it as a JSON frame
    pub fn tick_json(&self, birth: &BirthDate, now: NaiveDateTime) -> Result<String, ComputeError> {
        let snapshot = self.tick(birth, now);
        self.encoder.encode_to_json(&snapshot)
    }

    /// Parse, validate and encode a raw birth date in one step
    pub fn process(
        &self,
        raw_birth_date: &str,
        now: NaiveDateTime,
    ) -> Result<String, ComputeError> {
        let birth = BirthDate::parse(Some(raw_birth_date), now)?;
        self.tick_json(&birth, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DisplayProfile;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_snapshot_contents() {
        let now = at(2024, 3, 10, 8);
        let birth = BirthDate::parse(Some("1990-05-20"), now).unwrap();
        let snapshot = compute_age_snapshot(&birth, now);

        assert_eq!(snapshot.age.years, 33);
        assert_eq!(snapshot.age.months, 9);
        assert_eq!(snapshot.age.days, 19);
        assert_eq!(snapshot.turning_age, 34);
        assert_eq!(snapshot.zodiac.name, "Taurus");
        assert_eq!(snapshot.life_progress_pct, 44.0);
        assert_eq!(snapshot.milestones[0].age, 40);
        assert_eq!(snapshot.achievements.len(), 16);
        assert_eq!(snapshot.timeline.len(), 16);
        assert_eq!(
            snapshot.next_birthday.date,
            NaiveDate::from_ymd_opt(2024, 5, 20).unwrap()
        );
    }

    #[test]
    fn test_snapshot_is_idempotent() {
        let now = at(2024, 3, 10, 8);
        let birth = BirthDate::parse(Some("1985-12-31"), now).unwrap();
        assert_eq!(
            compute_age_snapshot(&birth, now),
            compute_age_snapshot(&birth, now)
        );
    }

    #[test]
    fn test_validation_short_circuits() {
        let now = at(2024, 3, 10, 8);
        assert_eq!(
            validate_birth_date(Some("2030-01-01"), now),
            Err(InvalidReason::FutureDate)
        );
        assert_eq!(
            validate_birth_date(Some("garbage"), now),
            Err(InvalidReason::MissingDate)
        );
        assert_eq!(validate_birth_date(None, now), Err(InvalidReason::MissingDate));

        let err = age_snapshot_json("1850-01-01", now).unwrap_err();
        assert!(matches!(
            err,
            ComputeError::InvalidBirthDate(InvalidReason::Unrealistic)
        ));
    }

    #[test]
    fn test_processor_uses_profile() {
        let config = AgeConfig {
            profile: DisplayProfile::Compact,
            ..Default::default()
        };
        let processor = SnapshotProcessor::with_config(&config);
        assert_eq!(processor.tick_interval(), Duration::from_millis(2000));

        let json = processor.process("2000-02-29", at(2023, 3, 1, 0)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["snapshot"]["age"]["days"], 1);
        assert_eq!(value["snapshot"]["next_birthday"]["date"], "2024-02-29");
    }

    #[test]
    fn test_ticks_drift_with_the_clock() {
        let processor = SnapshotProcessor::new();
        let now = at(2024, 3, 10, 8);
        let birth = BirthDate::parse(Some("2000-01-01"), now).unwrap();

        let first = processor.tick(&birth, now);
        let second = processor.tick(&birth, now + chrono::Duration::seconds(1));
        assert_eq!(second.totals.total_seconds, first.totals.total_seconds + 1);
    }
}
