//! Derived metrics
//!
//! Catalog-driven values keyed by the birth date or the current age in years:
//! - Zodiac sign lookup
//! - Life-expectancy progress
//! - Upcoming milestones and achievement badges
//! - Life-event timeline

use chrono::{Datelike, NaiveDate};

use crate::calendar::anniversary_in_year;
use crate::catalog::{
    ACHIEVEMENTS, LIFE_EVENTS, LIFE_EXPECTANCY_YEARS, MILESTONES, UPCOMING_MILESTONES,
    ZODIAC_SIGNS,
};
use crate::types::{
    Achievement, Milestone, NextBirthday, TimelineEvent, TimelineStatus, ZodiacSign,
};

/// Zodiac sign for a birth (month, day).
///
/// Falls back to Capricorn, which cannot happen for a real calendar day.
pub fn zodiac_sign(month: u32, day: u32) -> &'static ZodiacSign {
    ZODIAC_SIGNS
        .iter()
        .find(|sign| sign.contains(month, day))
        .unwrap_or(&ZODIAC_SIGNS[0])
}

/// Share of average life expectancy lived, in percent to one decimal place
pub fn life_progress(age_years: u32) -> f64 {
    let pct = (age_years as f64 / LIFE_EXPECTANCY_YEARS * 100.0).min(100.0);
    (pct * 10.0).round() / 10.0
}

/// The next few milestone ages strictly above the current age
pub fn milestones(age_years: u32) -> Vec<Milestone> {
    MILESTONES
        .iter()
        .filter(|m| m.age > age_years)
        .take(UPCOMING_MILESTONES)
        .map(|m| Milestone {
            age: m.age,
            name: m.name,
            years_left: m.age - age_years,
        })
        .collect()
}

/// Every achievement in catalog order with its unlock state
pub fn achievements(age_years: u32) -> Vec<Achievement> {
    ACHIEVEMENTS
        .iter()
        .map(|a| Achievement {
            id: a.id,
            name: a.name,
            icon: a.icon,
            threshold_age: a.age,
            description: a.description,
            unlocked: age_years >= a.age,
        })
        .collect()
}

/// Life events dated on the matching birthday and split into past and future
pub fn life_timeline(birth: NaiveDate, age_years: u32) -> Vec<TimelineEvent> {
    LIFE_EVENTS
        .iter()
        .map(|event| TimelineEvent {
            offset_age: event.age,
            label: event.label,
            date: anniversary_in_year(birth, birth.year() + event.age as i32),
            status: if age_years >= event.age {
                TimelineStatus::Past
            } else {
                TimelineStatus::Future
            },
        })
        .collect()
}

/// Age reached on the next birthday; the current age when that is today
pub fn turning_age(age_years: u32, next: &NextBirthday) -> u32 {
    if next.days_left == 0 {
        age_years
    } else {
        age_years + 1
    }
}
