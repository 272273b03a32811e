//! BMI and percentile estimation
//!
//! - BMI from metric height and weight
//! - Height percentile against a piecewise-linear expected height by age
//! - Weight percentile against the Devine ideal weight for the height

use crate::anthropometry::stats::percentile;
use crate::anthropometry::types::Gender;

/// Standard deviation of adult and child height around the expected value (cm)
pub const HEIGHT_STD_DEV_CM: f64 = 7.0;

/// Standard deviation of weight around the ideal weight (kg)
pub const WEIGHT_STD_DEV_KG: f64 = 8.0;

/// Last age (inclusive) covered by the growth segment of the height model
pub const GROWTH_AGE_LIMIT: u32 = 18;

/// Average length at birth (cm)
const BIRTH_HEIGHT_CM: f64 = 50.0;

/// Height that the Devine formula starts counting inches from (5 ft)
const DEVINE_BASE_HEIGHT_CM: f64 = 152.4;

const CM_PER_INCH: f64 = 2.54;

/// Devine increment per inch above 5 ft (kg)
const DEVINE_KG_PER_INCH: f64 = 2.3;

/// Body mass index: kg / m²
pub fn bmi(height_cm: f64, weight_kg: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Expected height for an age and gender.
///
/// Linear growth from birth length up to age 18, flat adult height after.
pub fn expected_height_cm(age_years: u32, gender: Gender) -> f64 {
    let (growth_per_year, adult_height) = match gender {
        Gender::Male => (7.0, 176.0),
        Gender::Female => (6.25, 162.5),
    };

    if age_years <= GROWTH_AGE_LIMIT {
        BIRTH_HEIGHT_CM + growth_per_year * age_years as f64
    } else {
        adult_height
    }
}

/// Height percentile (0-100) among people of the same age and gender
pub fn height_percentile(height_cm: f64, age_years: u32, gender: Gender) -> f64 {
    percentile(
        height_cm,
        expected_height_cm(age_years, gender),
        HEIGHT_STD_DEV_CM,
    )
}

/// Devine ideal body weight for a height
pub fn ideal_weight_kg(height_cm: f64, gender: Gender) -> f64 {
    let base = match gender {
        Gender::Male => 50.0,
        Gender::Female => 45.5,
    };
    let inches_over = ((height_cm - DEVINE_BASE_HEIGHT_CM) / CM_PER_INCH).max(0.0);
    base + DEVINE_KG_PER_INCH * inches_over
}

/// Weight percentile (0-100) relative to the ideal weight for the height
pub fn weight_percentile(weight_kg: f64, height_cm: f64, gender: Gender) -> f64 {
    percentile(
        weight_kg,
        ideal_weight_kg(height_cm, gender),
        WEIGHT_STD_DEV_KG,
    )
}
