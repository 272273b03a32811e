//! Anthropometric types
//!
//! Data flowing through the estimator: the raw request as entered, the
//! unit-normalized input, and the final result.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::calendar::age_parts;

/// Gender category used to pick the reference model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

/// Unit the height was entered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeightUnit {
    #[default]
    Cm,
    /// Decimal feet (5.5 means five and a half feet)
    Ft,
}

/// Unit the weight was entered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    #[default]
    Kg,
    Lbs,
}

/// Raw estimator request as collected from a form
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnthropometricRequest {
    pub gender: Option<Gender>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub height: Option<f64>,
    #[serde(default)]
    pub height_unit: HeightUnit,
    #[serde(default, deserialize_with = "lenient_number")]
    pub weight: Option<f64>,
    #[serde(default)]
    pub weight_unit: WeightUnit,
    /// Completed years of age
    #[serde(default)]
    pub age_years: u32,
}

impl AnthropometricRequest {
    /// Set the age from a birth date instead of entering it directly
    pub fn with_birth_date(mut self, birth: NaiveDate, now: NaiveDateTime) -> Self {
        self.age_years = age_parts(birth, now).years;
        self
    }
}

/// Read a form value as a number; anything non-numeric becomes `None`
fn lenient_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }))
}

/// Request after unit normalization
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnthropometricInput {
    pub gender: Gender,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub age_years: u32,
}

/// BMI classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::Normal
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

/// Percentile band: below 25, 25 to 75, 75 and above
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PercentileBand {
    Low,
    Average,
    High,
}

impl PercentileBand {
    pub fn from_percentile(percentile: f64) -> Self {
        if percentile < 25.0 {
            PercentileBand::Low
        } else if percentile < 75.0 {
            PercentileBand::Average
        } else {
            PercentileBand::High
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PercentileBand::Low => "Below average",
            PercentileBand::Average => "Average",
            PercentileBand::High => "Above average",
        }
    }
}

/// Estimator output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnthropometricResult {
    /// Normalized input the estimates were computed from
    pub input: AnthropometricInput,
    pub bmi: f64,
    pub bmi_category: BmiCategory,
    /// 0-100
    pub height_percentile: f64,
    /// 0-100
    pub weight_percentile: f64,
    pub height_status: PercentileBand,
    pub weight_status: PercentileBand,
    pub recommendations: Vec<String>,
}
