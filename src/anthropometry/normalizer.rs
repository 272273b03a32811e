//! Unit normalization
//!
//! Converts a raw request into centimetres and kilograms and rejects requests
//! missing a gender or a positive height/weight.

use crate::anthropometry::types::{
    AnthropometricInput, AnthropometricRequest, HeightUnit, WeightUnit,
};
use crate::error::{Field, MissingField};

/// Centimetres per foot
pub const CM_PER_FOOT: f64 = 30.48;

/// Kilograms per pound
pub const KG_PER_POUND: f64 = 0.453592;

/// Normalizer for converting raw requests to metric input
pub struct Normalizer;

impl Normalizer {
    /// Normalize a request, failing on the first missing field
    pub fn normalize(request: &AnthropometricRequest) -> Result<AnthropometricInput, MissingField> {
        let gender = request.gender.ok_or(MissingField(Field::Gender))?;
        let height = positive(request.height).ok_or(MissingField(Field::Height))?;
        let weight = positive(request.weight).ok_or(MissingField(Field::Weight))?;

        let (height_cm, weight_kg) =
            normalize_units(height, request.height_unit, weight, request.weight_unit);

        Ok(AnthropometricInput {
            gender,
            height_cm,
            weight_kg,
            age_years: request.age_years,
        })
    }
}

/// Convert height to centimetres and weight to kilograms
pub fn normalize_units(
    height: f64,
    height_unit: HeightUnit,
    weight: f64,
    weight_unit: WeightUnit,
) -> (f64, f64) {
    let height_cm = match height_unit {
        HeightUnit::Cm => height,
        HeightUnit::Ft => height * CM_PER_FOOT,
    };
    let weight_kg = match weight_unit {
        WeightUnit::Kg => weight,
        WeightUnit::Lbs => weight * KG_PER_POUND,
    };
    (height_cm, weight_kg)
}

/// Keep finite values above zero
fn positive(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v > 0.0)
}
