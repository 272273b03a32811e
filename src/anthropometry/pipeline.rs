//! Anthropometric pipeline orchestration

use tracing::debug;

use crate::anthropometry::estimator::{bmi, height_percentile, weight_percentile};
use crate::anthropometry::normalizer::Normalizer;
use crate::anthropometry::recommendations::recommendations;
use crate::anthropometry::types::{
    AnthropometricRequest, AnthropometricResult, BmiCategory, PercentileBand,
};
use crate::error::{ComputeError, MissingField};

/// Compute BMI, percentiles and recommendations for a request.
///
/// Fails before any computation when a required field is missing, so no
/// partial result is ever produced.
pub fn compute_anthropometrics(
    request: &AnthropometricRequest,
) -> Result<AnthropometricResult, MissingField> {
    // Stage 1: Normalize units
    let input = Normalizer::normalize(request)?;

    // Stage 2: Estimate
    let bmi = bmi(input.height_cm, input.weight_kg);
    let height_percentile = height_percentile(input.height_cm, input.age_years, input.gender);
    let weight_percentile = weight_percentile(input.weight_kg, input.height_cm, input.gender);

    // Stage 3: Advise
    let recommendations = recommendations(bmi, height_percentile, weight_percentile);

    debug!(bmi, height_percentile, weight_percentile, "anthropometrics computed");

    Ok(AnthropometricResult {
        input,
        bmi,
        bmi_category: BmiCategory::from_bmi(bmi),
        height_percentile,
        weight_percentile,
        height_status: PercentileBand::from_percentile(height_percentile),
        weight_status: PercentileBand::from_percentile(weight_percentile),
        recommendations,
    })
}

/// Convert a JSON request into a JSON result.
///
/// # Example
/// ```
/// let json = r#"{"gender":"male","height":180,"weight":75,"age_years":30}"#;
/// let result = agecalc::anthropometry::anthropometrics_json(json).unwrap();
/// assert!(result.contains("\"bmi_category\":\"normal\""));
/// ```
pub fn anthropometrics_json(request_json: &str) -> Result<String, ComputeError> {
    let request: AnthropometricRequest = serde_json::from_str(request_json)?;
    let result = compute_anthropometrics(&request)?;
    Ok(serde_json::to_string(&result)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anthropometry::types::{Gender, HeightUnit, WeightUnit};
    use crate::error::Field;

    #[test]
    fn test_imperial_overweight_scenario() {
        let request = AnthropometricRequest {
            gender: Some(Gender::Male),
            height: Some(5.83),
            height_unit: HeightUnit::Ft,
            weight: Some(80.0),
            weight_unit: WeightUnit::Kg,
            age_years: 30,
        };

        let result = compute_anthropometrics(&request).unwrap();
        assert!((result.bmi - 25.3).abs() < 0.05);
        assert_eq!(result.bmi_category, BmiCategory::Overweight);
        assert_eq!(result.height_status, PercentileBand::Average);
        assert_eq!(result.weight_status, PercentileBand::High);
        assert!(!result.recommendations.is_empty());
    }

    #[test]
    fn test_missing_gender_produces_no_result() {
        let request = AnthropometricRequest {
            gender: None,
            height: Some(170.0),
            weight: Some(70.0),
            ..Default::default()
        };
        assert_eq!(
            compute_anthropometrics(&request),
            Err(MissingField(Field::Gender))
        );
    }

    #[test]
    fn test_json_round_trip_of_request() {
        let json = r#"{"gender":"female","height":130,"weight":60,"weight_unit":"lbs","age_years":9}"#;
        let output = anthropometrics_json(json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["input"]["gender"], "female");
        assert_eq!(value["input"]["age_years"], 9);
        assert!(value["height_percentile"].as_f64().unwrap() > 50.0);
    }

    #[test]
    fn test_json_missing_height() {
        let err = anthropometrics_json(r#"{"gender":"male","weight":70}"#).unwrap_err();
        assert!(matches!(err, ComputeError::MissingField(MissingField(Field::Height))));
        assert_eq!(err.to_string(), "Missing required field: height");
    }

    #[test]
    fn test_json_non_numeric_fields_are_missing() {
        let err = anthropometrics_json(r#"{"gender":"male","height":"abc","weight":70}"#)
            .unwrap_err();
        assert!(matches!(err, ComputeError::MissingField(MissingField(Field::Height))));

        let err = anthropometrics_json(r#"{"gender":"male","height":180,"weight":null}"#)
            .unwrap_err();
        assert!(matches!(err, ComputeError::MissingField(MissingField(Field::Weight))));

        let err = anthropometrics_json(r#"{"gender":"male","height":180,"weight":[70]}"#)
            .unwrap_err();
        assert!(matches!(err, ComputeError::MissingField(MissingField(Field::Weight))));
    }

    #[test]
    fn test_json_numeric_strings_accepted() {
        let output =
            anthropometrics_json(r#"{"gender":"female","height":" 165 ","weight":"60"}"#).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["input"]["height_cm"], 165.0);
        assert_eq!(value["input"]["weight_kg"], 60.0);
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            anthropometrics_json("not json"),
            Err(ComputeError::JsonError(_))
        ));
    }
}
