//! Advisory text
//!
//! Fixed rule list keyed by BMI category and percentile band. Rules are
//! additive and evaluated in order, so the output is deterministic.

use crate::anthropometry::types::{BmiCategory, PercentileBand};

const UNDERWEIGHT: &[&str] = &[
    "Your BMI is below the healthy range. Consider nutrient-dense meals and snacks.",
    "Talk to a healthcare provider about a safe plan for healthy weight gain.",
];

const NORMAL: &[&str] =
    &["Your BMI is in the healthy range. Keep up balanced nutrition and regular activity."];

const OVERWEIGHT: &[&str] = &[
    "Your BMI is above the healthy range. Aim for at least 150 minutes of moderate activity per week.",
    "Focus on portion control and whole, minimally processed foods.",
];

const OBESE: &[&str] = &[
    "Your BMI is in the obese range. Consult a healthcare provider for a personalized plan.",
    "Start with gentle, regular activity such as daily walks and build up gradually.",
];

const HEIGHT_LOW: &str =
    "Your height is below average for your age group, which is usually normal genetic variation.";
const HEIGHT_HIGH: &str = "Your height is above average for your age group.";
const WEIGHT_LOW: &str = "Your weight is in the lower range for your height.";
const WEIGHT_HIGH: &str = "Your weight is in the upper range for your height.";

const DISCLAIMER: &str =
    "These figures are population estimates, not a clinical growth-chart assessment.";

/// Build the advisory list for a BMI and the two percentiles
pub fn recommendations(bmi: f64, height_percentile: f64, weight_percentile: f64) -> Vec<String> {
    let category = BmiCategory::from_bmi(bmi);
    let mut advice: Vec<String> = match category {
        BmiCategory::Underweight => UNDERWEIGHT,
        BmiCategory::Normal => NORMAL,
        BmiCategory::Overweight => OVERWEIGHT,
        BmiCategory::Obese => OBESE,
    }
    .iter()
    .map(|s| s.to_string())
    .collect();

    match PercentileBand::from_percentile(height_percentile) {
        PercentileBand::Low => advice.push(HEIGHT_LOW.to_string()),
        PercentileBand::High => advice.push(HEIGHT_HIGH.to_string()),
        PercentileBand::Average => {}
    }

    match PercentileBand::from_percentile(weight_percentile) {
        PercentileBand::Low => advice.push(WEIGHT_LOW.to_string()),
        PercentileBand::High => advice.push(WEIGHT_HIGH.to_string()),
        PercentileBand::Average => {}
    }

    advice.push(DISCLAIMER.to_string());
    advice
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_normal_average() {
        let advice = recommendations(22.0, 50.0, 50.0);
        assert_eq!(advice, vec![NORMAL[0].to_string(), DISCLAIMER.to_string()]);
    }

    #[test]
    fn test_rules_are_additive() {
        let advice = recommendations(31.0, 10.0, 90.0);
        assert_eq!(
            advice,
            vec![
                OBESE[0].to_string(),
                OBESE[1].to_string(),
                HEIGHT_LOW.to_string(),
                WEIGHT_HIGH.to_string(),
                DISCLAIMER.to_string(),
            ]
        );
    }

    #[test]
    fn test_band_edges() {
        // 25 and 75 belong to the average and high bands respectively
        let advice = recommendations(20.0, 25.0, 75.0);
        assert!(!advice.contains(&HEIGHT_LOW.to_string()));
        assert!(advice.contains(&WEIGHT_HIGH.to_string()));
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(
            recommendations(17.0, 80.0, 5.0),
            recommendations(17.0, 80.0, 5.0)
        );
    }
}
