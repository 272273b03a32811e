//! Anthropometric estimation module
//!
//! Converts a height/weight reading into BMI, population percentiles and
//! advisory text. Percentiles come from a normal-distribution approximation
//! around simple expected-height and ideal-weight models. They are coarse
//! population estimates, not a clinical growth-chart lookup, and callers
//! should present them that way.
//!
//! Pipeline: Request → Normalizer → Estimator → Recommendations → Result

pub mod estimator;
pub mod normalizer;
pub mod pipeline;
pub mod recommendations;
pub mod stats;
pub mod types;

pub use pipeline::{anthropometrics_json, compute_anthropometrics};
pub use types::{
    AnthropometricInput, AnthropometricRequest, AnthropometricResult, BmiCategory, Gender,
    HeightUnit, PercentileBand, WeightUnit,
};
