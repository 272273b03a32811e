//! Error types for agecalc

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a birth date was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidReason {
    #[error("Please enter your date of birth.")]
    MissingDate,

    #[error("Date cannot be in the future.")]
    FutureDate,

    #[error("Please enter a realistic date (less than 130 years ago).")]
    Unrealistic,
}

impl InvalidReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvalidReason::MissingDate => "missing_date",
            InvalidReason::FutureDate => "future_date",
            InvalidReason::Unrealistic => "unrealistic",
        }
    }
}

/// Anthropometric input field that was absent or unusable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Gender,
    Height,
    Weight,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Gender => "gender",
            Field::Height => "height",
            Field::Weight => "weight",
        }
    }
}

/// Required anthropometric input is missing or not a positive number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Missing required field: {}", .0.as_str())]
pub struct MissingField(pub Field);

/// Errors surfaced by the text and JSON entry points
#[derive(Debug, Error)]
pub enum ComputeError {
    #[error("Invalid birth date: {0}")]
    InvalidBirthDate(#[from] InvalidReason),

    #[error(transparent)]
    MissingField(#[from] MissingField),

    #[error("Invalid JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Encoding error: {0}")]
    EncodingError(String),
}

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Figment(#[from] Box<figment::Error>),

    #[error("Invalid configuration value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError::Figment(Box::new(e))
    }
}
