//! agecalc - Calendar-correct age and birthday engine
//!
//! agecalc turns a birth date and a reference instant into everything an age
//! dashboard displays through a deterministic pipeline: validation → calendar
//! math → derived metrics → snapshot encoding.
//!
//! ## Modules
//!
//! - **Age Pipeline**: Calendar-correct age, elapsed totals, next birthday,
//!   zodiac, milestones, achievements and life timeline
//! - **Anthropometry**: BMI and height/weight percentile estimation
//!
//! Every computation takes the reference instant as an argument; the library
//! never reads the clock on its own except at the FFI and CLI edges.

pub mod anthropometry;
pub mod calendar;
pub mod catalog;
pub mod config;
pub mod encoder;
pub mod error;
pub mod metrics;
pub mod pipeline;
pub mod types;

// FFI bindings for C interop (always available for cdylib/staticlib builds)
pub mod ffi;

pub use config::{AgeConfig, DisplayProfile, ProfileSettings};
pub use error::{ComputeError, ConfigError, InvalidReason, MissingField};
pub use pipeline::{age_snapshot_json, compute_age_snapshot, validate_birth_date, SnapshotProcessor};
pub use types::{AgeParts, AgeSnapshot, BirthDate, Countdown, ElapsedTotals, NextBirthday};

// Anthropometric exports
pub use anthropometry::{compute_anthropometrics, AnthropometricRequest, AnthropometricResult};

/// agecalc version embedded in all encoded snapshots
pub const AGECALC_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Producer name for encoded snapshots
pub const PRODUCER_NAME: &str = "agecalc";
