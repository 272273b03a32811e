//! Snapshot encoding
//!
//! Wraps an [`AgeSnapshot`] in a JSON envelope carrying producer metadata so a
//! presentation layer can tell frames from different render sessions apart.

use serde::Serialize;
use uuid::Uuid;

use crate::error::ComputeError;
use crate::types::AgeSnapshot;
use crate::{AGECALC_VERSION, PRODUCER_NAME};

/// Current snapshot envelope schema version
pub const SNAPSHOT_SCHEMA_VERSION: &str = "age.snapshot.v1";

/// Producer metadata
#[derive(Debug, Clone, Serialize)]
pub struct Producer {
    pub name: String,
    pub version: String,
    /// Identifies one render session across ticks
    pub instance_id: String,
}

/// Encoded snapshot frame
#[derive(Debug, Clone, Serialize)]
pub struct SnapshotEnvelope<'a> {
    pub schema_version: &'static str,
    pub producer: Producer,
    pub snapshot: &'a AgeSnapshot,
}

/// Encoder for snapshot frames
pub struct SnapshotEncoder {
    instance_id: String,
}

impl Default for SnapshotEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotEncoder {
    /// Create a new encoder with a unique instance ID
    pub fn new() -> Self {
        Self {
            instance_id: Uuid::new_v4().to_string(),
        }
    }

    /// Create an encoder with a specific instance ID
    pub fn with_instance_id(instance_id: String) -> Self {
        Self { instance_id }
    }

    pub fn instance_id(&self) -> &str {
        &self.instance_id
    }

    /// Wrap a snapshot in an envelope
    pub fn encode<'a>(&self, snapshot: &'a AgeSnapshot) -> SnapshotEnvelope<'a> {
        SnapshotEnvelope {
            schema_version: SNAPSHOT_SCHEMA_VERSION,
            producer: Producer {
                name: PRODUCER_NAME.to_string(),
                version: AGECALC_VERSION.to_string(),
                instance_id: self.instance_id.clone(),
            },
            snapshot,
        }
    }

    /// Encode to a compact JSON string
    pub fn encode_to_json(&self, snapshot: &AgeSnapshot) -> Result<String, ComputeError> {
        serde_json::to_string(&self.encode(snapshot))
            .map_err(|e| ComputeError::EncodingError(e.to_string()))
    }

    /// Encode to a pretty-printed JSON string
    pub fn encode_to_json_pretty(&self, snapshot: &AgeSnapshot) -> Result<String, ComputeError> {
        serde_json::to_string_pretty(&self.encode(snapshot))
            .map_err(|e| ComputeError::EncodingError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::compute_age_snapshot;
    use crate::types::BirthDate;
    use chrono::NaiveDate;

    fn snapshot() -> AgeSnapshot {
        let now = NaiveDate::from_ymd_opt(2024, 6, 15)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        let birth = BirthDate::parse(Some("1990-05-20"), now).unwrap();
        compute_age_snapshot(&birth, now)
    }

    #[test]
    fn test_envelope_fields() {
        let encoder = SnapshotEncoder::with_instance_id("session-1".to_string());
        let json = encoder.encode_to_json(&snapshot()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["schema_version"], SNAPSHOT_SCHEMA_VERSION);
        assert_eq!(value["producer"]["name"], PRODUCER_NAME);
        assert_eq!(value["producer"]["instance_id"], "session-1");
        assert_eq!(value["snapshot"]["birth_date"], "1990-05-20");
        assert_eq!(value["snapshot"]["reference"], "2024-06-15T12:00:00");
        assert_eq!(value["snapshot"]["age"]["years"], 34);
        assert_eq!(value["snapshot"]["zodiac"]["name"], "Taurus");
        assert_eq!(value["snapshot"]["timeline"][0]["status"], "past");
    }

    #[test]
    fn test_unique_instance_ids() {
        assert_ne!(
            SnapshotEncoder::new().instance_id(),
            SnapshotEncoder::new().instance_id()
        );
    }
}
