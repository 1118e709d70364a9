//! Checkpoint and resume for calculators.
//!
//! A checkpoint carries the registers and transition history of one
//! calculator. It encodes to JSON for readability or to a compact binary
//! form. Writing it anywhere is left to the caller.

use crate::core::StateHistory;
use crate::machine::Snapshot;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable checkpoint of a calculator.
/// Does NOT include the input policy (closures are not serializable).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: String,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// Registers at checkpoint time
    pub snapshot: Snapshot,

    /// Transition history at checkpoint time
    pub history: StateHistory,
}

impl Checkpoint {
    pub fn new(snapshot: Snapshot, history: StateHistory) -> Self {
        Self {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            snapshot,
            history,
        }
    }

    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    /// Decode and validate a JSON checkpoint.
    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        let checkpoint: Self = serde_json::from_str(json)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        checkpoint.validate()?;
        Ok(checkpoint)
    }

    pub fn to_binary(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    /// Decode and validate a binary checkpoint.
    pub fn from_binary(bytes: &[u8]) -> Result<Self, CheckpointError> {
        let checkpoint: Self = bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        checkpoint.validate()?;
        Ok(checkpoint)
    }

    /// Check the format version and that the history is a connected path
    /// ending in the snapshot's state.
    pub fn validate(&self) -> Result<(), CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }

        let transitions = self.history.transitions();
        if let Some(pair) = transitions.windows(2).find(|pair| pair[0].to != pair[1].from) {
            return Err(CheckpointError::ValidationFailed(format!(
                "history jumps from {} to {}",
                pair[0].to, pair[1].from
            )));
        }

        if let Some(last) = transitions.last() {
            if last.to != self.snapshot.state {
                return Err(CheckpointError::ValidationFailed(format!(
                    "history ends in {} but snapshot is in {}",
                    last.to, self.snapshot.state
                )));
            }
        }

        Ok(())
    }
}
