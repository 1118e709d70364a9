//! Checkpoint error types.

use thiserror::Error;

/// Errors raised while encoding, decoding or validating a checkpoint
#[derive(Debug, Error)]
pub enum CheckpointError {
    /// Encoding to JSON or binary failed
    #[error("Could not encode checkpoint: {0}")]
    SerializationFailed(String),

    /// Input was not a well-formed JSON or binary checkpoint
    #[error("Could not decode checkpoint: {0}")]
    DeserializationFailed(String),

    #[error("Unsupported checkpoint version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// History and registers disagree
    #[error("Checkpoint validation failed: {0}")]
    ValidationFailed(String),
}
