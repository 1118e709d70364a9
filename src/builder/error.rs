//! Build errors for the calculator builder.

use crate::checkpoint::CheckpointError;
use thiserror::Error;

/// Errors that can occur when building a calculator.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("History limit must be at least 1. Omit .history_limit() for the default")]
    ZeroHistoryLimit,

    #[error("Cannot resume from checkpoint: {0}")]
    Resume(#[from] CheckpointError),
}
