//! Violation errors and handling strategies.

use thiserror::Error;

/// Reasons a number key can be refused
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PolicyViolation {
    #[error("Decimal point already present in '{pending}'")]
    DuplicatePoint { pending: String },

    #[error("Sign key is only accepted as the first key (buffer '{pending}')")]
    MisplacedSign { pending: String },

    #[error("Maximum digits ({max}) exceeded")]
    TooManyDigits { max: usize },

    #[error("Custom check failed: {message}")]
    CustomCheckFailed { message: String },
}

/// Strategy for handling policy violations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViolationStrategy {
    /// Drop the key; the machine does not move
    #[default]
    Reject,

    /// Accept the key but log a warning
    IgnoreAndLog,
}
