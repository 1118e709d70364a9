//! Context provided to input policy checks.

use crate::core::CalcState;

/// A number key about to be appended to the accumulator.
#[derive(Clone, Debug, PartialEq)]
pub struct KeyContext {
    /// State whose strategy is handling the key
    pub state: CalcState,
    /// Buffer the key would be appended to, after any clearing the
    /// strategy does first
    pub pending: String,
    pub key: char,
}

impl KeyContext {
    pub fn new(state: CalcState, pending: impl Into<String>, key: char) -> Self {
        Self {
            state,
            pending: pending.into(),
            key,
        }
    }

    /// Digits already in the buffer (pure)
    pub fn digit_count(&self) -> usize {
        self.pending.chars().filter(char::is_ascii_digit).count()
    }

    pub fn has_point(&self) -> bool {
        self.pending.contains('.')
    }

    pub fn is_first_key(&self) -> bool {
        self.pending.is_empty()
    }
}
