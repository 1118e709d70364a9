//! States of the calculator machine.
//!
//! Each state selects the strategy that interprets the next key.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where the calculator is in entering `left op right =`.
///
/// There is no terminal state. `Result` is left again by the next operator
/// or clear.
///
/// # Example
///
/// ```rust
/// use reckon::core::CalcState;
///
/// let state = CalcState::default();
/// assert_eq!(state, CalcState::LeftOperand);
/// assert_eq!(state.name(), "LeftOperand");
/// assert!(!state.shows_result());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash, Serialize, Deserialize)]
pub enum CalcState {
    /// Typing the first operand.
    #[default]
    LeftOperand,
    /// An operator was chosen; the next digit starts the right operand.
    Operator,
    /// Typing the second operand.
    RightOperand,
    /// A result is on display; `=` repeats the last operation.
    Result,
}

impl CalcState {
    /// Get the state's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::LeftOperand => "LeftOperand",
            Self::Operator => "Operator",
            Self::RightOperand => "RightOperand",
            Self::Result => "Result",
        }
    }

    /// Whether the accumulator holds a computed result rather than typed keys.
    pub fn shows_result(&self) -> bool {
        matches!(self, Self::Result)
    }

    /// Whether digits typed now belong to the second operand.
    pub fn expects_right_operand(&self) -> bool {
        matches!(self, Self::Operator | Self::RightOperand)
    }
}

impl fmt::Display for CalcState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_name_returns_correct_value() {
        assert_eq!(CalcState::LeftOperand.name(), "LeftOperand");
        assert_eq!(CalcState::Operator.name(), "Operator");
        assert_eq!(CalcState::RightOperand.name(), "RightOperand");
        assert_eq!(CalcState::Result.name(), "Result");
    }

    #[test]
    fn initial_state_is_left_operand() {
        assert_eq!(CalcState::default(), CalcState::LeftOperand);
    }

    #[test]
    fn only_result_shows_result() {
        assert!(!CalcState::LeftOperand.shows_result());
        assert!(!CalcState::Operator.shows_result());
        assert!(!CalcState::RightOperand.shows_result());
        assert!(CalcState::Result.shows_result());
    }

    #[test]
    fn right_operand_expected_after_operator() {
        assert!(!CalcState::LeftOperand.expects_right_operand());
        assert!(CalcState::Operator.expects_right_operand());
        assert!(CalcState::RightOperand.expects_right_operand());
        assert!(!CalcState::Result.expects_right_operand());
    }

    #[test]
    fn state_serializes_correctly() {
        let state = CalcState::RightOperand;
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: CalcState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
