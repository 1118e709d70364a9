//! Point-in-time copy of the calculator's registers.

use crate::core::{float_text, Accumulator, CalcState, Operator};
use serde::{Deserialize, Serialize};

/// The registers of a [`Calculator`](super::Calculator): what the
/// diagnostic log prints after every key.
///
/// Equality treats NaN operands as equal to each other, so a snapshot taken
/// after `0 / 0 =` compares equal to its own decoded checkpoint.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Snapshot {
    pub accumulator: Accumulator,
    pub operator: Option<Operator>,
    #[serde(with = "float_text")]
    pub left_operand: f64,
    #[serde(with = "float_text")]
    pub right_operand: f64,
    pub state: CalcState,
}

impl Snapshot {
    /// Registers of a freshly constructed calculator.
    pub fn initial() -> Self {
        Self::default()
    }
}

impl PartialEq for Snapshot {
    fn eq(&self, other: &Self) -> bool {
        self.accumulator == other.accumulator
            && self.operator == other.operator
            && same_value(self.left_operand, other.left_operand)
            && same_value(self.right_operand, other.right_operand)
            && self.state == other.state
    }
}

fn same_value(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}
