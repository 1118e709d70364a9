//! The four arithmetic operators and the pure arithmetic core.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A binary arithmetic operator.
///
/// Serializes as its keypad symbol.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "*")]
    Multiply,
    #[serde(rename = "/")]
    Divide,
}

impl Operator {
    /// The keypad symbol for this operator.
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Look up an operator by its keypad symbol.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Combine two operands.
    ///
    /// Total over all inputs: follows IEEE-754, so dividing by zero gives
    /// an infinity (or NaN for `0 / 0`) instead of failing.
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Divide => left / right,
            Self::Multiply => left * right,
            Self::Add => left + right,
            Self::Subtract => left - right,
        }
    }
}

/// Apply an optional operator. With no operator selected the result is 0.
///
/// # Example
///
/// ```rust
/// use reckon::core::{apply, Operator};
///
/// assert_eq!(apply(Some(Operator::Add), 12.0, 3.0), 15.0);
/// assert_eq!(apply(Some(Operator::Divide), 8.0, 0.0), f64::INFINITY);
/// assert_eq!(apply(None, 8.0, 2.0), 0.0);
/// ```
pub fn apply(operator: Option<Operator>, left: f64, right: f64) -> f64 {
    operator.map_or(0.0, |op| op.apply(left, right))
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Error returned when text does not name an operator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not an operator")]
pub struct UnknownOperator(pub String);

impl FromStr for Operator {
    type Err = UnknownOperator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(symbol), None) => {
                Self::from_symbol(symbol).ok_or_else(|| UnknownOperator(s.to_string()))
            }
            _ => Err(UnknownOperator(s.to_string())),
        }
    }
}
