//! Keys the calculator understands.
//!
//! The keypad reports each press as a `(kind, value)` pair of strings. This
//! module turns those pairs into typed [`Input`] values.

use super::operator::{Operator, UnknownOperator};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Characters accepted as number keys: digits, the decimal point and the
/// sign key.
pub const NUMBER_KEYS: &str = "0123456789.-";

/// Kind of key that was pressed.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    Number,
    Operator,
    Action,
}

/// Non-numeric, non-operator keys.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Action {
    /// `C`: reset the whole machine.
    #[serde(rename = "C")]
    Clear,
    /// `=`: evaluate.
    #[serde(rename = "=")]
    Result,
}

/// One typed key press.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Input {
    Number(char),
    Operator(Operator),
    Action(Action),
}

/// Errors produced while decoding a key press.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Unknown input kind '{0}'")]
    UnknownKind(String),

    #[error("'{0}' is not a number key")]
    UnrecognizedNumber(String),

    #[error(transparent)]
    UnrecognizedOperator(#[from] UnknownOperator),

    #[error("Unknown action '{0}'")]
    UnrecognizedAction(String),
}

impl InputKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::Operator => "operator",
            Self::Action => "action",
        }
    }
}

impl FromStr for InputKind {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "number" => Ok(Self::Number),
            "operator" => Ok(Self::Operator),
            "action" => Ok(Self::Action),
            _ => Err(InputError::UnknownKind(s.to_string())),
        }
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Action {
    pub fn symbol(self) -> char {
        match self {
            Self::Clear => 'C',
            Self::Result => '=',
        }
    }
}

impl FromStr for Action {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "C" => Ok(Self::Clear),
            "=" => Ok(Self::Result),
            _ => Err(InputError::UnrecognizedAction(s.to_string())),
        }
    }
}

impl Input {
    /// Decode a key press reported as a `(kind, value)` pair.
    ///
    /// # Example
    ///
    /// ```rust
    /// use reckon::core::{Action, Input, InputKind, Operator};
    ///
    /// assert_eq!(Input::parse(InputKind::Number, "7"), Ok(Input::Number('7')));
    /// assert_eq!(
    ///     Input::parse(InputKind::Operator, "+"),
    ///     Ok(Input::Operator(Operator::Add))
    /// );
    /// assert_eq!(
    ///     Input::parse(InputKind::Action, "="),
    ///     Ok(Input::Action(Action::Result))
    /// );
    /// assert!(Input::parse(InputKind::Action, "sqrt").is_err());
    /// ```
    pub fn parse(kind: InputKind, value: &str) -> Result<Self, InputError> {
        match kind {
            InputKind::Number => parse_number_key(value).map(Self::Number),
            InputKind::Operator => Ok(Self::Operator(value.parse()?)),
            InputKind::Action => value.parse().map(Self::Action),
        }
    }

    pub fn kind(&self) -> InputKind {
        match self {
            Self::Number(_) => InputKind::Number,
            Self::Operator(_) => InputKind::Operator,
            Self::Action(_) => InputKind::Action,
        }
    }

    /// The character printed on the key.
    pub fn symbol(&self) -> char {
        match self {
            Self::Number(key) => *key,
            Self::Operator(op) => op.symbol(),
            Self::Action(action) => action.symbol(),
        }
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind(), self.symbol())
    }
}

fn parse_number_key(value: &str) -> Result<char, InputError> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(key), None) if NUMBER_KEYS.contains(key) => Ok(key),
        _ => Err(InputError::UnrecognizedNumber(value.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_parse_from_keypad_vocabulary() {
        assert_eq!("number".parse::<InputKind>(), Ok(InputKind::Number));
        assert_eq!("operator".parse::<InputKind>(), Ok(InputKind::Operator));
        assert_eq!("action".parse::<InputKind>(), Ok(InputKind::Action));
        assert_eq!(
            "memory".parse::<InputKind>(),
            Err(InputError::UnknownKind("memory".to_string()))
        );
    }

    #[test]
    fn number_keys_cover_digits_point_and_sign() {
        for key in NUMBER_KEYS.chars() {
            let value = key.to_string();
            assert_eq!(Input::parse(InputKind::Number, &value), Ok(Input::Number(key)));
        }
    }

    #[test]
    fn number_key_must_be_single_character() {
        assert!(matches!(
            Input::parse(InputKind::Number, "12"),
            Err(InputError::UnrecognizedNumber(_))
        ));
        assert!(matches!(
            Input::parse(InputKind::Number, ""),
            Err(InputError::UnrecognizedNumber(_))
        ));
        assert!(matches!(
            Input::parse(InputKind::Number, "x"),
            Err(InputError::UnrecognizedNumber(_))
        ));
    }

    #[test]
    fn unknown_operator_is_reported() {
        let err = Input::parse(InputKind::Operator, "%").unwrap_err();
        assert!(matches!(err, InputError::UnrecognizedOperator(_)));
        assert_eq!(err.to_string(), "'%' is not an operator");
    }

    #[test]
    fn only_clear_and_result_are_actions() {
        assert_eq!(
            Input::parse(InputKind::Action, "C"),
            Ok(Input::Action(Action::Clear))
        );
        assert_eq!(
            Input::parse(InputKind::Action, "="),
            Ok(Input::Action(Action::Result))
        );
        // The keypad has a square-root key with no behavior behind it
        assert!(matches!(
            Input::parse(InputKind::Action, "√"),
            Err(InputError::UnrecognizedAction(_))
        ));
    }

    #[test]
    fn display_shows_kind_and_symbol() {
        assert_eq!(Input::Number('4').to_string(), "number:4");
        assert_eq!(Input::Operator(Operator::Multiply).to_string(), "operator:*");
        assert_eq!(Input::Action(Action::Clear).to_string(), "action:C");
    }

    #[test]
    fn input_serializes_keyed_by_kind() {
        let json = serde_json::to_string(&Input::Operator(Operator::Subtract)).unwrap();
        assert_eq!(json, r#"{"operator":"-"}"#);
        let back: Input = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Input::Operator(Operator::Subtract));
    }
}
