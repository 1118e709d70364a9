//! The pending display buffer.
//!
//! Keys are kept as characters rather than folded into a number, so partial
//! input such as `"3."` or `"-"` shows exactly as typed until it is resolved
//! into an operand.

use super::number::{format_number, parse_leading};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered characters of the numeral being entered.
///
/// # Example
///
/// ```rust
/// use reckon::core::Accumulator;
///
/// let mut acc = Accumulator::new();
/// assert_eq!(acc.display(), "0");
///
/// acc.push('3');
/// acc.push('.');
/// assert_eq!(acc.display(), "3.");
/// assert_eq!(acc.as_number(), 3.0);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Accumulator {
    chars: Vec<char>,
}

impl Accumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one key. Accepts whatever it is given; filtering belongs to
    /// the input policy.
    pub fn push(&mut self, key: char) {
        self.chars.push(key);
    }

    pub fn clear(&mut self) {
        self.chars.clear();
    }

    /// Replace the contents with the display text of `value`.
    pub fn set_from_number(&mut self, value: f64) {
        self.chars = format_number(value).chars().collect();
    }

    /// Numeric value of the buffer. Empty reads as 0.
    pub fn as_number(&self) -> f64 {
        if self.chars.is_empty() {
            0.0
        } else {
            parse_leading(&self.joined())
        }
    }

    /// Text for the display: `"0"` when empty, otherwise the keys verbatim.
    pub fn display(&self) -> String {
        if self.chars.is_empty() {
            "0".to_string()
        } else {
            self.joined()
        }
    }

    /// The raw buffer, empty string when nothing was typed.
    pub fn joined(&self) -> String {
        self.chars.iter().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }
}

impl From<String> for Accumulator {
    fn from(text: String) -> Self {
        Self {
            chars: text.chars().collect(),
        }
    }
}

impl From<Accumulator> for String {
    fn from(acc: Accumulator) -> Self {
        acc.joined()
    }
}

impl fmt::Display for Accumulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(keys: &str) -> Accumulator {
        let mut acc = Accumulator::new();
        keys.chars().for_each(|key| acc.push(key));
        acc
    }

    #[test]
    fn empty_accumulator_reads_zero() {
        let acc = Accumulator::new();
        assert!(acc.is_empty());
        assert_eq!(acc.as_number(), 0.0);
        assert_eq!(acc.display(), "0");
        assert_eq!(acc.joined(), "");
    }

    #[test]
    fn display_keeps_keys_verbatim() {
        assert_eq!(typed("007").display(), "007");
        assert_eq!(typed("3.").display(), "3.");
        assert_eq!(typed("-").display(), "-");
    }

    #[test]
    fn as_number_parses_buffer() {
        assert_eq!(typed("12").as_number(), 12.0);
        assert_eq!(typed("-4.5").as_number(), -4.5);
        assert_eq!(typed("007").as_number(), 7.0);
    }

    #[test]
    fn second_decimal_point_is_kept_but_ignored_by_parse() {
        let acc = typed("1.2.3");
        assert_eq!(acc.display(), "1.2.3");
        assert_eq!(acc.as_number(), 1.2);
    }

    #[test]
    fn lone_point_or_sign_is_nan() {
        assert!(typed(".").as_number().is_nan());
        assert!(typed("-").as_number().is_nan());
    }

    #[test]
    fn clear_empties_buffer() {
        let mut acc = typed("99");
        acc.clear();
        assert!(acc.is_empty());
        assert_eq!(acc.display(), "0");
    }

    #[test]
    fn set_from_number_replaces_contents() {
        let mut acc = typed("123");
        acc.set_from_number(15.0);
        assert_eq!(acc.chars(), &['1', '5']);

        acc.set_from_number(f64::INFINITY);
        assert_eq!(acc.display(), "Infinity");
        assert_eq!(acc.as_number(), f64::INFINITY);

        acc.set_from_number(-0.25);
        assert_eq!(acc.display(), "-0.25");
        assert_eq!(acc.len(), 5);
    }

    #[test]
    fn serializes_as_plain_text() {
        let acc = typed("3.");
        let json = serde_json::to_string(&acc).unwrap();
        assert_eq!(json, "\"3.\"");
        let back: Accumulator = serde_json::from_str(&json).unwrap();
        assert_eq!(back, acc);
    }
}
