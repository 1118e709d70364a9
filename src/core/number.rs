//! Conversions between `f64` values and the text shown on the display.
//!
//! The display speaks the conventional calculator dialect: integral values
//! have no fraction, infinities read `Infinity`, and very large or very small
//! magnitudes switch to exponent form.

/// Magnitude at and above which values are shown in exponent form.
const EXPONENT_ABOVE: f64 = 1e21;

/// Magnitude below which non-zero values are shown in exponent form.
const EXPONENT_BELOW: f64 = 1e-6;

/// Render a value the way it is stored into the accumulator.
///
/// Uses the shortest representation that round-trips back to the same
/// `f64`, so `0.1 + 0.2` renders as `0.30000000000000004`. When two
/// shortest spellings tie, the last digit may differ from other
/// calculators (`73895257055.64063` here, `73895257055.64062` in some
/// browsers); both read back as the same value.
///
/// # Example
///
/// ```rust
/// use reckon::core::format_number;
///
/// assert_eq!(format_number(15.0), "15");
/// assert_eq!(format_number(-0.5), "-0.5");
/// assert_eq!(format_number(f64::INFINITY), "Infinity");
/// assert_eq!(format_number(1e21), "1e+21");
/// ```
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return text.to_string();
    }
    // Covers -0 as well
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if !(EXPONENT_BELOW..EXPONENT_ABOVE).contains(&magnitude) {
        let text = format!("{value:e}");
        return match text.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => text,
        };
    }

    format!("{value}")
}

/// Parse the longest numeric prefix of `text`.
///
/// Trailing garbage is ignored (`"1.2.3"` reads as `1.2`). Text without any
/// numeric prefix, including the empty string, yields NaN.
///
/// # Example
///
/// ```rust
/// use reckon::core::parse_leading;
///
/// assert_eq!(parse_leading("12"), 12.0);
/// assert_eq!(parse_leading("3."), 3.0);
/// assert_eq!(parse_leading("1.2.3"), 1.2);
/// assert_eq!(parse_leading("-Infinity"), f64::NEG_INFINITY);
/// assert!(parse_leading(".").is_nan());
/// ```
pub fn parse_leading(text: &str) -> f64 {
    let text = text.trim_start();
    let bytes = text.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    if text[end..].starts_with("Infinity") {
        return if text.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    if bytes.get(end) == Some(&b'.') {
        let frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits + frac_digits == 0 {
            return f64::NAN;
        }
        end += 1 + frac_digits;
    } else if int_digits == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut cursor = end + 1;
        if matches!(bytes.get(cursor), Some(b'+' | b'-')) {
            cursor += 1;
        }
        let exp_digits = count_digits(&bytes[cursor..]);
        if exp_digits > 0 {
            end = cursor + exp_digits;
        }
    }

    text[..end].parse().unwrap_or(f64::NAN)
}

/// Parse text produced by [`format_number`] back into the exact value.
pub(crate) fn parse_exact(text: &str) -> Option<f64> {
    match text {
        "NaN" => Some(f64::NAN),
        "Infinity" => Some(f64::INFINITY),
        "-Infinity" => Some(f64::NEG_INFINITY),
        _ => text.parse().ok(),
    }
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Serde adapter storing an `f64` as display text.
///
/// JSON has no spelling for NaN or the infinities, and a divide by zero
/// puts exactly those values into the operand registers.
pub(crate) mod float_text {
    use super::{format_number, parse_exact};
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_number(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        let text = String::deserialize(deserializer)?;
        parse_exact(&text).ok_or_else(|| D::Error::custom(format!("invalid number '{text}'")))
    }
}
