//! Loose value conversions
//!
//! Record values arrive as untyped JSON. These helpers give them the numeric
//! and textual readings a browser-side table would apply: numeric strings
//! count as numbers, blank strings count as zero, and so on.

use serde_json::{Number, Value};
use std::borrow::Cow;

/// Parse text as a number using loose rules.
///
/// Surrounding whitespace is ignored and blank text reads as `0`. Accepts
/// decimal and exponent notation, `Infinity` with an optional sign, and the
/// `0x`, `0o` and `0b` integer prefixes. Returns `None` when the text is not
/// a number.
pub fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }

    match trimmed {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    if let (Some(prefix), Some(digits)) = (trimmed.get(..2), trimmed.get(2..)) {
        let radix = match prefix {
            "0x" | "0X" => Some(16),
            "0o" | "0O" => Some(8),
            "0b" | "0B" => Some(2),
            _ => None,
        };
        if let Some(radix) = radix {
            if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
                return None;
            }
            // Accumulate in f64 so values past u64::MAX stay numeric
            let value = digits
                .chars()
                .filter_map(|c| c.to_digit(radix))
                .fold(0.0_f64, |acc, d| acc * f64::from(radix) + f64::from(d));
            return Some(value);
        }
    }

    // str::parse also accepts "inf" and "nan", which are not numbers here
    let plain = trimmed
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'));
    if !plain {
        return None;
    }

    trimmed.parse::<f64>().ok()
}

/// Numeric reading of a JSON value.
///
/// `null` reads as `0`, booleans as `1`/`0`, strings through
/// [`parse_number`]. Arrays and objects have no numeric reading.
pub fn to_number(value: &Value) -> Option<f64> {
    match value {
        Value::Null => Some(0.0),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_number(s),
        Value::Array(_) | Value::Object(_) => None,
    }
}

/// Whether a value is falsy: missing, `null`, `false`, `0` or `""`.
pub fn is_falsy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::Bool(b)) => !b,
        Some(Value::Number(n)) => n.as_f64().map_or(true, |f| f == 0.0 || f.is_nan()),
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Array(_) | Value::Object(_)) => false,
    }
}

/// Display text of a JSON number, without a trailing `.0` for whole floats.
pub fn number_text(number: &Number) -> String {
    if let Some(i) = number.as_i64() {
        i.to_string()
    } else if let Some(u) = number.as_u64() {
        u.to_string()
    } else {
        number.as_f64().map_or_else(|| number.to_string(), |f| f.to_string())
    }
}

/// Display text of a scalar value.
///
/// Returns `None` for `null`, arrays and objects.
pub fn scalar_text(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::String(s) => Some(Cow::Borrowed(s.as_str())),
        Value::Number(n) => Some(Cow::Owned(number_text(n))),
        Value::Bool(b) => Some(Cow::Borrowed(if *b { "true" } else { "false" })),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
