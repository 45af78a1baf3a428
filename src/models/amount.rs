//! Raw monetary amounts as they arrive from the record store
//!
//! Stored records are loosely typed: an amount may be a JSON number, a numeric
//! string, `null`, or missing entirely. `RawAmount` keeps whatever was there
//! and [`normalize_amount`] turns it into a finite `f64`, never failing.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

/// An amount as supplied by the store, before normalization
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RawAmount {
    /// A numeric value (may still be NaN or infinite when built in code)
    Number(f64),
    /// A textual value such as `"12.50"`
    Text(String),
    /// Absent, `null`, or a value of some other JSON type
    #[default]
    Missing,
}

impl RawAmount {
    /// The finite numeric value, or 0
    pub fn value(&self) -> f64 {
        normalize_amount(self)
    }
}

/// Normalize a raw amount to a finite number
///
/// Numbers are returned as-is when finite. Strings are parsed by taking the
/// longest leading decimal literal (`"12abc"` is 12). Everything else,
/// including NaN and ±Infinity, becomes 0.
pub fn normalize_amount(raw: &RawAmount) -> f64 {
    let value = match raw {
        RawAmount::Number(n) => *n,
        RawAmount::Text(s) => parse_decimal_prefix(s).unwrap_or(0.0),
        RawAmount::Missing => 0.0,
    };

    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Parse the leading `[+-]digits[.digits][e[+-]digits]` literal of a string
fn parse_decimal_prefix(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    // Exponent only counts when followed by at least one digit
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}

impl From<f64> for RawAmount {
    fn from(n: f64) -> Self {
        RawAmount::Number(n)
    }
}

impl From<i64> for RawAmount {
    fn from(n: i64) -> Self {
        RawAmount::Number(n as f64)
    }
}

impl From<&str> for RawAmount {
    fn from(s: &str) -> Self {
        RawAmount::Text(s.to_string())
    }
}

impl From<String> for RawAmount {
    fn from(s: String) -> Self {
        RawAmount::Text(s)
    }
}

impl From<Option<f64>> for RawAmount {
    fn from(n: Option<f64>) -> Self {
        n.map(RawAmount::Number).unwrap_or_default()
    }
}

impl fmt::Display for RawAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.value())
    }
}

impl Serialize for RawAmount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RawAmount::Number(n) => serializer.serialize_f64(*n),
            RawAmount::Text(s) => serializer.serialize_str(s),
            RawAmount::Missing => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for RawAmount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::Number(n) => n.as_f64().map(RawAmount::Number).unwrap_or_default(),
            Value::String(s) => RawAmount::Text(s),
            _ => RawAmount::Missing,
        })
    }
}
