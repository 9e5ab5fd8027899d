//! Scalar values for binding parameters
//!
//! CLI parameters arrive as `name=value` strings; the value side is parsed
//! into a typed scalar and formatted back for display. Parsing is total:
//! anything that is not a recognized literal stays a string, verbatim.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A typed scalar parsed from a CLI parameter value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

impl Value {
    /// Parses a raw CLI literal
    ///
    /// `true`/`false` (case-insensitive) become booleans, integer and
    /// decimal literals become numbers, the literal `null` becomes null,
    /// and everything else is kept as a string.
    pub fn parse(raw: &str) -> Value {
        if raw.eq_ignore_ascii_case("true") {
            return Value::Bool(true);
        }
        if raw.eq_ignore_ascii_case("false") {
            return Value::Bool(false);
        }
        if raw == "null" {
            return Value::Null;
        }
        if let Ok(n) = raw.parse::<i64>() {
            return Value::Int(n);
        }
        if is_decimal(raw) {
            // Overflowing literals saturate to infinity and would not
            // round-trip; keep them as strings
            if let Ok(f) = raw.parse::<f64>() {
                if f.is_finite() {
                    return Value::Float(f);
                }
            }
        }
        Value::String(raw.to_string())
    }
}

/// Matches an optional sign, digits, a dot, and digits
fn is_decimal(s: &str) -> bool {
    let unsigned = s.strip_prefix('-').or_else(|| s.strip_prefix('+')).unwrap_or(s);
    match unsigned.split_once('.') {
        Some((int, frac)) => {
            !int.is_empty()
                && !frac.is_empty()
                && int.bytes().all(|b| b.is_ascii_digit())
                && frac.bytes().all(|b| b.is_ascii_digit())
        }
        None => false,
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            // Keep the decimal point so the literal reparses as a float
            Value::Float(x) if x.fract() == 0.0 => write!(f, "{:.1}", x),
            Value::Float(x) => write!(f, "{}", x),
            Value::String(s) => f.write_str(s),
        }
    }
}
