//! Cell values: numeric where the source text is a valid numeral, text
//! otherwise.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// One CSV row, keyed by header field name.
pub type Row = BTreeMap<String, Value>;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Value {
    Number(f64),
    Text(String),
}

impl Value {
    /// Coerces a raw CSV field. Non-empty text that parses as a finite float
    /// becomes a number; everything else (including the empty string) stays
    /// text, never `0`.
    pub fn coerce(raw: &str) -> Self {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            if let Ok(n) = trimmed.parse::<f64>() {
                if n.is_finite() {
                    return Value::Number(n);
                }
            }
        }
        Value::Text(raw.to_string())
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Number(_) => None,
            Value::Text(s) => Some(s),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) if n.fract() == 0.0 => write!(f, "{n:.0}"),
            Value::Number(n) => write!(f, "{n}"),
            Value::Text(s) => f.write_str(s),
        }
    }
}
