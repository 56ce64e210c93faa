//! Numeric coercion for fields that arrive either as numbers or as text.
//!
//! The analysis backend is inconsistent: counts come back as `12`, `"12"`,
//! or occasionally as prose such as `"n/a"`. Every aggregation site goes
//! through [`NumericValue::coerce`]; display sites use the `Display` impl,
//! which always shows the original value.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A value that is either a JSON number or a JSON string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericValue {
    Number(f64),
    Text(String),
}

impl NumericValue {
    /// Coerce to a number.
    ///
    /// Strings are trimmed and parsed as decimals. Returns `None` for
    /// anything that is not a finite number, including the `inf` and `NaN`
    /// spellings that `f64::from_str` would otherwise accept.
    pub fn coerce(&self) -> Option<f64> {
        let n = match self {
            NumericValue::Number(n) => *n,
            NumericValue::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        n.is_finite().then_some(n)
    }

    /// Coerce for aggregation: values that are not numbers, or are negative,
    /// count as zero.
    pub fn as_count(&self) -> f64 {
        match self.coerce() {
            Some(n) if n >= 0.0 => n,
            _ => 0.0,
        }
    }

    /// True when the value cannot be used as a count
    pub fn is_invalid_count(&self) -> bool {
        !matches!(self.coerce(), Some(n) if n >= 0.0)
    }
}

impl Default for NumericValue {
    fn default() -> Self {
        NumericValue::Number(0.0)
    }
}

impl From<f64> for NumericValue {
    fn from(n: f64) -> Self {
        NumericValue::Number(n)
    }
}

impl From<&str> for NumericValue {
    fn from(s: &str) -> Self {
        NumericValue::Text(s.to_string())
    }
}

impl fmt::Display for NumericValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericValue::Number(n) => write!(f, "{}", format_number(*n)),
            NumericValue::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Format a number the way the backend would print it: integral values
/// without a fractional part, everything else with its shortest round-trip
/// representation.
pub fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}
