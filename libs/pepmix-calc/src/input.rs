//! Loose-typed numeric input handling
//!
//! Form fields arrive as raw strings, or not at all. `NumericInput` is the
//! boundary type the validators accept before any arithmetic happens.

use serde::{Deserialize, Serialize};

/// A raw user-supplied value before numeric interpretation.
///
/// A value is *numeric* only if it can be losslessly read as a finite `f64`.
/// Absent values, empty or unparseable strings, `NaN` and the infinities are
/// all non-numeric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericInput {
    /// A value that already arrived as a number.
    Number(f64),
    /// A raw string, e.g. straight from a form field.
    Text(String),
    /// No value was provided.
    Absent,
}

impl NumericInput {
    /// Interpret the value as a finite number, if possible.
    ///
    /// Leading and trailing whitespace in text values is ignored. `NaN` and
    /// infinite values are rejected even when they parse, since `f64::from_str`
    /// accepts the literal spellings.
    pub fn as_finite(&self) -> Option<f64> {
        let value = match self {
            NumericInput::Absent => return None,
            NumericInput::Number(n) => *n,
            NumericInput::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return None;
                }
                trimmed.parse::<f64>().ok()?
            },
        };
        value.is_finite().then_some(value)
    }

    /// Whether the value passes the numeric-and-finite predicate.
    pub fn is_numeric(&self) -> bool {
        self.as_finite().is_some()
    }
}

impl From<f64> for NumericInput {
    fn from(value: f64) -> Self {
        NumericInput::Number(value)
    }
}

impl From<&str> for NumericInput {
    fn from(value: &str) -> Self {
        NumericInput::Text(value.to_string())
    }
}

impl From<Option<String>> for NumericInput {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(s) => NumericInput::Text(s),
            None => NumericInput::Absent,
        }
    }
}
