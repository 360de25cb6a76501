use serde::{Deserialize, Serialize};
use std::fmt;

/// A numeric field exactly as the caller supplied it.
///
/// Amounts come from free-text form fields, command-line arguments and JSON
/// files, so they may be empty, a number, or arbitrary text. They are never
/// rejected: [`AmountInput::value`] degrades anything it cannot read to zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AmountInput {
    /// Nothing entered.
    #[default]
    Empty,
    /// An already numeric value.
    Number(f64),
    /// Free text, read leniently.
    Text(String),
}

impl AmountInput {
    /// Numeric value of this input.
    ///
    /// Text is read by its longest leading decimal number, so `"12abc"` is 12
    /// and `"abc"` is 0. Non-finite and negative values read as zero.
    pub fn value(&self) -> f64 {
        let raw = match self {
            AmountInput::Empty => 0.0,
            AmountInput::Number(n) => *n,
            AmountInput::Text(s) => parse_leading_float(s).unwrap_or(0.0),
        };
        if raw.is_finite() && raw > 0.0 { raw } else { 0.0 }
    }

    /// True when nothing was entered (an empty field counts as nothing).
    pub fn is_empty(&self) -> bool {
        match self {
            AmountInput::Empty => true,
            AmountInput::Number(_) => false,
            AmountInput::Text(s) => s.is_empty(),
        }
    }
}

/// Longest prefix of `input` (after leading whitespace) that reads as a
/// decimal float: `[+-]? digits [. digits] [(e|E) [+-]? digits]`.
fn parse_leading_float(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
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
        // "5." is a number, a bare "." is not
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
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

impl fmt::Display for AmountInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountInput::Empty => Ok(()),
            AmountInput::Number(n) => write!(f, "{n}"),
            AmountInput::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for AmountInput {
    fn from(value: f64) -> Self {
        AmountInput::Number(value)
    }
}

impl From<Option<f64>> for AmountInput {
    fn from(value: Option<f64>) -> Self {
        value.map_or(AmountInput::Empty, AmountInput::Number)
    }
}

impl From<String> for AmountInput {
    fn from(value: String) -> Self {
        AmountInput::Text(value)
    }
}

impl From<&str> for AmountInput {
    fn from(value: &str) -> Self {
        AmountInput::Text(value.to_string())
    }
}
