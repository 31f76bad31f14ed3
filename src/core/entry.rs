//! The decimal literal under construction.

use super::digit::Digit;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The literal the user is currently typing.
///
/// Never empty, defaults to `"0"` and holds at most one decimal point.
/// After an evaluation it carries the formatted result, which may be
/// negative or a non-finite marker such as `Infinity`.
///
/// # Example
///
/// ```rust
/// use abacus::core::{Digit, Entry};
///
/// let mut entry = Entry::default();
/// entry.push_digit(Digit::new(4).unwrap());
/// entry.push_decimal_point();
/// entry.push_decimal_point();
/// entry.push_digit(Digit::new(2).unwrap());
/// assert_eq!(entry.as_str(), "4.2");
/// assert_eq!(entry.value(), Some(4.2));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Entry(String);

impl Default for Entry {
    fn default() -> Self {
        Self::zero()
    }
}

impl Entry {
    pub fn zero() -> Self {
        Self("0".to_string())
    }

    /// Start a fresh entry holding a single digit.
    pub fn from_digit(digit: Digit) -> Self {
        Self(digit.as_char().to_string())
    }

    /// Wrap an already formatted result.
    pub(crate) fn from_formatted(text: String) -> Self {
        if text.is_empty() {
            Self::zero()
        } else {
            Self(text)
        }
    }

    /// Append a digit, replacing a lone leading zero.
    pub fn push_digit(&mut self, digit: Digit) {
        if self.0 == "0" {
            self.0.clear();
        }
        self.0.push(digit.as_char());
    }

    /// Append a decimal point unless one is already present.
    ///
    /// Returns whether the entry changed.
    pub fn push_decimal_point(&mut self) -> bool {
        if self.has_decimal_point() {
            return false;
        }
        self.0.push('.');
        true
    }

    /// Drop the last character, falling back to `"0"` rather than empty
    /// or a bare minus sign.
    pub fn pop(&mut self) {
        self.0.pop();
        if self.0.is_empty() || self.0 == "-" {
            *self = Self::zero();
        }
    }

    pub fn has_decimal_point(&self) -> bool {
        self.0.contains('.')
    }

    pub fn is_zero_literal(&self) -> bool {
        self.0 == "0"
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Character count, as shown on the display.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Numeric value of the literal, if it parses as a float.
    ///
    /// Non-finite values are returned as-is; callers decide whether
    /// they are acceptable.
    pub fn value(&self) -> Option<f64> {
        parse_literal(&self.0)
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Entry {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Parse a literal the way the display produces it (`Infinity` included).
pub(crate) fn parse_literal(text: &str) -> Option<f64> {
    match text {
        "Infinity" => Some(f64::INFINITY),
        "-Infinity" => Some(f64::NEG_INFINITY),
        "NaN" => Some(f64::NAN),
        _ => text.parse::<f64>().ok(),
    }
}
