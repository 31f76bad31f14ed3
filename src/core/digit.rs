//! Validated decimal digits.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single decimal digit, `0` through `9`.
///
/// Inputs reach the accumulator pre-validated, so malformed digit
/// sequences cannot be constructed.
///
/// # Example
///
/// ```rust
/// use abacus::core::Digit;
///
/// let seven = Digit::new(7).unwrap();
/// assert_eq!(seven.as_char(), '7');
/// assert!(Digit::new(10).is_none());
/// assert_eq!(Digit::from_char('3'), Digit::new(3));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    pub const ZERO: Digit = Digit(0);

    /// Create a digit from its numeric value. Returns `None` above 9.
    pub fn new(value: u8) -> Option<Self> {
        (value <= 9).then_some(Self(value))
    }

    /// Create a digit from an ASCII character.
    pub fn from_char(c: char) -> Option<Self> {
        c.to_digit(10).map(|d| Self(d as u8))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }

    /// All ten digits in ascending order.
    pub fn all() -> impl Iterator<Item = Digit> {
        (0..=9).map(Self)
    }
}

impl TryFrom<u8> for Digit {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("{value} is not a decimal digit"))
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_only_decimal_digits() {
        for value in 0..=9 {
            assert_eq!(Digit::new(value).map(Digit::value), Some(value));
        }
        assert!(Digit::new(10).is_none());
        assert!(Digit::new(255).is_none());
    }

    #[test]
    fn from_char_rejects_non_digits() {
        assert_eq!(Digit::from_char('0'), Some(Digit::ZERO));
        assert!(Digit::from_char('a').is_none());
        assert!(Digit::from_char('.').is_none());
        assert!(Digit::from_char('٣').is_none());
    }

    #[test]
    fn as_char_matches_value() {
        let chars: String = Digit::all().map(Digit::as_char).collect();
        assert_eq!(chars, "0123456789");
    }

    #[test]
    fn digit_deserialization_is_validated() {
        let digit: Digit = serde_json::from_str("4").unwrap();
        assert_eq!(digit.value(), 4);
        assert!(serde_json::from_str::<Digit>("12").is_err());
    }
}
