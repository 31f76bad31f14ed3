//! The four binary operators.

use super::error::CalcError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A binary arithmetic operator.
///
/// Operators carry no precedence: the accumulator resolves them strictly
/// left to right.
///
/// # Example
///
/// ```rust
/// use abacus::core::{CalcError, Operator};
///
/// assert_eq!(Operator::Subtract.apply(5.0, 3.0), Ok(2.0));
/// assert_eq!(Operator::Divide.apply(1.0, 0.0), Err(CalcError::DivideByZero));
/// assert_eq!(Operator::from_symbol("×"), Some(Operator::Multiply));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// Get the operator's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Add => "Add",
            Self::Subtract => "Subtract",
            Self::Multiply => "Multiply",
            Self::Divide => "Divide",
        }
    }

    /// Symbol shown on the keypad.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Parse either the ASCII or the keypad symbol.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" | "−" => Some(Self::Subtract),
            "*" | "×" | "x" => Some(Self::Multiply),
            "/" | "÷" => Some(Self::Divide),
            _ => None,
        }
    }

    /// Apply the operator with `lhs` as the pending operand.
    ///
    /// Pure: the only failure is division by an exact zero.
    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64, CalcError> {
        match self {
            Self::Add => Ok(lhs + rhs),
            Self::Subtract => Ok(lhs - rhs),
            Self::Multiply => Ok(lhs * rhs),
            Self::Divide if rhs == 0.0 => Err(CalcError::DivideByZero),
            Self::Divide => Ok(lhs / rhs),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
