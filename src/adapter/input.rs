//! Discrete inputs and the event names that produce them.

use crate::core::{Digit, Operator};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One keypad input. Every input maps onto exactly one accumulator call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Input {
    Digit(Digit),
    DecimalPoint,
    Operator(Operator),
    Equals,
    Backspace,
    Clear,
}

impl Input {
    /// Map a keyboard event key name (`"7"`, `"Enter"`, `"Escape"`, ...).
    ///
    /// Returns `None` for keys the keypad does not handle.
    ///
    /// # Example
    ///
    /// ```rust
    /// use abacus::adapter::Input;
    /// use abacus::core::Operator;
    ///
    /// assert_eq!(Input::from_key("*"), Some(Input::Operator(Operator::Multiply)));
    /// assert_eq!(Input::from_key("Enter"), Some(Input::Equals));
    /// assert_eq!(Input::from_key("C"), Some(Input::Clear));
    /// assert_eq!(Input::from_key("Tab"), None);
    /// ```
    pub fn from_key(key: &str) -> Option<Self> {
        let input = match key {
            "+" => Self::Operator(Operator::Add),
            "-" => Self::Operator(Operator::Subtract),
            "*" => Self::Operator(Operator::Multiply),
            "/" => Self::Operator(Operator::Divide),
            "." => Self::DecimalPoint,
            "Enter" | "=" => Self::Equals,
            "Escape" => Self::Clear,
            "Backspace" => Self::Backspace,
            _ if key.eq_ignore_ascii_case("c") => Self::Clear,
            _ => return single_char(key).and_then(Digit::from_char).map(Self::Digit),
        };
        Some(input)
    }

    /// Map a button action name (`"add"`, `"decimal"`, ...) or a digit
    /// button's number.
    pub fn from_action(action: &str) -> Option<Self> {
        let input = match action {
            "add" => Self::Operator(Operator::Add),
            "subtract" => Self::Operator(Operator::Subtract),
            "multiply" => Self::Operator(Operator::Multiply),
            "divide" => Self::Operator(Operator::Divide),
            "decimal" => Self::DecimalPoint,
            "equals" => Self::Equals,
            "clear" => Self::Clear,
            "backspace" => Self::Backspace,
            _ => return single_char(action).and_then(Digit::from_char).map(Self::Digit),
        };
        Some(input)
    }

    /// Button action name, the inverse of [`Input::from_action`].
    pub fn action(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::DecimalPoint => "decimal".to_string(),
            Self::Operator(Operator::Add) => "add".to_string(),
            Self::Operator(Operator::Subtract) => "subtract".to_string(),
            Self::Operator(Operator::Multiply) => "multiply".to_string(),
            Self::Operator(Operator::Divide) => "divide".to_string(),
            Self::Equals => "equals".to_string(),
            Self::Backspace => "backspace".to_string(),
            Self::Clear => "clear".to_string(),
        }
    }

    /// Every input the keypad offers, in button order.
    pub fn all() -> Vec<Input> {
        let mut inputs: Vec<Input> = Digit::all().map(Self::Digit).collect();
        inputs.push(Self::DecimalPoint);
        inputs.extend(Operator::ALL.into_iter().map(Self::Operator));
        inputs.extend([Self::Equals, Self::Backspace, Self::Clear]);
        inputs
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit(d) => write!(f, "{d}"),
            Self::DecimalPoint => f.write_str("."),
            Self::Operator(op) => write!(f, "{op}"),
            Self::Equals => f.write_str("="),
            Self::Backspace => f.write_str("⌫"),
            Self::Clear => f.write_str("C"),
        }
    }
}

fn single_char(text: &str) -> Option<char> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
