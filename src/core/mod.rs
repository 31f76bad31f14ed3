//! Core calculator types and logic.
//!
//! This module contains the pure functional core of the calculator:
//! - Validated inputs via `Digit` and `Operator`
//! - The literal under construction via `Entry`
//! - The derived `Phase` and the guards over it
//! - Result and display formatting
//!
//! Nothing in this module holds mutable state; the accumulator in
//! [`crate::machine`] composes these pieces.

mod digit;
mod entry;
mod error;
mod format;
mod operator;
mod phase;

pub use digit::Digit;
pub use entry::Entry;
pub use error::CalcError;
pub use format::{
    display_text, format_result, to_exponential, DISPLAY_MAX_CHARS, EXPONENT_FRACTION_DIGITS,
    RESULT_FRACTION_DIGITS,
};
pub use operator::Operator;
pub use phase::Phase;

pub(crate) use entry::parse_literal;
