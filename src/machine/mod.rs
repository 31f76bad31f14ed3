//! The accumulator state machine.
//!
//! This module owns the only mutable state in the core. It composes the
//! pure pieces of [`crate::core`] into six operations:
//!
//! - `enter_digit`, `enter_decimal_point`: build the entry
//! - `set_operator`, `evaluate`: chain and resolve operations left to right
//! - `backspace`, `clear`: edit and reset
//!
//! plus the derived `display_text()` read. Operations run to completion
//! synchronously; there is no queuing and no timing here.

mod accumulator;

pub use accumulator::Accumulator;
