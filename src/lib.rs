//! Abacus: a headless four-function calculator
//!
//! Abacus follows the "pure core, imperative shell" philosophy. The core
//! is a single accumulator state machine built from pure value types and
//! formatting functions; everything timed or visual lives in a thin
//! adapter around it, so the machine can be driven and tested without a
//! user interface.
//!
//! # Core Concepts
//!
//! - **Entry**: the decimal literal being typed, never empty
//! - **Accumulator**: entry plus pending operand and operator, resolved
//!   strictly left to right with no precedence
//! - **Phase**: the derived position of the machine, used by its guards
//! - **Keypad**: maps key names and button actions onto the accumulator
//!   and owns the error banner and press feedback
//!
//! # Example
//!
//! ```rust
//! use abacus::core::{Digit, Operator};
//! use abacus::machine::Accumulator;
//!
//! let d = |n| Digit::new(n).unwrap();
//! let mut calc = Accumulator::new();
//!
//! calc.enter_digit(d(1));
//! calc.set_operator(Operator::Divide).unwrap();
//! calc.enter_digit(d(4));
//! calc.evaluate().unwrap();
//! assert_eq!(calc.display_text(), "0.25");
//!
//! calc.set_operator(Operator::Divide).unwrap();
//! calc.enter_digit(d(0));
//! assert!(calc.evaluate().is_err());
//! assert_eq!(calc.display_text(), "0");
//! ```

pub mod adapter;
pub mod api;
pub mod core;
pub mod machine;
pub mod snapshot;

// Re-export commonly used types
pub use adapter::{Input, Keypad, KeypadConfig};
pub use core::{CalcError, Digit, Entry, Operator, Phase};
pub use machine::Accumulator;
pub use snapshot::Snapshot;
