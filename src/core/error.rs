//! Calculation errors.

use thiserror::Error;

/// Errors raised by the accumulator while resolving a pending operation.
///
/// The accumulator never mutates its state on the error path; recovery
/// (showing a banner, clearing) is up to the caller.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum CalcError {
    #[error("Cannot divide by zero")]
    DivideByZero,
}
