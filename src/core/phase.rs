//! Derived position of the accumulator.
//!
//! The accumulator stores only its four fields; the phase is computed
//! from the pending operator and the reset flag. The guards that decide
//! whether an evaluation runs are pure predicates over the phase.

use serde::{Deserialize, Serialize};

/// Where the accumulator currently is in the `operand operator operand`
/// cycle.
///
/// | pending operator | reset on next digit | phase             |
/// |------------------|---------------------|-------------------|
/// | absent           | false               | `Entering`        |
/// | absent           | true                | `Resolved`        |
/// | present          | true                | `AwaitingOperand` |
/// | present          | false               | `EnteringOperand` |
///
/// # Example
///
/// ```rust
/// use abacus::core::Phase;
///
/// let phase = Phase::derive(true, false);
/// assert_eq!(phase, Phase::EnteringOperand);
/// assert!(phase.can_evaluate());
///
/// assert!(!Phase::derive(true, true).can_evaluate());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Typing the first operand.
    Entering,
    /// Showing an evaluation result; the next digit starts over.
    Resolved,
    /// An operator was pressed and no second operand typed yet.
    AwaitingOperand,
    /// Typing the second operand.
    EnteringOperand,
}

impl Phase {
    /// Compute the phase from the stored fields.
    pub fn derive(has_pending_operator: bool, reset_on_next_digit: bool) -> Self {
        match (has_pending_operator, reset_on_next_digit) {
            (false, false) => Self::Entering,
            (false, true) => Self::Resolved,
            (true, true) => Self::AwaitingOperand,
            (true, false) => Self::EnteringOperand,
        }
    }

    /// Get the phase's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Entering => "Entering",
            Self::Resolved => "Resolved",
            Self::AwaitingOperand => "AwaitingOperand",
            Self::EnteringOperand => "EnteringOperand",
        }
    }

    /// Evaluation only runs once a second operand has been typed.
    pub fn can_evaluate(&self) -> bool {
        matches!(self, Self::EnteringOperand)
    }

    /// A new operator collapses the pending operation first in exactly the
    /// phases where evaluation is possible.
    pub fn chains_on_operator(&self) -> bool {
        self.can_evaluate()
    }

    /// Whether the next digit replaces the entry instead of extending it.
    pub fn starts_fresh_entry(&self) -> bool {
        matches!(self, Self::Resolved | Self::AwaitingOperand)
    }
}
