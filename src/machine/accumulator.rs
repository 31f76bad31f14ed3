//! Accumulator that resolves keypad input into arithmetic.

use crate::core::{display_text, format_result, CalcError, Digit, Entry, Operator, Phase};
use serde::{Deserialize, Serialize};

/// The calculator state machine.
///
/// Holds the entry being typed, the pending left operand and operator, and
/// whether the next digit starts a fresh entry. Every field changes only
/// through the six operations below.
///
/// # Example
///
/// ```rust
/// use abacus::core::{Digit, Operator};
/// use abacus::machine::Accumulator;
///
/// let d = |n| Digit::new(n).unwrap();
/// let mut calc = Accumulator::new();
///
/// calc.enter_digit(d(2));
/// calc.set_operator(Operator::Add).unwrap();
/// calc.enter_digit(d(3));
/// calc.set_operator(Operator::Multiply).unwrap();
/// calc.enter_digit(d(4));
/// calc.evaluate().unwrap();
///
/// assert_eq!(calc.display_text(), "20");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Accumulator {
    pub(crate) entry: Entry,
    pub(crate) pending_operand: Option<Entry>,
    pub(crate) pending_operator: Option<Operator>,
    pub(crate) reset_on_next_digit: bool,
}

impl Accumulator {
    /// Create an accumulator showing `0` with nothing pending.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the entry (pure)
    pub fn entry(&self) -> &Entry {
        &self.entry
    }

    pub fn pending_operand(&self) -> Option<&Entry> {
        self.pending_operand.as_ref()
    }

    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending_operator
    }

    pub fn resets_on_next_digit(&self) -> bool {
        self.reset_on_next_digit
    }

    /// Get the derived phase (pure)
    pub fn phase(&self) -> Phase {
        Phase::derive(self.pending_operator.is_some(), self.reset_on_next_digit)
    }

    /// Text for the display. Never modifies the entry.
    pub fn display_text(&self) -> String {
        display_text(self.entry.as_str())
    }

    /// Type a digit.
    pub fn enter_digit(&mut self, digit: Digit) {
        if self.phase().starts_fresh_entry() {
            self.entry = Entry::from_digit(digit);
            self.reset_on_next_digit = false;
        } else {
            self.entry.push_digit(digit);
        }
        tracing::debug!(digit = %digit, entry = %self.entry, "Digit entered");
    }

    /// Type a decimal point. Repeated points are ignored.
    pub fn enter_decimal_point(&mut self) {
        if self.phase().starts_fresh_entry() {
            self.entry = Entry::zero();
            self.entry.push_decimal_point();
            self.reset_on_next_digit = false;
        } else if !self.entry.push_decimal_point() {
            tracing::trace!(entry = %self.entry, "Decimal point already present");
            return;
        }
        tracing::debug!(entry = %self.entry, "Decimal point entered");
    }

    /// Press an operator.
    ///
    /// If a second operand has been typed since the last operator, the
    /// pending operation is resolved first, so `2 + 3 × 4` is `(2 + 3) × 4`.
    /// Pressing operators back to back only replaces the pending one.
    ///
    /// A divide-by-zero while collapsing is returned and leaves the state
    /// untouched; the new operator is not applied.
    pub fn set_operator(&mut self, operator: Operator) -> Result<(), CalcError> {
        if self.phase().chains_on_operator() {
            self.evaluate()?;
        } else if let Some(previous) = self.pending_operator {
            if previous != operator {
                tracing::debug!(
                    previous = %previous,
                    operator = %operator,
                    "Pending operator replaced"
                );
            }
        }

        self.pending_operand = Some(self.entry.clone());
        self.pending_operator = Some(operator);
        self.reset_on_next_digit = true;
        tracing::debug!(
            operator = %operator,
            operand = %self.entry,
            "Operator pending"
        );
        Ok(())
    }

    /// Resolve the pending operation.
    ///
    /// Returns `Ok(None)` without touching anything when there is nothing to
    /// resolve: no pending operator, no second operand typed yet, or an
    /// operand that is not a finite number. On success the formatted result
    /// becomes the entry and `Ok(Some(result))` is returned.
    pub fn evaluate(&mut self) -> Result<Option<f64>, CalcError> {
        if !self.phase().can_evaluate() {
            tracing::trace!(phase = self.phase().name(), "Nothing to evaluate");
            return Ok(None);
        }
        let Some(operator) = self.pending_operator else {
            return Ok(None);
        };

        let lhs = self.pending_operand.as_ref().and_then(Entry::value);
        let rhs = self.entry.value();
        let (Some(lhs), Some(rhs)) = (lhs, rhs) else {
            tracing::debug!(entry = %self.entry, "Operand does not parse; skipping evaluation");
            return Ok(None);
        };
        if !lhs.is_finite() || !rhs.is_finite() {
            tracing::debug!(lhs, rhs, "Operand is not finite; skipping evaluation");
            return Ok(None);
        }

        let result = operator.apply(lhs, rhs).inspect_err(|err| {
            tracing::warn!(lhs, rhs, operator = %operator, error = %err, "Evaluation failed");
        })?;

        self.entry = Entry::from_formatted(format_result(result));
        self.pending_operand = None;
        self.pending_operator = None;
        self.reset_on_next_digit = true;
        tracing::debug!(
            lhs,
            rhs,
            operator = %operator,
            result = %self.entry,
            "Evaluated"
        );
        Ok(Some(result))
    }

    /// Delete the last character of the entry.
    pub fn backspace(&mut self) {
        self.entry.pop();
        tracing::debug!(entry = %self.entry, "Backspace");
    }

    /// Reset every field to its initial value.
    pub fn clear(&mut self) {
        *self = Self::new();
        tracing::debug!("Cleared");
    }
}
