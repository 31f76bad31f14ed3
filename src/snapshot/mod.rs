//! Snapshot and restore for accumulators.
//!
//! A snapshot is a versioned, serializable copy of an accumulator's four
//! fields. It lets an embedding surface hand a calculator over (or bring
//! one back after a reload) without replaying input. Snapshots are
//! validated before they are restored, collecting every violation in a
//! single pass.

use crate::core::{parse_literal, Entry};
use crate::machine::Accumulator;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use uuid::Uuid;

pub mod error;

pub use error::{SnapshotError, SnapshotViolation};

/// Version identifier for snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serializable copy of an accumulator.
///
/// # Example
///
/// ```rust
/// use abacus::core::{Digit, Operator};
/// use abacus::machine::Accumulator;
/// use abacus::snapshot::Snapshot;
///
/// let mut calc = Accumulator::new();
/// calc.enter_digit(Digit::new(8).unwrap());
/// calc.set_operator(Operator::Divide).unwrap();
///
/// let json = Snapshot::capture(&calc).to_json().unwrap();
/// let restored = Snapshot::from_json(&json).unwrap().restore().unwrap();
/// assert_eq!(restored, calc);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Snapshot {
    /// Snapshot format version
    pub version: u32,

    /// Unique snapshot identifier
    pub id: Uuid,

    /// When the snapshot was taken
    pub taken_at: DateTime<Utc>,

    /// The captured state
    pub accumulator: Accumulator,
}

impl Snapshot {
    /// Capture the current state of an accumulator.
    pub fn capture(accumulator: &Accumulator) -> Self {
        let snapshot = Self {
            version: SNAPSHOT_VERSION,
            id: Uuid::new_v4(),
            taken_at: Utc::now(),
            accumulator: accumulator.clone(),
        };
        tracing::debug!(
            snapshot_id = %snapshot.id,
            phase = accumulator.phase().name(),
            "Snapshot captured"
        );
        snapshot
    }

    /// Serialize to human-readable JSON.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        serde_json::from_str(json).map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))
    }

    /// Serialize to the compact binary format.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        bincode::deserialize(bytes).map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))
    }

    /// Check every invariant, accumulating ALL violations.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<SnapshotViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<SnapshotViolation>>> = Vec::new();

        checks.push(if self.version == SNAPSHOT_VERSION {
            Validation::success(())
        } else {
            Validation::fail(SnapshotViolation::UnsupportedVersion {
                found: self.version,
                supported: SNAPSHOT_VERSION,
            })
        });

        let entry = self.accumulator.entry();
        checks.push(match check_literal(entry) {
            Validation::Success(()) if parse_literal(entry.as_str()).is_none() => {
                Validation::fail(SnapshotViolation::UnparseableEntry {
                    entry: entry.to_string(),
                })
            }
            shape => shape,
        });

        match (
            self.accumulator.pending_operand(),
            self.accumulator.pending_operator(),
        ) {
            (Some(operand), Some(_)) => {
                checks.push(check_literal(operand));
                checks.push(if parse_literal(operand.as_str()).is_some() {
                    Validation::success(())
                } else {
                    Validation::fail(SnapshotViolation::UnparseableOperand {
                        operand: operand.to_string(),
                    })
                });
            }
            (Some(operand), None) => {
                checks.push(Validation::fail(SnapshotViolation::OperandWithoutOperator {
                    operand: operand.to_string(),
                }));
            }
            (None, Some(operator)) => {
                checks.push(Validation::fail(SnapshotViolation::OperatorWithoutOperand {
                    operator: operator.name().to_string(),
                }));
            }
            (None, None) => {}
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// Validate and hand back the accumulator.
    pub fn restore(self) -> Result<Accumulator, SnapshotError> {
        match self.validate() {
            Validation::Success(()) => {
                tracing::debug!(snapshot_id = %self.id, "Snapshot restored");
                Ok(self.accumulator)
            }
            Validation::Failure(violations) => {
                let reasons: Vec<String> = violations.iter().map(|v| v.to_string()).collect();
                tracing::warn!(
                    snapshot_id = %self.id,
                    violations = reasons.len(),
                    "Snapshot rejected"
                );
                Err(SnapshotError::ValidationFailed(reasons))
            }
        }
    }
}

fn check_literal(entry: &Entry) -> Validation<(), NonEmptyVec<SnapshotViolation>> {
    if entry.is_empty() {
        Validation::fail(SnapshotViolation::EmptyEntry)
    } else if entry.as_str().matches('.').count() > 1 {
        Validation::fail(SnapshotViolation::MultipleDecimalPoints {
            entry: entry.to_string(),
        })
    } else {
        Validation::success(())
    }
}
