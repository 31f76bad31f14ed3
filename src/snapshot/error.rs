//! Snapshot error types.

use thiserror::Error;

/// Errors that can occur while encoding, decoding or restoring snapshots
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Serialization to JSON or binary format failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Deserialization from JSON or binary format failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// Snapshot failed validation; every violation is listed
    #[error("Snapshot validation failed: {}", .0.join("; "))]
    ValidationFailed(Vec<String>),
}

/// A single reason a snapshot cannot be restored.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SnapshotViolation {
    #[error("Unsupported snapshot version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("Entry is empty")]
    EmptyEntry,

    #[error("Entry '{entry}' has more than one decimal point")]
    MultipleDecimalPoints { entry: String },

    #[error("Entry '{entry}' is not a number")]
    UnparseableEntry { entry: String },

    #[error("Pending operand '{operand}' is not a number")]
    UnparseableOperand { operand: String },

    #[error("Pending operand '{operand}' has no pending operator")]
    OperandWithoutOperator { operand: String },

    #[error("Pending operator {operator} has no pending operand")]
    OperatorWithoutOperand { operator: String },
}
