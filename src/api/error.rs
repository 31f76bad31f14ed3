//! Calculate endpoint errors.

use thiserror::Error;

/// Errors returned by [`super::calculate`]. Every variant maps to an
/// HTTP status and carries the message sent to the client.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    #[error("Invalid JSON body")]
    InvalidBody,

    #[error("Please enter valid numbers")]
    InvalidNumbers,

    #[error("Invalid operator")]
    InvalidOperator,

    #[error("Division by zero is not allowed")]
    DivisionByZero,

    #[error("Result is not a finite number")]
    NonFiniteResult,
}

impl ApiError {
    /// Status shared by every rejection.
    pub const STATUS: u16 = 400;

    /// HTTP status code for the response. Every variant is a client error;
    /// a 500 only comes from [`super::handle`] failing to encode its reply.
    pub fn status(&self) -> u16 {
        Self::STATUS
    }
}
