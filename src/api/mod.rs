//! Stateless single-operation calculate contract.
//!
//! Request and response bodies are JSON:
//!
//! ```json
//! {"num1": 6, "num2": "7", "operator": "*"}
//! ```
//!
//! answers `200 {"result": 42.0}`; failures answer `400 {"error": "..."}`.
//! This module defines the contract only and is independent of any HTTP
//! server: a handler passes the raw body to [`handle`] and writes back the
//! returned status and body.

use crate::core::{CalcError, Operator};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub mod error;

pub use error::ApiError;

/// Body of a calculate request.
///
/// Operands may be JSON numbers or numeric strings and the operator must
/// be a string; anything else is rejected when the request is evaluated,
/// so operand errors win over operator errors.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculateRequest {
    #[serde(default)]
    pub num1: Value,
    #[serde(default)]
    pub num2: Value,
    #[serde(default)]
    pub operator: Value,
}

/// Body of a calculate response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CalculateResponse {
    Result { result: f64 },
    Error { error: String },
}

/// Status code plus serialized body, ready for any HTTP layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiReply {
    pub status: u16,
    pub body: String,
}

/// Evaluate a parsed request.
///
/// Operands are checked before the operator.
///
/// # Example
///
/// ```rust
/// use abacus::api::{calculate, ApiError, CalculateRequest};
/// use serde_json::json;
///
/// let request = CalculateRequest {
///     num1: json!(6),
///     num2: json!("7"),
///     operator: json!("*"),
/// };
/// assert_eq!(calculate(&request), Ok(42.0));
///
/// let request = CalculateRequest {
///     num1: json!(1),
///     num2: json!(0),
///     operator: json!("/"),
/// };
/// assert_eq!(calculate(&request), Err(ApiError::DivisionByZero));
/// ```
pub fn calculate(request: &CalculateRequest) -> Result<f64, ApiError> {
    let lhs = operand(&request.num1).ok_or(ApiError::InvalidNumbers)?;
    let rhs = operand(&request.num2).ok_or(ApiError::InvalidNumbers)?;
    let operator = request
        .operator
        .as_str()
        .and_then(Operator::from_symbol)
        .ok_or(ApiError::InvalidOperator)?;

    let result = operator.apply(lhs, rhs).map_err(|err| match err {
        CalcError::DivideByZero => ApiError::DivisionByZero,
    })?;
    if !result.is_finite() {
        return Err(ApiError::NonFiniteResult);
    }
    Ok(result)
}

/// Handle a raw request body.
///
/// The body must be a JSON object; arrays and scalars are malformed.
pub fn handle(body: &str) -> ApiReply {
    let outcome = parse_request(body).and_then(|request| calculate(&request));

    let (status, response) = match outcome {
        Ok(result) => (200, CalculateResponse::Result { result }),
        Err(err) => {
            tracing::debug!(error = %err, status = err.status(), "Calculate request rejected");
            (
                err.status(),
                CalculateResponse::Error {
                    error: err.to_string(),
                },
            )
        }
    };

    let body = match serde_json::to_string(&response) {
        Ok(body) => body,
        Err(err) => {
            tracing::warn!(error = %err, "Failed to encode calculate response");
            return ApiReply {
                status: 500,
                body: r#"{"error":"Internal error"}"#.to_string(),
            };
        }
    };
    ApiReply { status, body }
}

fn parse_request(body: &str) -> Result<CalculateRequest, ApiError> {
    match serde_json::from_str::<Value>(body) {
        Ok(value @ Value::Object(_)) => {
            serde_json::from_value(value).map_err(|_| ApiError::InvalidBody)
        }
        _ => Err(ApiError::InvalidBody),
    }
}

fn operand(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(num1: Value, num2: Value, operator: &str) -> CalculateRequest {
        CalculateRequest {
            num1,
            num2,
            operator: json!(operator),
        }
    }

    #[test]
    fn calculate_handles_each_operator() {
        assert_eq!(calculate(&request(json!(2), json!(3), "+")), Ok(5.0));
        assert_eq!(calculate(&request(json!(2), json!(3), "-")), Ok(-1.0));
        assert_eq!(calculate(&request(json!(2), json!(3), "*")), Ok(6.0));
        assert_eq!(calculate(&request(json!(3), json!(2), "/")), Ok(1.5));
    }

    #[test]
    fn string_operands_are_parsed() {
        assert_eq!(
            calculate(&request(json!(" 2.5 "), json!("4"), "*")),
            Ok(10.0)
        );
    }

    #[test]
    fn invalid_operands_are_rejected() {
        assert_eq!(
            calculate(&request(json!("abc"), json!(1), "+")),
            Err(ApiError::InvalidNumbers)
        );
        assert_eq!(
            calculate(&request(json!(1), Value::Null, "+")),
            Err(ApiError::InvalidNumbers)
        );
        assert_eq!(
            calculate(&request(json!(true), json!(1), "+")),
            Err(ApiError::InvalidNumbers)
        );
    }

    #[test]
    fn operands_are_checked_before_operator() {
        assert_eq!(
            calculate(&request(json!("x"), json!(1), "%")),
            Err(ApiError::InvalidNumbers)
        );
        assert_eq!(
            calculate(&request(json!(1), json!(1), "%")),
            Err(ApiError::InvalidOperator)
        );
    }

    #[test]
    fn missing_operator_is_invalid() {
        let req = CalculateRequest {
            num1: json!(1),
            num2: json!(2),
            operator: Value::Null,
        };
        assert_eq!(calculate(&req), Err(ApiError::InvalidOperator));
    }

    #[test]
    fn non_string_operator_is_invalid_after_operand_checks() {
        let req = CalculateRequest {
            num1: json!(1),
            num2: json!(2),
            operator: json!(5),
        };
        assert_eq!(calculate(&req), Err(ApiError::InvalidOperator));

        let req = CalculateRequest {
            num1: json!("x"),
            num2: json!(2),
            operator: json!(["+"]),
        };
        assert_eq!(calculate(&req), Err(ApiError::InvalidNumbers));
    }

    #[test]
    fn overflow_is_rejected() {
        assert_eq!(
            calculate(&request(json!(1e308), json!(10), "*")),
            Err(ApiError::NonFiniteResult)
        );
    }

    #[test]
    fn handle_returns_result_body() {
        let reply = handle(r#"{"num1": 6, "num2": 7, "operator": "*"}"#);
        assert_eq!(reply.status, 200);
        let body: Value = serde_json::from_str(&reply.body).unwrap();
        assert_eq!(body, json!({"result": 42.0}));
    }

    #[test]
    fn handle_maps_errors_to_400() {
        let cases = [
            (r#"{"num1": 1, "num2": 0, "operator": "/"}"#, "Division by zero is not allowed"),
            (r#"{"num1": 1, "num2": 2, "operator": "^"}"#, "Invalid operator"),
            (r#"{"num1": "one", "num2": 2, "operator": "+"}"#, "Please enter valid numbers"),
            (r#"{"num2": 2, "operator": "+"}"#, "Please enter valid numbers"),
            (r#"{"num1": 1, "num2": 2, "operator": 5}"#, "Invalid operator"),
            (r#"{"num1": "x", "num2": 2, "operator": 5}"#, "Please enter valid numbers"),
            ("not json", "Invalid JSON body"),
            (r#"[1, 2, "+"]"#, "Invalid JSON body"),
            ("42", "Invalid JSON body"),
        ];

        for (body, message) in cases {
            let reply = handle(body);
            assert_eq!(reply.status, 400, "body {body}");
            let parsed: Value = serde_json::from_str(&reply.body).unwrap();
            assert_eq!(parsed, json!({ "error": message }), "body {body}");
        }
    }

    #[test]
    fn response_roundtrips() {
        let ok: CalculateResponse = serde_json::from_str(r#"{"result": 1.5}"#).unwrap();
        assert_eq!(ok, CalculateResponse::Result { result: 1.5 });
        let err: CalculateResponse = serde_json::from_str(r#"{"error": "nope"}"#).unwrap();
        assert_eq!(
            err,
            CalculateResponse::Error {
                error: "nope".to_string()
            }
        );
    }
}
