//! Field presence and coercion rules shared by the transaction handlers.
//!
//! Presence is explicit, not truthy: a field is missing when it is absent,
//! JSON `null`, or an empty/whitespace string. A numeric `0` counts as
//! present. Amounts accept a JSON number or a numeric string; identifiers
//! accept a JSON integer or a digit string. Anything else is rejected with
//! a validation error instead of being forwarded unparsed.

use serde_json::Value;

use crate::error::ApiError;

fn missing(operation: &str) -> ApiError {
    ApiError::Validation(format!("All fields are required for {operation}"))
}

/// The field's value, or `None` when absent, null, or a blank string.
fn present<'a>(body: &'a Value, field: &str) -> Option<&'a Value> {
    match body.get(field) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) if s.trim().is_empty() => None,
        Some(value) => Some(value),
    }
}

/// Required pass-through string field (MSISDNs, credentials, transaction
/// ids). A bare number is accepted and rendered, since HTML forms and JSON
/// clients disagree on quoting.
pub fn require_string(body: &Value, field: &str, operation: &str) -> Result<String, ApiError> {
    match present(body, field).ok_or_else(|| missing(operation))? {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        _ => Err(ApiError::Validation(format!(
            "Field '{field}' must be a string for {operation}"
        ))),
    }
}

/// Required monetary amount, coerced to `f64`.
pub fn require_amount(body: &Value, field: &str, operation: &str) -> Result<f64, ApiError> {
    let value = present(body, field).ok_or_else(|| missing(operation))?;
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    };
    parsed.ok_or_else(|| {
        ApiError::Validation(format!(
            "Field '{field}' must be a numeric amount for {operation}"
        ))
    })
}

/// Required integer identifier (agent ids, transaction references).
pub fn require_id(body: &Value, field: &str, operation: &str) -> Result<u64, ApiError> {
    let value = present(body, field).ok_or_else(|| missing(operation))?;
    let parsed = match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| {
        ApiError::Validation(format!(
            "Field '{field}' must be an integer identifier for {operation}"
        ))
    })
}
