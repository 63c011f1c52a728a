//! Request binding and validation for the sort endpoint.

use serde::Serialize;
use serde_json::Value;

use crate::error::{LocSegment, RequestError, ValidationError, Violation, ViolationKind};

/// Name of the single required body field.
pub const NUMBERS_FIELD: &str = "numbers";

/// A validated request to sort a list of integers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[non_exhaustive]
pub struct SortRequest {
    /// Integers in the order the client sent them.
    pub numbers: Vec<i64>,
}

impl SortRequest {
    /// Wrap an already-typed list.
    #[must_use]
    pub fn new(numbers: Vec<i64>) -> Self {
        Self { numbers }
    }

    /// Decode and validate a raw JSON body.
    ///
    /// # Errors
    /// Returns [`RequestError::Malformed`] if the bytes are not valid JSON, or
    /// [`RequestError::Invalid`] if the JSON does not match the request shape.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, RequestError> {
        let value: Value =
            serde_json::from_slice(bytes).map_err(|e| RequestError::Malformed(e.to_string()))?;
        Ok(Self::from_value(&value)?)
    }

    /// Validate an already-parsed JSON body.
    ///
    /// The body must be an object whose `numbers` key holds a list of
    /// integers. Booleans, floats, strings and integers outside the signed
    /// 64-bit range are rejected rather than coerced. Every bad element is
    /// reported, not only the first. Unknown keys are ignored.
    ///
    /// # Errors
    /// Returns a [`ValidationError`] listing every violation found.
    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        let Some(body) = value.as_object() else {
            return Err(ValidationError::single(Violation::new(
                vec![LocSegment::body()],
                ViolationKind::TypeMismatch,
                "request body must be a JSON object",
                Some(value.clone()),
            )));
        };

        let Some(raw) = body.get(NUMBERS_FIELD) else {
            return Err(ValidationError::single(Violation::new(
                numbers_loc(),
                ViolationKind::MissingField,
                "field 'numbers' is required",
                None,
            )));
        };

        let Some(items) = raw.as_array() else {
            return Err(ValidationError::single(Violation::new(
                numbers_loc(),
                ViolationKind::TypeMismatch,
                "value is not a valid list",
                Some(raw.clone()),
            )));
        };

        let mut numbers = Vec::with_capacity(items.len());
        let mut violations = Vec::new();
        for (index, item) in items.iter().enumerate() {
            match decode_element(item) {
                Ok(n) => numbers.push(n),
                Err((kind, message)) => {
                    let mut loc = numbers_loc();
                    loc.push(LocSegment::Index(index));
                    violations.push(Violation::new(loc, kind, message, Some(item.clone())));
                }
            }
        }

        if violations.is_empty() {
            Ok(Self { numbers })
        } else {
            Err(ValidationError::new(violations))
        }
    }
}

fn numbers_loc() -> Vec<LocSegment> {
    vec![LocSegment::body(), LocSegment::Field(NUMBERS_FIELD.to_owned())]
}

// Booleans get their own kind so clients can tell them from other non-integers.
fn decode_element(item: &Value) -> Result<i64, (ViolationKind, &'static str)> {
    match item {
        Value::Bool(_) => Err((ViolationKind::InvalidElement, "boolean values are not allowed")),
        Value::Number(n) => {
            // With `arbitrary_precision` this is the literal exactly as sent.
            let literal = n.to_string();
            if literal.contains(['.', 'e', 'E']) {
                return Err((ViolationKind::TypeMismatch, "value is not a valid integer"));
            }
            n.as_i64().ok_or((
                ViolationKind::TypeMismatch,
                "integer does not fit in a signed 64-bit value",
            ))
        }
        _ => Err((ViolationKind::TypeMismatch, "value is not a valid integer")),
    }
}
