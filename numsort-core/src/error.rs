use std::fmt;

use serde::Serialize;
use serde_json::Value;

/// Category of a request validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum ViolationKind {
    /// A required field is absent from the request body.
    MissingField,
    /// A value has the wrong JSON shape, e.g. a string where a list or an
    /// integer was expected.
    TypeMismatch,
    /// A list element is a boolean literal standing in for an integer.
    InvalidElement,
}

impl ViolationKind {
    /// Stable wire code, identical to the serialized form.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::TypeMismatch => "type_mismatch",
            Self::InvalidElement => "invalid_element",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One step in the path to a rejected value: an object key or a list index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum LocSegment {
    /// Object key.
    Field(String),
    /// Position inside a list.
    Index(usize),
}

impl LocSegment {
    /// The root segment naming the request body itself.
    #[must_use]
    pub fn body() -> Self {
        Self::Field("body".to_owned())
    }
}

impl fmt::Display for LocSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(name) => f.write_str(name),
            Self::Index(index) => write!(f, "{index}"),
        }
    }
}

/// A single rejected value with its location and the reason it was rejected.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[non_exhaustive]
pub struct Violation {
    /// Path from the body root to the offending value.
    pub loc: Vec<LocSegment>,
    /// What went wrong.
    #[serde(rename = "type")]
    pub kind: ViolationKind,
    /// Human-readable explanation.
    #[serde(rename = "msg")]
    pub message: String,
    /// The rejected value, when one was present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<Value>,
}

impl Violation {
    /// Create a violation at `loc`.
    pub fn new(
        loc: Vec<LocSegment>,
        kind: ViolationKind,
        message: impl Into<String>,
        input: Option<Value>,
    ) -> Self {
        Self { loc, kind, message: message.into(), input }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.loc.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{segment}")?;
        }
        write!(f, ": {} ({})", self.message, self.kind)
    }
}

/// The request body did not conform to the expected shape.
///
/// Always carries at least one [`Violation`], ordered by position in the body.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("request validation failed with {} violation(s), first at {}", .violations.len(), first_violation(.violations))]
pub struct ValidationError {
    violations: Vec<Violation>,
}

impl ValidationError {
    pub(crate) fn new(violations: Vec<Violation>) -> Self {
        debug_assert!(!violations.is_empty(), "validation error without violations");
        Self { violations }
    }

    pub(crate) fn single(violation: Violation) -> Self {
        Self { violations: vec![violation] }
    }

    /// All violations found in the body.
    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Consume the error, returning its violations.
    #[must_use]
    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }
}

fn first_violation(violations: &[Violation]) -> String {
    violations.first().map_or_else(String::new, ToString::to_string)
}

/// Errors produced while turning raw body bytes into a request.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum RequestError {
    /// The body is not syntactically valid JSON.
    #[error("malformed JSON body: {0}")]
    Malformed(String),

    /// The body is valid JSON but does not match the request shape.
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}
