//! Error types for the gateway crate and their HTTP translation.

use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use numsort_core::{RequestError, ValidationError};
use serde_json::json;

/// Errors that can occur during gateway request handling.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GatewayError {
    /// The body parsed as JSON but does not have the request shape.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The body is not syntactically valid JSON.
    #[error("malformed request body: {0}")]
    MalformedBody(String),

    /// An unexpected fault while handling the request.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<RequestError> for GatewayError {
    fn from(err: RequestError) -> Self {
        match err {
            RequestError::Invalid(e) => Self::Validation(e),
            RequestError::Malformed(msg) => Self::MalformedBody(msg),
            other => Self::Internal(other.to_string()),
        }
    }
}

impl GatewayError {
    /// HTTP status this error is reported with.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::MalformedBody(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            Self::Validation(e) => json!({ "detail": e.into_violations() }),
            Self::MalformedBody(msg) => json!({
                "detail": [{ "loc": ["body"], "msg": msg, "type": "json_invalid" }]
            }),
            // Internal details stay in the logs.
            Self::Internal(_) => json!({ "detail": "internal server error" }),
        };
        (status, Json(body)).into_response()
    }
}

/// Turn a caught handler panic into a generic 500 response.
#[allow(clippy::needless_pass_by_value)]
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_owned()
    } else {
        "unknown panic payload".to_owned()
    };
    tracing::error!(panic = %detail, "request handler panicked");
    GatewayError::Internal(detail).into_response()
}
