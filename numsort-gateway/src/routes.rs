//! Axum route handlers for the numsort API.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, State},
    routing::{get, post},
    Json, Router,
};
use numsort_core::{sort_numbers, SortRequest, SortResponse};
use serde::Serialize;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};
use tracing::debug;

use crate::{
    config::GatewayConfig,
    error::{panic_response, GatewayError},
};

// ── Shared state ─────────────────────────────────────────────────────────────

/// Read-only settings shared by every request.
#[derive(Debug, Clone)]
pub struct AppState {
    service_name: Arc<str>,
    max_body_bytes: usize,
}

impl AppState {
    /// Create state reporting `service_name` with the given body limit.
    pub fn new(service_name: impl Into<Arc<str>>, max_body_bytes: usize) -> Self {
        Self { service_name: service_name.into(), max_body_bytes }
    }

    /// Build state from loaded configuration.
    #[must_use]
    pub fn from_config(config: &GatewayConfig) -> Self {
        Self::new(config.service_name.as_str(), config.max_body_bytes)
    }
}

// ── Response types ────────────────────────────────────────────────────────────

/// Body of the `GET /` status endpoint.
#[derive(Debug, Serialize)]
pub struct StatusMessage {
    pub message: String,
}

// ── Router ────────────────────────────────────────────────────────────────────

/// Build the application router.
pub fn create_router(state: AppState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.max_body_bytes);
    let routes = Router::new()
        .route("/", get(root))
        .route("/sorted-numbers", post(sorted_numbers))
        .layer(body_limit)
        .with_state(state);
    with_middleware(routes)
}

// Panics become 500s inside the trace span so the span records the status.
fn with_middleware(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// `GET /` — liveness probe naming the service.
pub async fn root(State(state): State<AppState>) -> Json<StatusMessage> {
    Json(StatusMessage { message: format!("{} is running", state.service_name) })
}

/// `POST /sorted-numbers` — return the submitted integers in original and
/// sorted order.
///
/// The body is read as raw bytes so that JSON syntax errors, shape errors and
/// boolean elements can each be reported precisely.
///
/// # Errors
/// Returns [`GatewayError::MalformedBody`] if the body is not JSON, or
/// [`GatewayError::Validation`] if it is not `{"numbers": [<int>, ...]}`.
pub async fn sorted_numbers(body: Bytes) -> Result<Json<SortResponse>, GatewayError> {
    let request = SortRequest::from_slice(&body).map_err(|e| {
        debug!(error = %e, "rejected sort request");
        GatewayError::from(e)
    })?;

    let count = request.numbers.len();
    let response = sort_numbers(request);
    debug_assert!(response.is_consistent(), "sort produced an inconsistent response");
    debug!(count, "sorted numbers");
    Ok(Json(response))
}
