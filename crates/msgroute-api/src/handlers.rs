//! HTTP handlers.
//!
//! The routing handler decodes the raw body itself so that any body, with
//! or without a JSON content type, gets the same validation errors.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use msgroute_core::{ErrorBody, MessageRequest, RouteError, RouteResult};
use tracing::{error, info, warn};

use crate::ApiState;
use crate::metrics::render_prometheus;

/// Body returned for any server-side failure; the detail stays in the logs.
const SERVER_MALFUNCTION: &str = "Server malfunction";

fn error_response(msg: &str, status: StatusCode) -> Response {
    (
        status,
        Json(ErrorBody {
            error: msg.to_string(),
        }),
    )
        .into_response()
}

/// Map a routing error onto the wire, counting it as it goes.
fn failure(state: &ApiState, err: RouteError) -> Response {
    if err.is_client_error() {
        state.metrics.record_rejected();
        warn!(error = %err, "rejected routing request");
        error_response(&err.to_string(), StatusCode::BAD_REQUEST)
    } else {
        state.metrics.record_failed();
        error!(error = %err, "routing request failed");
        error_response(SERVER_MALFUNCTION, StatusCode::INTERNAL_SERVER_ERROR)
    }
}

fn route_body(state: &ApiState, body: &[u8]) -> RouteResult<Vec<u8>> {
    let (message, recipients) = MessageRequest::from_slice(body)?.into_parts()?;
    let response = state.engine.route(&message, &recipients)?;
    let encoded = serde_json::to_vec(&response)?;
    state
        .metrics
        .record_routed(response.routes.len(), response.recipient_count());
    Ok(encoded)
}

/// POST /message/route
pub async fn route_message(State(state): State<ApiState>, body: Bytes) -> Response {
    info!(bytes = body.len(), "got new message");
    state.metrics.record_request();

    match route_body(&state, &body) {
        Ok(encoded) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            encoded,
        )
            .into_response(),
        Err(e) => failure(&state, e),
    }
}

/// GET /healthz
pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

/// GET /metrics
pub async fn prometheus_metrics(State(state): State<ApiState>) -> impl IntoResponse {
    let body = render_prometheus(&state.metrics.snapshot());
    (
        StatusCode::OK,
        [("content-type", "text/plain; version=0.0.4; charset=utf-8")],
        body,
    )
}
