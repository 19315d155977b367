//! Request handlers for the HTTP endpoint.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use log::warn;

use crate::common::{Error, ServerConfig};
use crate::server::types::{CompareRequest, ErrorResponse, SimulationRequest};

/// Browser front-end, embedded at compile time.
const INDEX_HTML: &str = include_str!("../../static/index.html");

/// `GET /`
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// `GET /health`
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "healthy"}))
}

/// `POST /simulate`
///
/// Runs on the blocking pool: a long sequence is pure CPU work.
pub async fn simulate(
    State(config): State<Arc<ServerConfig>>,
    Json(request): Json<SimulationRequest>,
) -> Response {
    let max = config.max_sequence_len;
    match tokio::task::spawn_blocking(move || request.run(max)).await {
        Ok(Ok(response)) => Json(response).into_response(),
        Ok(Err(err)) => error_response(&err),
        Err(join_err) => internal_error(&join_err.to_string()),
    }
}

/// `POST /compare`
pub async fn compare(
    State(config): State<Arc<ServerConfig>>,
    Json(request): Json<CompareRequest>,
) -> Response {
    let max = config.max_sequence_len;
    match tokio::task::spawn_blocking(move || request.run(max)).await {
        Ok(Ok(response)) => Json(response).into_response(),
        Ok(Err(err)) => error_response(&err),
        Err(join_err) => internal_error(&join_err.to_string()),
    }
}

/// Map a crate error to a JSON error response.
///
/// Unknown algorithms keep the front-end's original message.
pub(crate) fn error_response(err: &Error) -> Response {
    let (status, message) = match err {
        Error::UnknownPolicy(_) => (StatusCode::BAD_REQUEST, "Unknown algorithm".to_string()),
        Error::InvalidCapacity(_) | Error::SequenceTooLong { .. } | Error::Json(_) => {
            (StatusCode::BAD_REQUEST, err.to_string())
        }
        Error::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
    };
    warn!("rejecting request: {}", err);
    (status, Json(ErrorResponse { error: message })).into_response()
}

fn internal_error(message: &str) -> Response {
    warn!("simulation task failed: {}", message);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: format!("Simulation failed: {message}"),
        }),
    )
        .into_response()
}
