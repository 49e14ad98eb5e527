//! HTTP handlers.
//!
//! The try-on handler decodes the body itself: a malformed JSON body maps to
//! the taxonomy's internal error (HTTP 500), matching the canonical
//! contract, rather than axum's default extractor rejection.

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use std::sync::Arc;

use restyle_core::{run_try_on, UpstreamClient};
use restyle_types::{TryOnError, TryOnRequest};

#[derive(Clone)]
pub struct AppState {
    pub upstream: Arc<UpstreamClient>,
}

#[derive(Serialize)]
struct TryOnOk {
    success: bool,
    image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    style: Option<String>,
}

#[derive(Serialize)]
struct TryOnFailed {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    debug: Option<String>,
}

pub async fn handle_try_on(State(state): State<AppState>, body: Bytes) -> Response {
    let request: TryOnRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(e) => {
            return error_response(&TryOnError::Internal {
                message: format!("invalid request body: {}", e),
            });
        }
    };

    match run_try_on(&state.upstream, &request).await {
        Ok(success) => (
            StatusCode::OK,
            Json(TryOnOk { success: true, image: success.image, style: success.style }),
        )
            .into_response(),
        Err(e) => error_response(&e),
    }
}

fn error_response(error: &TryOnError) -> Response {
    let status =
        StatusCode::from_u16(error.http_status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let payload = TryOnFailed {
        error: error.to_string(),
        debug: error.debug_hint().map(str::to_string),
    };
    (status, Json(payload)).into_response()
}

pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({"status": "ok"})))
}
