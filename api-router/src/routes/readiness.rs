use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::api_state::ApiState;

/// Readiness probe: returns 200 once the book corpus is loaded, else 503.
pub async fn ready(State(state): State<ApiState>) -> impl IntoResponse {
    let corpus = state.answer_service.corpus();

    if corpus.is_empty() {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "error",
                "checks": { "corpus": "fail" },
                "reason": "book content not loaded"
            })),
        )
    } else {
        (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "checks": { "corpus": "ok" },
                "corpus_bytes": corpus.len()
            })),
        )
    }
}
