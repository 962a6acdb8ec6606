use axum::{http::StatusCode, Json};
use serde_json::{json, Value};

/// Liveness probe: the process is up and serving, whether or not the book
/// corpus could be loaded.
pub async fn live() -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "version": env!("CARGO_PKG_VERSION")
        })),
    )
}
