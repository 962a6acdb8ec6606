use api_state::ApiState;
use axum::{
    extract::{DefaultBodyLimit, FromRef},
    routing::{get, post},
    Router,
};
use routes::{chat::chat, liveness::live, readiness::ready};

pub mod api_state;
pub mod routes;

pub use routes::chat::{ChatRequest, ChatResponse, MESSAGE_TOO_LARGE_MESSAGE};

/// Router for API functionality, version 1
pub fn api_routes_v1<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
    ApiState: FromRef<S>,
{
    // Unauthenticated probes (for k8s/systemd)
    Router::new()
        .route("/ready", get(ready))
        .route("/live", get(live))
}

/// The chat endpoint used by the index page, mounted at the root.
pub fn chat_routes<S>(app_state: &ApiState) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
    ApiState: FromRef<S>,
{
    Router::new().route(
        "/chat",
        post(chat).layer(DefaultBodyLimit::max(app_state.config.chat_max_body_bytes)),
    )
}
