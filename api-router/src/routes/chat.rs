use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::api_state::ApiState;

pub const MESSAGE_TOO_LARGE_MESSAGE: &str =
    "Your message is too long. Please shorten it and try again.";

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

/// Answers a question about the book.
///
/// Always responds with 200; guard messages and completion failures are
/// carried in the `response` field. The body is parsed as JSON whatever its
/// content type. A body that does not parse counts as a request without a
/// message.
pub async fn chat(
    State(state): State<ApiState>,
    body: Result<Bytes, BytesRejection>,
) -> Json<ChatResponse> {
    let body = match body {
        Ok(body) => body,
        Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            warn!(limit = state.config.chat_max_body_bytes, "Chat payload over the size limit");
            return Json(ChatResponse {
                response: MESSAGE_TOO_LARGE_MESSAGE.to_string(),
            });
        }
        Err(rejection) => {
            warn!(error = %rejection, "Failed to read chat payload");
            Bytes::new()
        }
    };

    let question = match serde_json::from_slice::<ChatRequest>(&body) {
        Ok(request) => request.message,
        Err(e) => {
            warn!(error = %e, "Ignoring unreadable chat payload");
            None
        }
    };

    let outcome = state.answer_service.answer(question.as_deref()).await;
    if outcome.is_failure() {
        warn!("Chat request answered with a failure message");
    } else {
        info!("Chat request answered");
    }

    Json(ChatResponse {
        response: outcome.into_response_text(),
    })
}
