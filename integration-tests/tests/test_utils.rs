use std::sync::Arc;

use api_router::api_state::ApiState;
use async_openai::{error::OpenAIError, types::CreateChatCompletionRequest};
use async_trait::async_trait;
use axum_test::TestServer;
use common::{corpus::Corpus, error::AppError, utils::config::AppConfig};
use html_router::html_state::HtmlState;
use retrieval_pipeline::{AnswerService, AnswerSettings, CompletionProvider};
use serde_json::Value;
use tokio::sync::Mutex;

/// Completion provider that answers every request with a fixed reply and
/// keeps the user prompts it was sent.
pub struct StubProvider {
    reply: Result<String, String>,
    prompts: Mutex<Vec<String>>,
}

impl StubProvider {
    pub fn replying(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(reply.to_string()),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(detail: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(detail.to_string()),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub async fn prompts(&self) -> Vec<String> {
        self.prompts.lock().await.clone()
    }
}

#[async_trait]
impl CompletionProvider for StubProvider {
    async fn complete(&self, request: CreateChatCompletionRequest) -> Result<String, AppError> {
        let body = serde_json::to_value(&request).expect("Failed to serialize request");
        if let Value::String(prompt) = &body["messages"][1]["content"] {
            self.prompts.lock().await.push(prompt.clone());
        }

        self.reply
            .clone()
            .map_err(|detail| AppError::OpenAI(OpenAIError::InvalidArgument(detail)))
    }
}

/// Creates mock configuration for testing
pub fn create_mock_config() -> AppConfig {
    AppConfig {
        openai_api_key: "test-key".to_string(),
        openai_base_url: "http://localhost:11434/v1".to_string(),
        chat_model: "test-model".to_string(),
        book_docs_path: "/tmp/book_chat_test/docs".to_string(),
        chat_max_body_bytes: 1024,
        ..AppConfig::default()
    }
}

/// Builds the full application around the given corpus and provider.
pub fn create_test_server(corpus: Corpus, provider: Arc<StubProvider>) -> TestServer {
    let config = create_mock_config();
    let answer_service =
        AnswerService::new(provider, corpus, AnswerSettings::from_config(&config));
    let api_state = ApiState::new(&config, answer_service);
    let html_state = HtmlState::new(config, None);

    TestServer::new(book_chat::build_router(api_state, html_state))
        .expect("Failed to start test server")
}
