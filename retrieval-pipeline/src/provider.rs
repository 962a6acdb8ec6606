use std::{sync::Arc, time::Duration};

use async_openai::{config::OpenAIConfig, types::CreateChatCompletionRequest, Client};
use async_trait::async_trait;
use backoff::ExponentialBackoffBuilder;
use common::{error::AppError, utils::config::AppConfig};

use crate::answer_retrieval::process_llm_response;

pub type OpenAIClientType = Client<OpenAIConfig>;

/// Backend that turns a chat request into the generated answer text.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(&self, request: CreateChatCompletionRequest) -> Result<String, AppError>;
}

pub struct OpenAICompletionProvider {
    client: Arc<OpenAIClientType>,
}

impl OpenAICompletionProvider {
    pub fn new(client: Arc<OpenAIClientType>) -> Self {
        Self { client }
    }

    /// Builds a client for the configured endpoint. Requests are sent once:
    /// the client's built-in rate-limit backoff is disabled.
    pub fn from_config(config: &AppConfig) -> Self {
        let no_retry = ExponentialBackoffBuilder::new()
            .with_max_elapsed_time(Some(Duration::ZERO))
            .build();

        let client = Client::with_config(
            OpenAIConfig::new()
                .with_api_key(&config.openai_api_key)
                .with_api_base(&config.openai_base_url),
        )
        .with_backoff(no_retry);

        Self::new(Arc::new(client))
    }
}

#[async_trait]
impl CompletionProvider for OpenAICompletionProvider {
    async fn complete(&self, request: CreateChatCompletionRequest) -> Result<String, AppError> {
        let response = self.client.chat().create(request).await?;
        process_llm_response(response)
    }
}
