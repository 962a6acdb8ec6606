use std::{path::Path, sync::Arc};

use api_router::api_state::ApiState;
use book_chat::build_router;
use common::utils::config::get_config;
use html_router::html_state::HtmlState;
use ingestion_pipeline::load_corpus;
use retrieval_pipeline::{AnswerService, AnswerSettings, OpenAICompletionProvider};
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main(flavor = "multi_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Set up tracing
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .try_init()
        .ok();

    // Get config
    let config = get_config()?;

    if config.openai_api_key.is_empty() {
        warn!("OPENAI_API_KEY is not set in the environment or .env, completions will fail");
    }

    // The corpus is loaded once, before any request is accepted
    let corpus = load_corpus(Path::new(&config.book_docs_path)).await;

    let provider = Arc::new(OpenAICompletionProvider::from_config(&config));
    let answer_service =
        AnswerService::new(provider, corpus, AnswerSettings::from_config(&config));

    let api_state = ApiState::new(&config, answer_service);
    let html_state = HtmlState::new(config.clone(), None);

    let app = build_router(api_state, html_state);

    info!("Starting server listening on 0.0.0.0:{}", config.http_port);
    let serve_address = format!("0.0.0.0:{}", config.http_port);
    let listener = tokio::net::TcpListener::bind(serve_address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
