pub mod answer_retrieval;
pub mod outcome;
pub mod provider;

use std::sync::Arc;

use answer_retrieval::{build_prompt, create_chat_request};
use common::{corpus::Corpus, error::AppError, utils::config::AppConfig};
use tracing::{debug, error, instrument};

pub use outcome::AnswerOutcome;
pub use provider::{CompletionProvider, OpenAICompletionProvider};

/// Per-deployment settings for prompting the completion model.
#[derive(Debug, Clone)]
pub struct AnswerSettings {
    pub model: String,
    pub specialization: String,
}

impl AnswerSettings {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            model: config.chat_model.clone(),
            specialization: config.assistant_specialization.clone(),
        }
    }
}

/// Answers questions against the corpus loaded at startup.
#[derive(Clone)]
pub struct AnswerService {
    provider: Arc<dyn CompletionProvider>,
    corpus: Corpus,
    settings: AnswerSettings,
}

impl AnswerService {
    pub fn new(
        provider: Arc<dyn CompletionProvider>,
        corpus: Corpus,
        settings: AnswerSettings,
    ) -> Self {
        Self {
            provider,
            corpus,
            settings,
        }
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn settings(&self) -> &AnswerSettings {
        &self.settings
    }

    pub async fn answer(&self, question: Option<&str>) -> AnswerOutcome {
        answer_question(
            self.provider.as_ref(),
            &self.settings,
            question,
            &self.corpus,
        )
        .await
    }
}

/// Answers one question from the book content.
///
/// Missing questions and an empty corpus are answered locally without a
/// remote call. Completion failures are logged and returned as
/// [`AnswerOutcome::Failed`]; this never errors.
#[instrument(skip_all, fields(model = %settings.model))]
pub async fn answer_question(
    provider: &dyn CompletionProvider,
    settings: &AnswerSettings,
    question: Option<&str>,
    corpus: &Corpus,
) -> AnswerOutcome {
    let Some(question) = question.filter(|question| !question.is_empty()) else {
        debug!("Rejected request without a question");
        return AnswerOutcome::MissingQuestion;
    };

    if corpus.is_empty() {
        debug!("Rejected question because the book corpus is empty");
        return AnswerOutcome::CorpusUnavailable;
    }

    let prompt = build_prompt(&settings.specialization, corpus, question);
    let result = match create_chat_request(&settings.model, prompt) {
        Ok(request) => provider.complete(request).await,
        Err(e) => Err(AppError::from(e)),
    };

    match result {
        Ok(answer) => {
            debug!(answer_len = answer.len(), "Completion received");
            AnswerOutcome::Answered(answer)
        }
        Err(e) => {
            error!(error = %e, "Error during completion call");
            AnswerOutcome::Failed(e)
        }
    }
}
